//! End-to-end sort runs: read, resolve keys, sort, write

use crate::compare::RecordComparator;
use crate::config::SortConfig;
use crate::csv_io::{self, CsvInput};
use crate::error::SortResult;
use crate::key::SortSpec;
use crate::record::Header;
use crate::sorter;

/// Counters describing a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSummary {
    /// Records read, sorted and written; a run never drops or adds rows
    pub records: usize,
    /// Columns written per record, after any projection
    pub columns: usize,
}

/// Run one sort end to end.
///
/// All key and column names are resolved against the input header before
/// any comparison happens, and the output is opened only after the whole
/// record set has sorted cleanly. A failing run therefore never leaves a
/// partially sorted file behind.
pub fn run(config: &SortConfig) -> SortResult<SortSummary> {
    config.validate()?;

    let CsvInput {
        header,
        mut records,
    } = csv_io::read_path(config.input.as_deref(), config.delimiter)?;

    let spec = SortSpec::resolve(&config.keys, &header, &config.date_format)?;
    let comparator = RecordComparator::new(&spec, header.len())?;
    let projection = resolve_projection(config.columns.as_deref(), &header)?;

    if config.debug {
        let source = if config.reading_from_stdin() {
            "stdin".to_string()
        } else {
            config.input.clone().unwrap_or_default()
        };
        eprintln!(
            "Read {} records of {} columns from {}",
            records.len(),
            header.len(),
            source
        );
        for (requested, resolved) in config.keys.iter().zip(spec.keys()) {
            eprintln!(
                "Key: column '{}' at position {}, compared as {}",
                requested.column, resolved.position, resolved.sort_type
            );
        }
    }

    sorter::sort_records(&mut records, &comparator)?;

    csv_io::write_path(
        config.output.as_deref(),
        config.delimiter,
        &header,
        &records,
        projection.as_deref(),
    )?;

    let columns = projection.as_ref().map_or(header.len(), Vec::len);
    if config.debug && !config.writing_to_stdout() {
        eprintln!("Wrote {} records of {} columns", records.len(), columns);
    }

    Ok(SortSummary {
        records: records.len(),
        columns,
    })
}

/// Resolve projection names against the header, preserving the requested
/// column order.
fn resolve_projection(
    columns: Option<&[String]>,
    header: &Header,
) -> SortResult<Option<Vec<usize>>> {
    match columns {
        Some(names) => {
            let mut positions = Vec::with_capacity(names.len());
            for name in names {
                positions.push(header.resolve(name)?);
            }
            Ok(Some(positions))
        }
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SortConfigBuilder;
    use crate::error::SortError;
    use crate::key::{KeySpec, SortType};
    use std::fs;
    use tempfile::TempDir;

    fn run_sort(
        input: &str,
        build: impl FnOnce(SortConfigBuilder) -> SortConfigBuilder,
    ) -> SortResult<(SortSummary, String)> {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input_file = temp_dir.path().join("input.csv");
        let output_file = temp_dir.path().join("output.csv");
        fs::write(&input_file, input).expect("Failed to write test input");

        let builder = SortConfigBuilder::new()
            .input(input_file.to_string_lossy().to_string())
            .output(output_file.to_string_lossy().to_string());
        let config = build(builder).build()?;

        let summary = run(&config)?;
        let output = fs::read_to_string(&output_file).expect("Failed to read test output");
        Ok((summary, output))
    }

    #[test]
    fn test_single_natural_key() {
        let (summary, output) = run_sort("item,count\nitem10,1\nitem2,2\nitem1,3\n", |b| {
            b.key(KeySpec::new("item", SortType::Natural))
        })
        .unwrap();

        assert_eq!(output, "item,count\nitem1,3\nitem2,2\nitem10,1\n");
        assert_eq!(summary, SortSummary { records: 3, columns: 2 });
    }

    #[test]
    fn test_date_then_natural_tiebreak() {
        let input = "order_date,item\n\
                     2023-01-01,itemB\n\
                     2022-01-01,itemZ\n\
                     2023-01-01,itemA\n";
        let (_, output) = run_sort(input, |b| {
            b.key(KeySpec::new("order_date", SortType::Date))
                .key(KeySpec::new("item", SortType::Natural))
        })
        .unwrap();

        assert_eq!(
            output,
            "order_date,item\n2022-01-01,itemZ\n2023-01-01,itemA\n2023-01-01,itemB\n"
        );
    }

    #[test]
    fn test_numeric_key_with_projection() {
        let input = "id,name,score\n3,carol,9\n1,alice,7\n2,bob,8\n";
        let (summary, output) = run_sort(input, |b| {
            b.key(KeySpec::new("id", SortType::Number))
                .columns(vec!["name".to_string(), "id".to_string()])
        })
        .unwrap();

        assert_eq!(output, "name,id\nalice,1\nbob,2\ncarol,3\n");
        assert_eq!(summary.columns, 2);
    }

    #[test]
    fn test_custom_delimiter_and_date_format() {
        let input = "when;what\n02/01/2023;late\n01/12/2022;early\n";
        let (_, output) = run_sort(input, |b| {
            b.key(KeySpec::new("when", SortType::Date))
                .delimiter(b';')
                .date_format("%d/%m/%Y")
        })
        .unwrap();

        assert_eq!(output, "when;what\n01/12/2022;early\n02/01/2023;late\n");
    }

    #[test]
    fn test_unknown_key_column_fails_before_sorting() {
        let result = run_sort("id,name\n1,alice\n", |b| {
            b.key(KeySpec::new("missing", SortType::Number))
        });
        assert!(matches!(result, Err(SortError::UnknownColumn { .. })));
    }

    #[test]
    fn test_parse_error_leaves_no_output_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let input_file = temp_dir.path().join("input.csv");
        let output_file = temp_dir.path().join("output.csv");
        fs::write(&input_file, "id\nfirst\nsecond\n").expect("Failed to write test input");

        let config = SortConfigBuilder::new()
            .input(input_file.to_string_lossy().to_string())
            .output(output_file.to_string_lossy().to_string())
            .key(KeySpec::new("id", SortType::Number))
            .build()
            .unwrap();

        assert!(matches!(run(&config), Err(SortError::InvalidNumber { .. })));
        assert!(!output_file.exists());
    }

    #[test]
    fn test_header_only_input_round_trips() {
        let (summary, output) = run_sort("id,name\n", |b| {
            b.key(KeySpec::new("id", SortType::Number))
        })
        .unwrap();
        assert_eq!(output, "id,name\n");
        assert_eq!(summary.records, 0);
    }

    #[test]
    fn test_sorting_twice_is_idempotent() {
        let input = "n\n2\n1\n2\n";
        let (_, once) = run_sort(input, |b| b.key(KeySpec::new("n", SortType::Number))).unwrap();
        let (_, twice) = run_sort(&once, |b| b.key(KeySpec::new("n", SortType::Number))).unwrap();
        assert_eq!(once, twice);
    }
}
