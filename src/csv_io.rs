//! CSV reading and writing around the sort core

use std::fs::File;
use std::io::{self, BufWriter, Read, Write};

use csv::{ReaderBuilder, WriterBuilder};

use crate::error::{SortContext, SortResult};
use crate::record::{Header, Record};

/// A fully parsed input: the header row plus every data row.
///
/// Reading is strict: every row must have exactly as many fields as the
/// header, so a ragged row fails the whole read instead of producing
/// records with silently shifted columns.
#[derive(Debug)]
pub struct CsvInput {
    pub header: Header,
    pub records: Vec<Record>,
}

/// Read an entire CSV stream into memory.
pub fn read_from<R: Read>(reader: R, delimiter: u8) -> SortResult<CsvInput> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let header_row = reader.headers()?.clone();
    let header = Header::new(header_row.iter().map(str::to_string).collect());

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        records.push(Record::new(row.iter().map(str::to_string).collect()));
    }

    Ok(CsvInput { header, records })
}

/// Read a CSV file, or stdin when `path` is `None` or `-`.
pub fn read_path(path: Option<&str>, delimiter: u8) -> SortResult<CsvInput> {
    let input: Box<dyn Read> = match path {
        Some(path) if path != "-" => Box::new(File::open(path).with_file_context(path)?),
        _ => Box::new(io::stdin()),
    };
    read_from(input, delimiter)
}

/// Write the header and records to a CSV stream.
///
/// With a projection, only the listed positions are written, in projection
/// order; otherwise every column is written in source order. Field values
/// pass through unaltered either way.
pub fn write_to<W: Write>(
    writer: W,
    delimiter: u8,
    header: &Header,
    records: &[Record],
    projection: Option<&[usize]>,
) -> SortResult<()> {
    let mut writer = WriterBuilder::new().delimiter(delimiter).from_writer(writer);

    match projection {
        Some(positions) => {
            let names = header.names();
            writer.write_record(
                positions
                    .iter()
                    .map(|&p| names.get(p).map(String::as_str).unwrap_or("")),
            )?;
            for record in records {
                writer.write_record(positions.iter().map(|&p| record.field(p).unwrap_or("")))?;
            }
        }
        None => {
            writer.write_record(header.names())?;
            for record in records {
                writer.write_record(record.fields())?;
            }
        }
    }

    writer.flush()?;
    Ok(())
}

/// Write to a file, or stdout when `path` is `None`.
pub fn write_path(
    path: Option<&str>,
    delimiter: u8,
    header: &Header,
    records: &[Record],
    projection: Option<&[usize]>,
) -> SortResult<()> {
    let output: Box<dyn Write> = match path {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_file_context(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };
    write_to(output, delimiter, header, records, projection)
}
