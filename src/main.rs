//! csvsort: multi-column CSV sorting from the command line
//!
//! Reads one delimited file (or stdin), reorders its records under typed
//! column keys and writes the result (or a column projection of it) to a
//! file or stdout.

use std::process;

use clap::{Arg, ArgAction, Command};

// Import from the library modules
use csv_sort::{
    config::{SortConfig, SortConfigBuilder},
    error::{SortError, SortResult},
    key::{KeySpec, SortType},
    sort_file, EXIT_SUCCESS,
};

fn main() {
    let result = run();
    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("csvsort: {}", e);
            process::exit(e.exit_code());
        }
    }
}

fn run() -> SortResult<i32> {
    let matches = build_cli().get_matches();
    let config = parse_config_from_matches(&matches)?;
    sort_file(&config)?;
    Ok(EXIT_SUCCESS)
}

fn build_cli() -> Command {
    Command::new("csvsort")
        .version(env!("CARGO_PKG_VERSION"))
        .override_usage("csvsort [OPTION]... [FILE]")
        .about("Sort CSV records by typed column keys")
        .long_about(
            "Sort the records of a CSV file by one or more column keys. \
             Each key compares as a signed integer, as a calendar date under a \
             configurable format, or as a natural-order string in which embedded \
             numbers compare by value, so item2 sorts before item10. \
             The sort is stable and keys are consulted primary first.",
        )
        // Input file
        .arg(
            Arg::new("file")
                .help("Input file to sort (use '-' or omit for stdin)")
                .num_args(0..=1)
                .value_name("FILE"),
        )
        // Key selection
        .arg(
            Arg::new("key")
                .short('k')
                .long("key")
                .help("Sort by COLUMN; repeat for secondary keys")
                .long_help(
                    "Sort by the named COLUMN. The option may be repeated; the \
                     first occurrence is the primary key and later ones break \
                     ties in order. Every key needs a matching --type.",
                )
                .value_name("COLUMN")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("type")
                .short('t')
                .long("type")
                .help("Comparison type for each key: number, string or date")
                .long_help(
                    "Comparison type for the matching --key, given in the same \
                     order: 'number' compares as signed integers, 'date' compares \
                     chronologically under --date-format, 'string' compares in \
                     natural order. Give exactly one --type per --key.",
                )
                .value_name("TYPE")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("date-format")
                .long("date-format")
                .help("Date pattern for date-typed keys (default %Y-%m-%d)")
                .value_name("FMT"),
        )
        // Field and output shaping
        .arg(
            Arg::new("delimiter")
                .short('d')
                .long("delimiter")
                .help("Use SEP as the field delimiter instead of ','")
                .value_name("SEP"),
        )
        .arg(
            Arg::new("columns")
                .short('c')
                .long("columns")
                .help("Write only these columns, comma separated, in this order")
                .value_name("NAMES"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Write result to FILE instead of standard output")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Report key resolution and record counts to stderr")
                .action(ArgAction::SetTrue),
        )
}

/// Parse configuration from command line matches
fn parse_config_from_matches(matches: &clap::ArgMatches) -> SortResult<SortConfig> {
    let mut builder = SortConfigBuilder::new();

    // Pair up the repeated --key and --type occurrences
    let columns: Vec<String> = matches
        .get_many::<String>("key")
        .unwrap_or_default()
        .cloned()
        .collect();
    let types: Vec<SortType> = matches
        .get_many::<String>("type")
        .unwrap_or_default()
        .map(|tag| tag.parse())
        .collect::<SortResult<_>>()?;
    builder = builder.keys(KeySpec::from_lists(columns, types)?);

    if let Some(file) = matches.get_one::<String>("file") {
        builder = builder.input(file.clone());
    }
    if let Some(output) = matches.get_one::<String>("output") {
        builder = builder.output(output.clone());
    }
    if let Some(format) = matches.get_one::<String>("date-format") {
        builder = builder.date_format(format.clone());
    }
    if let Some(sep) = matches.get_one::<String>("delimiter") {
        builder = builder.delimiter(parse_delimiter(sep)?);
    }
    if let Some(names) = matches.get_one::<String>("columns") {
        builder = builder.columns(names.split(',').map(|s| s.trim().to_string()).collect());
    }
    builder = builder.debug(matches.get_flag("debug"));

    builder.build()
}

/// Parse the field delimiter, which must be a single byte
fn parse_delimiter(sep: &str) -> SortResult<u8> {
    match sep.as_bytes() {
        [byte] => Ok(*byte),
        _ => Err(SortError::invalid_delimiter(sep)),
    }
}
