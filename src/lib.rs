//! Multi-column CSV sorting with typed keys
//!
//! This crate reads delimited records into memory, reorders them under an
//! ordered list of (column, type) sort keys and writes them back out. Keys
//! compare as signed integers, as calendar dates under one configured
//! format, or as natural-order strings where embedded numbers compare by
//! value ("item2" before "item10"). The sort is stable and the comparison
//! is strict: a key value that does not parse fails the run instead of
//! landing somewhere arbitrary.

#![warn(clippy::all)]

pub mod error;
pub mod config;

// Core comparison and sorting
pub mod record;
pub mod key;
pub mod natural;
pub mod compare;
pub mod sorter;

// I/O and orchestration
pub mod csv_io;
pub mod pipeline;

// Re-export commonly used types
pub use config::{SortConfig, SortConfigBuilder, DEFAULT_DATE_FORMAT};
pub use error::{SortError, SortResult};
pub use key::{KeySpec, SortKey, SortSpec, SortType};
pub use pipeline::SortSummary;
pub use record::{Header, Record};

/// Exit codes matching sort-like utilities
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

/// Main entry point: sort one input according to `config`.
pub fn sort_file(config: &SortConfig) -> SortResult<SortSummary> {
    pipeline::run(config)
}
