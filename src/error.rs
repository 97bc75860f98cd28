//! Error handling for the csvsort utility

use std::io;
use thiserror::Error;

/// Custom error type for sort operations
#[derive(Error, Debug)]
pub enum SortError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Permission denied: {file}")]
    PermissionDenied { file: String },

    #[error("No such file or directory: {file}")]
    FileNotFound { file: String },

    #[error("Unknown column: {column}")]
    UnknownColumn { column: String },

    #[error("Unknown sort type: {tag} (expected number, string or date)")]
    UnknownSortType { tag: String },

    #[error("Key/type mismatch: {keys} sort keys but {types} sort types")]
    KeyTypeMismatch { keys: usize, types: usize },

    #[error("Sort key position {position} is outside the {width}-column layout")]
    ColumnOutOfRange { position: usize, width: usize },

    #[error("Invalid field delimiter: {sep}")]
    InvalidDelimiter { sep: String },

    #[error("No sort keys given")]
    EmptyKeySpec,

    #[error("Empty column projection")]
    EmptyProjection,

    #[error("Invalid number in sort column: {value:?}")]
    InvalidNumber { value: String },

    #[error("Invalid date in sort column: {value:?} does not match {format}")]
    InvalidDate { value: String, format: String },
}

impl SortError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            SortError::PermissionDenied { .. }
            | SortError::FileNotFound { .. }
            | SortError::Io(_) => crate::SORT_FAILURE,

            // csv wraps both camps: a failed read is an I/O error, while
            // ragged rows or broken UTF-8 are malformed data
            SortError::Csv(err) => match err.kind() {
                csv::ErrorKind::Io(_) => crate::SORT_FAILURE,
                _ => crate::EXIT_FAILURE,
            },

            _ => crate::EXIT_FAILURE,
        }
    }

    /// Create a permission denied error
    pub fn permission_denied(file: &str) -> Self {
        SortError::PermissionDenied {
            file: file.to_string(),
        }
    }

    /// Create a file not found error
    pub fn file_not_found(file: &str) -> Self {
        SortError::FileNotFound {
            file: file.to_string(),
        }
    }

    /// Create an unknown column error
    pub fn unknown_column(column: &str) -> Self {
        SortError::UnknownColumn {
            column: column.to_string(),
        }
    }

    /// Create an unknown sort type error
    pub fn unknown_sort_type(tag: &str) -> Self {
        SortError::UnknownSortType {
            tag: tag.to_string(),
        }
    }

    /// Create a key/type arity mismatch error
    pub fn key_type_mismatch(keys: usize, types: usize) -> Self {
        SortError::KeyTypeMismatch { keys, types }
    }

    /// Create a column out of range error
    pub fn column_out_of_range(position: usize, width: usize) -> Self {
        SortError::ColumnOutOfRange { position, width }
    }

    /// Create an invalid delimiter error
    pub fn invalid_delimiter(sep: &str) -> Self {
        SortError::InvalidDelimiter {
            sep: sep.to_string(),
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(value: &str) -> Self {
        SortError::InvalidNumber {
            value: value.to_string(),
        }
    }

    /// Create an invalid date error
    pub fn invalid_date(value: &str, format: &str) -> Self {
        SortError::InvalidDate {
            value: value.to_string(),
            format: format.to_string(),
        }
    }
}

/// Result type for sort operations
pub type SortResult<T> = Result<T, SortError>;

/// Context trait for mapping raw I/O errors onto the file they came from
pub trait SortContext<T> {
    fn with_file_context(self, filename: &str) -> SortResult<T>;
}

impl<T> SortContext<T> for Result<T, io::Error> {
    fn with_file_context(self, filename: &str) -> SortResult<T> {
        self.map_err(|io_err| match io_err.kind() {
            io::ErrorKind::PermissionDenied => SortError::permission_denied(filename),
            io::ErrorKind::NotFound => SortError::file_not_found(filename),
            _ => SortError::Io(io::Error::new(
                io_err.kind(),
                format!("{}: {}", filename, io_err),
            )),
        })
    }
}
