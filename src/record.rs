//! Rows and headers for tabular data

use crate::error::{SortError, SortResult};

/// One data row: an ordered sequence of field values.
///
/// Fields are addressed by position in the source header order. Records are
/// not modified by sorting; only their relative order changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Vec<String>,
}

impl Record {
    pub fn new(fields: Vec<String>) -> Self {
        Record { fields }
    }

    /// Field value at `position`, or `None` past the end of the row.
    pub fn field(&self, position: usize) -> Option<&str> {
        self.fields.get(position).map(String::as_str)
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<Vec<&str>> for Record {
    fn from(fields: Vec<&str>) -> Self {
        Record::new(fields.into_iter().map(str::to_string).collect())
    }
}

/// The column layout shared by every record of one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    names: Vec<String>,
}

impl Header {
    pub fn new(names: Vec<String>) -> Self {
        Header { names }
    }

    /// Position of the first column named `name`.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Like [`position_of`](Self::position_of), but unknown names are an error.
    pub fn resolve(&self, name: &str) -> SortResult<usize> {
        self.position_of(name)
            .ok_or_else(|| SortError::unknown_column(name))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
