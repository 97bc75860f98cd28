//! Sort key specification: which columns are compared, in what order, and how

use std::fmt;
use std::str::FromStr;

use crate::error::{SortError, SortResult};
use crate::record::Header;

/// Comparison strategy tag for a single sort key.
///
/// The tag set is closed: anything outside it is rejected when the tag is
/// parsed, before any record is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortType {
    /// Signed integer comparison. Values that do not parse are fatal.
    Number,
    /// Chronological comparison under the configured date format.
    Date,
    /// Natural-order string comparison, where embedded digit runs compare
    /// by numeric value ("item2" before "item10").
    Natural,
}

impl FromStr for SortType {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "number" | "numeric" | "n" => Ok(SortType::Number),
            "date" | "d" => Ok(SortType::Date),
            "string" | "str" | "natural" | "s" => Ok(SortType::Natural),
            _ => Err(SortError::unknown_sort_type(s)),
        }
    }
}

impl fmt::Display for SortType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortType::Number => write!(f, "number"),
            SortType::Date => write!(f, "date"),
            SortType::Natural => write!(f, "string"),
        }
    }
}

/// A requested sort key: a column name paired with a comparison type.
///
/// Key specs exist before the input header is known; [`SortSpec::resolve`]
/// turns them into positional [`SortKey`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpec {
    pub column: String,
    pub sort_type: SortType,
}

impl KeySpec {
    pub fn new(column: impl Into<String>, sort_type: SortType) -> Self {
        KeySpec {
            column: column.into(),
            sort_type,
        }
    }

    /// Pair a column list with a type list, element by element.
    ///
    /// The lists must have the same length; a mismatch is rejected here
    /// rather than silently padding one side.
    pub fn from_lists(columns: Vec<String>, types: Vec<SortType>) -> SortResult<Vec<KeySpec>> {
        if columns.len() != types.len() {
            return Err(SortError::key_type_mismatch(columns.len(), types.len()));
        }
        Ok(columns
            .into_iter()
            .zip(types)
            .map(|(column, sort_type)| KeySpec { column, sort_type })
            .collect())
    }
}

/// One resolved sort key: a column position and its comparison type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub position: usize,
    pub sort_type: SortType,
}

impl SortKey {
    pub fn new(position: usize, sort_type: SortType) -> Self {
        SortKey {
            position,
            sort_type,
        }
    }
}

/// The ordered list of resolved sort keys for one run, primary key first,
/// plus the date pattern shared by every `Date` key.
///
/// A `SortSpec` is immutable once built; the comparator derives everything
/// it needs from it up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    keys: Vec<SortKey>,
    date_format: String,
}

impl SortSpec {
    pub fn new(keys: Vec<SortKey>, date_format: impl Into<String>) -> Self {
        SortSpec {
            keys,
            date_format: date_format.into(),
        }
    }

    /// Resolve named key specs against a header into positional keys.
    ///
    /// Key order is preserved. Any name missing from the header fails the
    /// whole resolution.
    pub fn resolve(specs: &[KeySpec], header: &Header, date_format: &str) -> SortResult<Self> {
        let mut keys = Vec::with_capacity(specs.len());
        for spec in specs {
            let position = header.resolve(&spec.column)?;
            keys.push(SortKey::new(position, spec.sort_type));
        }
        Ok(SortSpec::new(keys, date_format))
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
