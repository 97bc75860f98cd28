//! Typed field comparison and the multi-key record comparator

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::error::{SortError, SortResult};
use crate::key::{SortSpec, SortType};
use crate::natural;
use crate::record::Record;

/// A comparison strategy over raw field strings.
///
/// One variant per [`SortType`]. The variant for each key is chosen once,
/// when the comparator is built, so comparing two fields is a direct match
/// with no per-comparison dispatch decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedComparer {
    /// Signed integer comparison; values that do not parse are fatal.
    Number,
    /// Chronological comparison; both values must match `format`.
    Date { format: String },
    /// Natural-order string comparison; total over all strings, never fails.
    NaturalString,
}

impl TypedComparer {
    pub fn for_type(sort_type: SortType, date_format: &str) -> Self {
        match sort_type {
            SortType::Number => TypedComparer::Number,
            SortType::Date => TypedComparer::Date {
                format: date_format.to_string(),
            },
            SortType::Natural => TypedComparer::NaturalString,
        }
    }

    /// Compare two raw field values under this strategy.
    pub fn compare(&self, a: &str, b: &str) -> SortResult<Ordering> {
        match self {
            TypedComparer::Number => {
                let a = parse_integer(a)?;
                let b = parse_integer(b)?;
                Ok(a.cmp(&b))
            }
            TypedComparer::Date { format } => {
                let a = parse_date(a, format)?;
                let b = parse_date(b, format)?;
                Ok(a.cmp(&b))
            }
            TypedComparer::NaturalString => Ok(natural::compare_natural(a, b)),
        }
    }
}

fn parse_integer(value: &str) -> SortResult<i64> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| SortError::invalid_number(value))
}

fn parse_date(value: &str, format: &str) -> SortResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), format)
        .map_err(|_| SortError::invalid_date(value, format))
}

/// Multi-key comparison over whole records.
///
/// Keys are consulted primary first; the first key that orders the two
/// records decides. A key whose field is missing from either record does
/// not discriminate, and records equal under every key compare equal, which
/// keeps the stable sort's original order for them.
#[derive(Debug, Clone)]
pub struct RecordComparator {
    keys: Vec<(usize, TypedComparer)>,
}

impl RecordComparator {
    /// Build the comparator for records laid out with `width` columns.
    ///
    /// Every key position must fall inside the layout; the mismatch is
    /// caught here, before any record is compared.
    pub fn new(spec: &SortSpec, width: usize) -> SortResult<Self> {
        let mut keys = Vec::with_capacity(spec.keys().len());
        for key in spec.keys() {
            if key.position >= width {
                return Err(SortError::column_out_of_range(key.position, width));
            }
            keys.push((
                key.position,
                TypedComparer::for_type(key.sort_type, spec.date_format()),
            ));
        }
        Ok(RecordComparator { keys })
    }

    /// Compare two records under the configured keys.
    ///
    /// The first parse failure in any consulted field aborts the comparison;
    /// the caller must treat the whole sort as failed.
    pub fn compare(&self, a: &Record, b: &Record) -> SortResult<Ordering> {
        for (position, comparer) in &self.keys {
            let (a_field, b_field) = match (a.field(*position), b.field(*position)) {
                (Some(a_field), Some(b_field)) => (a_field, b_field),
                // a missing operand leaves this key undecided
                _ => continue,
            };
            match comparer.compare(a_field, b_field)? {
                Ordering::Equal => continue,
                other => return Ok(other),
            }
        }
        Ok(Ordering::Equal)
    }
}
