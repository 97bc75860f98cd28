//! In-memory stable sorting of records

use std::cmp::Ordering;

use crate::compare::RecordComparator;
use crate::error::SortResult;
use crate::record::Record;

/// Sort `records` in place under `comparator`.
///
/// The sort is stable: records that compare equal keep their original
/// relative order, and re-sorting an already sorted slice leaves it
/// untouched. The first comparison error aborts the operation; once one is
/// recorded the remaining comparisons are short-circuited and the slice
/// order is unspecified, so callers must not emit it.
pub fn sort_records(records: &mut [Record], comparator: &RecordComparator) -> SortResult<()> {
    let mut first_error = None;

    records.sort_by(|a, b| {
        if first_error.is_some() {
            return Ordering::Equal;
        }
        match comparator.compare(a, b) {
            Ok(ordering) => ordering,
            Err(error) => {
                first_error = Some(error);
                Ordering::Equal
            }
        }
    });

    match first_error {
        Some(error) => Err(error),
        None => Ok(()),
    }
}
