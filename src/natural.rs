//! Natural-order string comparison
//!
//! Plain lexicographic order puts "item10" before "item2" because '1' < '2'.
//! Natural order fixes that by carving each string into maximal runs of
//! digits and non-digits and comparing digit runs by numeric value, so
//! "item2" sorts before "item10" while pure text still orders bytewise.

use std::cmp::Ordering;

/// Compare two strings in natural order.
///
/// Equal strings short-circuit. Otherwise both strings are split into runs
/// and walked position by position: identical runs pass, two digit runs
/// compare by magnitude, any other pair compares lexicographically. Runs
/// that differ only in leading zeros ("007" vs "7") do not decide the
/// ordering on their own; if every compared run position is inconclusive,
/// the string with fewer runs orders first, and at equal run counts a full
/// lexicographic comparison of the original strings breaks the tie so that
/// distinct strings never compare equal.
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let a_runs = split_runs(a);
    let b_runs = split_runs(b);

    for (a_run, b_run) in a_runs.iter().copied().zip(b_runs.iter().copied()) {
        if a_run == b_run {
            continue;
        }
        if is_digit_run(a_run) && is_digit_run(b_run) {
            match compare_digit_runs(a_run, b_run) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        return a_run.cmp(b_run);
    }

    // Every shared position was inconclusive: a shorter run list orders
    // first, and only equal-count lists fall back to byte order, which
    // keeps the comparison transitive
    match a_runs.len().cmp(&b_runs.len()) {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

/// Split a string into maximal runs of ASCII digits or non-digits.
///
/// Runs alternate and cover the whole string, so concatenating them gives
/// the input back. The empty string has no runs.
pub fn split_runs(s: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start = 0;
    let mut in_digits = false;

    for (idx, ch) in s.char_indices() {
        let digit = ch.is_ascii_digit();
        if idx == 0 {
            in_digits = digit;
        } else if digit != in_digits {
            runs.push(&s[start..idx]);
            start = idx;
            in_digits = digit;
        }
    }
    if !s.is_empty() {
        runs.push(&s[start..]);
    }
    runs
}

/// Compare two all-digit runs by numeric value without parsing them, so
/// runs longer than any machine integer still compare correctly.
fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a = skip_leading_zeros(a);
    let b = skip_leading_zeros(b);

    match a.len().cmp(&b.len()) {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

fn skip_leading_zeros(run: &str) -> &str {
    run.trim_start_matches('0')
}

fn is_digit_run(run: &str) -> bool {
    !run.is_empty() && run.bytes().all(|b| b.is_ascii_digit())
}
