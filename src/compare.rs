//! Key comparison.
//!
//! Ordering modes are tried in a fixed chain: month, human-numeric, numeric.
//! Each mode either decides the comparison or reports it as inconclusive,
//! in which case the next one is consulted. Whatever is left is settled by
//! the leading-blank tie-break and finally by plain byte order of the keys.
//!
//! Reverse order is not handled here; callers flip the operands.

use crate::config::SortConfig;
use crate::key::{extract_key, skip_leading_blanks};
use crate::month::month_order;
use crate::numeric::{parse_human, parse_numeric};
use std::cmp::Ordering;

/// One link of the comparison chain. `None` means "not decided here".
type ModeCompare = fn(&str, &str, &SortConfig) -> Option<Ordering>;

const MODE_CHAIN: [ModeCompare; 3] = [compare_month, compare_human, compare_numeric];

/// Month mode: non-months sort before months, months by calendar order
fn compare_month(a: &str, b: &str, config: &SortConfig) -> Option<Ordering> {
    if !config.month {
        return None;
    }
    match (month_order(a), month_order(b)) {
        (0, 0) => None,
        (0, _) => Some(Ordering::Less),
        (_, 0) => Some(Ordering::Greater),
        (ma, mb) if ma != mb => Some(ma.cmp(&mb)),
        _ => None,
    }
}

fn compare_human(a: &str, b: &str, config: &SortConfig) -> Option<Ordering> {
    if !config.human_numeric {
        return None;
    }
    compare_parsed(parse_human(a), parse_human(b))
}

fn compare_numeric(a: &str, b: &str, config: &SortConfig) -> Option<Ordering> {
    if !config.numeric {
        return None;
    }
    compare_parsed(parse_numeric(a), parse_numeric(b))
}

/// Shared rule for both numeric modes: unparseable keys come first,
/// equal values stay undecided
fn compare_parsed(a: Option<f64>, b: Option<f64>) -> Option<Ordering> {
    match (a, b) {
        (Some(x), Some(y)) => match x.total_cmp(&y) {
            Ordering::Equal => None,
            other => Some(other),
        },
        (Some(_), None) => Some(Ordering::Greater),
        (None, Some(_)) => Some(Ordering::Less),
        (None, None) => None,
    }
}

/// Compare two lines given their already extracted keys
pub fn compare_keys(
    line_a: &str,
    line_b: &str,
    key_a: &str,
    key_b: &str,
    config: &SortConfig,
) -> Ordering {
    // A missing key compares whole lines before any mode applies
    if key_a.is_empty() || key_b.is_empty() {
        return line_a.cmp(line_b);
    }

    let ((key_a, blanks_a), (key_b, blanks_b)) = if config.ignore_leading_blanks {
        (skip_leading_blanks(key_a), skip_leading_blanks(key_b))
    } else {
        ((key_a, 0), (key_b, 0))
    };

    if let Some(decided) = MODE_CHAIN
        .iter()
        .find_map(|mode| mode(key_a, key_b, config))
    {
        return decided;
    }

    if key_a != key_b {
        return key_a.cmp(key_b);
    }

    // More stripped leading blanks sorts first
    if config.ignore_leading_blanks || config.uses_field_key() {
        return blanks_b.cmp(&blanks_a);
    }

    Ordering::Equal
}

/// Compare two raw lines, extracting their keys first
pub fn compare_lines(line_a: &str, line_b: &str, config: &SortConfig) -> Ordering {
    compare_keys(
        line_a,
        line_b,
        extract_key(line_a, config),
        extract_key(line_b, config),
        config,
    )
}

/// Whether `line_a` strictly precedes `line_b`
pub fn less(line_a: &str, line_b: &str, key_a: &str, key_b: &str, config: &SortConfig) -> bool {
    compare_keys(line_a, line_b, key_a, key_b, config) == Ordering::Less
}
