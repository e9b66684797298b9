//! Sorting and order verification over in-memory lines.
//!
//! Both entry points drive the same comparator from [`crate::compare`] and
//! apply reverse order the same way, by swapping operands, so a sequence
//! produced by [`sort_lines`] always passes [`check_sorted`] under the same
//! configuration.

use crate::compare::compare_keys;
use crate::config::SortConfig;
use crate::key::extract_key;
use itertools::Itertools;
use std::cmp::Ordering;

/// Line paired with its precomputed sort key
#[derive(Debug, Clone, Copy)]
struct SortableLine<'a> {
    line: &'a str,
    key: &'a str,
}

impl<'a> SortableLine<'a> {
    fn new(line: &'a str, config: &SortConfig) -> Self {
        Self {
            line,
            key: extract_key(line, config),
        }
    }
}

/// Comparator with reverse order applied
#[inline]
fn directional_cmp(a: &SortableLine, b: &SortableLine, config: &SortConfig) -> Ordering {
    if config.reverse {
        compare_keys(b.line, a.line, b.key, a.key, config)
    } else {
        compare_keys(a.line, b.line, a.key, b.key, config)
    }
}

/// Line content without trailing line terminators
#[inline]
pub fn strip_terminator(line: &str) -> &str {
    line.trim_end_matches(['\r', '\n'])
}

/// Sort lines according to `config`, then drop adjacent duplicates if
/// unique output was requested
///
/// The sort is stable: lines the comparator cannot tell apart keep their
/// input order, in reverse mode too.
pub fn sort_lines<S: AsRef<str>>(lines: &[S], config: &SortConfig) -> Vec<String> {
    log::debug!(
        "sorting {} lines, key field {}, modes: {}{}",
        lines.len(),
        config.key,
        config.mode_chain().join(" > "),
        if config.reverse { ", reversed" } else { "" }
    );

    let mut sortable: Vec<SortableLine> = lines
        .iter()
        .map(|line| SortableLine::new(line.as_ref(), config))
        .collect();

    merge_sort_by(&mut sortable, &mut |a: &SortableLine, b: &SortableLine| {
        directional_cmp(a, b, config)
    });

    let mut sorted: Vec<String> = sortable.iter().map(|sl| sl.line.to_string()).collect();

    if config.unique {
        let before = sorted.len();
        sorted.dedup_by(|curr, prev| {
            strip_terminator(curr.as_str()) == strip_terminator(prev.as_str())
        });
        log::debug!("unique: dropped {} duplicate lines", before - sorted.len());
    }

    sorted
}

/// Verify that `lines` are in order under `config`
///
/// Returns the 1-based number of the first line that is out of order, i.e.
/// the second line of the first offending pair. Equal neighbours are in
/// order unless unique output is requested, in which case identical
/// adjacent lines count as a disorder too.
pub fn check_sorted<S: AsRef<str>>(lines: &[S], config: &SortConfig) -> Result<(), usize> {
    let disorder = lines
        .iter()
        .map(|line| SortableLine::new(line.as_ref(), config))
        .tuple_windows()
        .position(|(prev, curr)| match directional_cmp(&prev, &curr, config) {
            Ordering::Greater => true,
            Ordering::Equal => {
                config.unique && strip_terminator(prev.line) == strip_terminator(curr.line)
            }
            Ordering::Less => false,
        });

    match disorder {
        Some(pair) => {
            log::debug!("disorder at line {}", pair + 2);
            Err(pair + 2)
        }
        None => {
            log::debug!("{} lines are in order", lines.len());
            Ok(())
        }
    }
}

/// Runs at or below this length are sorted by insertion
const INSERTION_THRESHOLD: usize = 16;

/// Stable top-down merge sort
///
/// Unlike `slice::sort_by` this never panics when the comparator is not a
/// total order, which the whole-line fallback for empty keys can produce.
fn merge_sort_by<T, F>(items: &mut [T], cmp: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() <= INSERTION_THRESHOLD {
        insertion_sort_by(items, cmp);
        return;
    }

    let mid = items.len() / 2;
    merge_sort_by(&mut items[..mid], cmp);
    merge_sort_by(&mut items[mid..], cmp);

    // Halves already in order
    if cmp(&items[mid], &items[mid - 1]) != Ordering::Less {
        return;
    }

    let left = items[..mid].to_vec();
    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < left.len() && j < items.len() {
        if cmp(&items[j], &left[i]) == Ordering::Less {
            items[k] = items[j];
            j += 1;
        } else {
            items[k] = left[i];
            i += 1;
        }
        k += 1;
    }
    while i < left.len() {
        items[k] = left[i];
        i += 1;
        k += 1;
    }
}

fn insertion_sort_by<T, F>(items: &mut [T], cmp: &mut F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && cmp(&items[j], &items[j - 1]) == Ordering::Less {
            items.swap(j, j - 1);
            j -= 1;
        }
    }
}
