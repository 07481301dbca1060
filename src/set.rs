//! Operations over whole collections of date ranges.
//!
//! Every function here returns a normalized collection: sorted ascending by
//! `(start, end)`, with no two ranges overlapping or adjacent.

use crate::{
    DateRange,
    ops::{intersect, join, subtract},
};

/// Drops empty slots and sorts the remaining ranges by `(start, end)`.
///
/// Accepts both plain ranges and `Option<DateRange>` slots.
pub fn cleanup_sort<I>(ranges: I) -> Vec<DateRange>
where
    I: IntoIterator,
    I::Item: Into<Option<DateRange>>,
{
    let mut ranges: Vec<DateRange> = ranges
        .into_iter()
        .filter_map(Into::<Option<DateRange>>::into)
        .collect();
    ranges.sort_unstable();
    ranges
}

/// Reduces ranges to the minimal sorted cover of their union.
///
/// Overlapping and adjacent ranges are merged with [`join`]; empty slots are
/// ignored. The result is a fixed point: normalizing it again changes nothing.
pub fn join_ranges<I>(ranges: I) -> Vec<DateRange>
where
    I: IntoIterator,
    I::Item: Into<Option<DateRange>>,
{
    let sorted = cleanup_sort(ranges);
    let input_len = sorted.len();

    // Sorted by start, so a range that does not touch the last merged range
    // cannot touch any earlier one either.
    let mut joined: Vec<DateRange> = Vec::with_capacity(input_len);
    for range in sorted {
        if let Some(merged) = joined.last().and_then(|last| join(last, &range)) {
            joined.pop();
            joined.push(merged);
        } else {
            joined.push(range);
        }
    }

    log_debug!("join_ranges: {input_len} ranges -> {}", joined.len());
    joined
}

/// Intersects two collections: the normalized union of every pairwise overlap.
pub fn intersect_ranges(left: &[DateRange], right: &[DateRange]) -> Vec<DateRange> {
    let overlaps = left
        .iter()
        .flat_map(|l| right.iter().filter_map(move |r| intersect(l, r)));
    let intersection = join_ranges(overlaps);

    log_debug!(
        "intersect_ranges: {} x {} ranges -> {}",
        left.len(),
        right.len(),
        intersection.len()
    );
    intersection
}

/// Removes every day covered by `subtrahends` from the days covered by `minuends`.
///
/// Minuend ranges that no subtrahend overlaps are kept whole.
pub fn subtract_ranges(minuends: &[DateRange], subtrahends: &[DateRange]) -> Vec<DateRange> {
    let mut remaining = join_ranges(minuends.iter().copied());
    for subtrahend in join_ranges(subtrahends.iter().copied()) {
        remaining = remaining
            .into_iter()
            .flat_map(|piece| {
                if piece.overlaps(&subtrahend) {
                    subtract(&piece, &subtrahend)
                } else {
                    vec![piece]
                }
            })
            .collect();
    }

    let difference = join_ranges(remaining);
    log_debug!(
        "subtract_ranges: {} - {} ranges -> {}",
        minuends.len(),
        subtrahends.len(),
        difference.len()
    );
    difference
}

/// Number of distinct days covered by the ranges.
pub fn total_days<I>(ranges: I) -> u64
where
    I: IntoIterator,
    I::Item: Into<Option<DateRange>>,
{
    join_ranges(ranges).iter().map(DateRange::count_days).sum()
}
