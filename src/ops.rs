//! Pairwise operators over two date ranges.
//!
//! Each operator is a pure function of its two operands. "No such range" is
//! an ordinary outcome and comes back as `None` or an empty `Vec`.

use crate::DateRange;

/// Returns the days both ranges share, or `None` when they are disjoint.
///
/// A range fully inside the other is returned as is. On a partial overlap the
/// shorter range is walked day by day to find the first and last shared day.
pub fn intersect(left: &DateRange, right: &DateRange) -> Option<DateRange> {
    let (shorter, longer) = if left.count_days() <= right.count_days() {
        (left, right)
    } else {
        (right, left)
    };

    if shorter.end() < longer.start() || shorter.start() > longer.end() {
        log_trace!("intersect {shorter} {longer}: disjoint");
        return None;
    }

    if shorter.start() >= longer.start() && shorter.end() <= longer.end() {
        log_trace!("intersect {shorter} {longer}: {shorter} contained");
        return Some(*shorter);
    }

    let (first, last) = shorter
        .days()
        .skip_while(|day| *day < longer.start())
        .take_while(|day| *day <= longer.end())
        .fold(None, |bounds, day| match bounds {
            None => Some((day, day)),
            Some((first, _)) => Some((first, day)),
        })?;

    let overlap = DateRange::from_bounds(first, last);
    log_trace!("intersect {shorter} {longer}: {overlap:?}");
    overlap
}

/// Merges two ranges that overlap or are adjacent into their union.
///
/// Returns `None` when at least one whole day separates them.
pub fn join(left: &DateRange, right: &DateRange) -> Option<DateRange> {
    let (first, second) = if left.start() <= right.start() {
        (left, right)
    } else {
        (right, left)
    };

    // The last representable date touches anything that starts after it.
    let touches = first.end().succ_opt().is_none_or(|next| next >= second.start());
    if !touches {
        log_trace!("join {first} {second}: gap");
        return None;
    }

    let joined = DateRange::from_bounds(first.start(), first.end().max(second.end()));
    log_trace!("join {first} {second}: {joined:?}");
    joined
}

/// Removes the days of `subtrahend` from `minuend`.
///
/// Yields the remainder before the subtrahend, then the remainder after it,
/// so between zero and two ranges. Disjoint operands yield nothing, as do
/// equal ones and a subtrahend covering the whole minuend.
pub fn subtract(minuend: &DateRange, subtrahend: &DateRange) -> Vec<DateRange> {
    if !minuend.overlaps(subtrahend) || minuend.is_equivalent_to(subtrahend) {
        log_trace!("subtract {subtrahend} from {minuend}: nothing left");
        return Vec::new();
    }

    let head = if subtrahend.start() > minuend.start() {
        subtrahend
            .start()
            .pred_opt()
            .and_then(|before| DateRange::from_bounds(minuend.start(), before))
    } else {
        None
    };

    let tail = if subtrahend.end() < minuend.end() {
        subtrahend
            .end()
            .succ_opt()
            .and_then(|after| DateRange::from_bounds(after, minuend.end()))
    } else {
        None
    };

    let remainder: Vec<_> = head.into_iter().chain(tail).collect();
    log_trace!("subtract {subtrahend} from {minuend}: {remainder:?}");
    remainder
}
