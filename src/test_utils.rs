//! Shared helpers for unit tests.

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::DateRange;

/// Builds a calendar date, panicking on an impossible one
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("test date must be a valid calendar date")
}

/// Builds a range from `(year, month, day)` bounds
pub fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
    DateRange::new(date(start.0, start.1, start.2), date(end.0, end.1, end.2))
        .expect("test range bounds must be ordered")
}

/// A short range somewhere in the first two months of 2023, so that random
/// pairs overlap, touch, and miss each other often enough.
pub fn random_range(rng: &mut impl Rng) -> DateRange {
    let start = date(2023, 1, 1) + Days::new(rng.gen_range(0..60));
    let end = start + Days::new(rng.gen_range(0..15));
    DateRange::new(start, end).expect("random range end is never before its start")
}

/// Up to `max_len` random ranges, possibly none
pub fn random_ranges(rng: &mut impl Rng, max_len: usize) -> Vec<DateRange> {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| random_range(rng)).collect()
}
