use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{DATE_FORMAT, Period, RANGE_SEPARATOR, Step, ops, prelude::*};

/// A closed range of calendar dates, both bounds inclusive.
/// The start date is always less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[display(
    fmt = "{}{}{}",
    "start.format(DATE_FORMAT)",
    "RANGE_SEPARATOR",
    "end.format(DATE_FORMAT)"
)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end:   NaiveDate,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// A date literal is not a `YYYY-MM-DD` calendar date.
    #[error("Invalid date {input:?}: {source}")]
    InvalidDate {
        input:  String,
        source: chrono::ParseError,
    },

    /// A period step of zero length.
    #[error("Invalid period step: {0} (must be at least one day)")]
    InvalidStep(u64),
}

/// Unvalidated wire form, checked on the way into a `DateRange`.
#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end:   NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = RangeError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

fn parse_date(input: &str) -> Result<NaiveDate, RangeError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT).map_err(|source| RangeError::InvalidDate {
        input: input.to_owned(),
        source,
    })
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a date range from two `YYYY-MM-DD` literals.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidDate` if either literal does not parse,
    /// or `RangeError::InvalidRange` if start > end.
    pub fn parse(start: &str, end: &str) -> Result<Self, RangeError> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    /// Creates a range covering exactly one day
    pub const fn single(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }

    /// Builds a range from bounds already known to be ordered, `None` otherwise
    pub(crate) fn from_bounds(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// Returns the start date of the range
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Returns the end date of the range
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (NaiveDate, NaiveDate) {
        (self.start, self.end)
    }

    /// Checks whether both bounds are equal to the other range's bounds
    pub fn is_equivalent_to(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end
    }

    /// Number of calendar days in the range, counting both bounds (always >= 1)
    pub fn count_days(&self) -> u64 {
        self.end.signed_duration_since(self.start).num_days().unsigned_abs() + 1
    }

    /// Lazily walks the range from start to end, `step` days at a time
    pub const fn as_period(&self, step: Step) -> Period {
        Period::new(self.start, self.end, step)
    }

    /// Lazily walks every day of the range
    pub const fn days(&self) -> Period {
        self.as_period(Step::DAY)
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Checks if this range shares at least one day with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if the ranges touch without sharing a day
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        self.end.succ_opt() == Some(other.start) || other.end.succ_opt() == Some(self.start)
    }

    /// See [`ops::intersect`].
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        ops::intersect(self, other)
    }

    /// See [`ops::join`].
    pub fn join(&self, other: &Self) -> Option<Self> {
        ops::join(self, other)
    }

    /// See [`ops::subtract`].
    pub fn subtract(&self, other: &Self) -> Vec<Self> {
        ops::subtract(self, other)
    }
}

impl TryFrom<(NaiveDate, NaiveDate)> for DateRange {
    type Error = RangeError;

    fn try_from((start, end): (NaiveDate, NaiveDate)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl TryFrom<(&str, &str)> for DateRange {
    type Error = RangeError;

    fn try_from((start, end): (&str, &str)) -> Result<Self, Self::Error> {
        Self::parse(start, end)
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = Period;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}
