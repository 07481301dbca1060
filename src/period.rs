use std::iter::FusedIterator;
use std::num::NonZeroU64;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{DAYS_PER_WEEK, DEFAULT_STEP_DAYS, RangeError, prelude::*};

/// Distance between consecutive dates of a [`Period`], in whole days.
/// Uses `NonZeroU64` internally, so a zero step is not a valid step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[display(fmt = "{}d", "_0")]
#[serde(try_from = "u64", into = "u64")]
pub struct Step(NonZeroU64);

impl Step {
    /// One calendar day, the default step
    pub const DAY: Self = match NonZeroU64::new(DEFAULT_STEP_DAYS) {
        Some(days) => Self(days),
        None => panic!("default step must be at least one day"),
    };

    /// Creates a step of `days` days
    ///
    /// # Errors
    /// Returns `RangeError::InvalidStep` if `days` is 0.
    pub fn days(days: u64) -> Result<Self, RangeError> {
        NonZeroU64::new(days)
            .map(Self)
            .ok_or(RangeError::InvalidStep(days))
    }

    /// Creates a step of `weeks` calendar weeks
    ///
    /// # Errors
    /// Returns `RangeError::InvalidStep` if `weeks` is 0 or the day count overflows.
    pub fn weeks(weeks: u64) -> Result<Self, RangeError> {
        let days = weeks
            .checked_mul(DAYS_PER_WEEK)
            .ok_or(RangeError::InvalidStep(weeks))?;
        Self::days(days)
    }

    /// Returns the step length in days
    #[inline]
    pub const fn get(self) -> u64 {
        self.0.get()
    }
}

impl Default for Step {
    fn default() -> Self {
        Self::DAY
    }
}

impl TryFrom<u64> for Step {
    type Error = RangeError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::days(value)
    }
}

impl From<Step> for u64 {
    fn from(step: Step) -> Self {
        step.get()
    }
}

/// Lazy walk over the dates of a range, from its start up to and including its end.
///
/// A `Period` never allocates and is finite: it stops at the range end, or at
/// the last date chrono can represent. Clone it (or ask the range for a new
/// one) to walk the dates again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Period {
    next: Option<NaiveDate>,
    end:  NaiveDate,
    step: Step,
}

impl Period {
    pub(crate) const fn new(start: NaiveDate, end: NaiveDate, step: Step) -> Self {
        Self {
            next: Some(start),
            end,
            step,
        }
    }

    /// Returns the step between yielded dates
    pub const fn step(&self) -> Step {
        self.step
    }

    fn remaining(&self) -> u64 {
        match self.next {
            Some(next) if next <= self.end => {
                let span = self.end.signed_duration_since(next).num_days().unsigned_abs();
                span / self.step.get() + 1
            },
            _ => 0,
        }
    }
}

impl Iterator for Period {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|date| *date <= self.end)?;
        self.next = current.checked_add_days(Days::new(self.step.get()));
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        usize::try_from(self.remaining()).map_or((usize::MAX, None), |n| (n, Some(n)))
    }
}

impl FusedIterator for Period {}
