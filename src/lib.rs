//! Set arithmetic over closed, inclusive calendar date ranges.
//!
//! A [`DateRange`] spans `start..=end` with `start <= end`. Pairwise operators
//! live in [`ops`], collection-wide normalization and combination in [`set`].
//!
//! ```
//! use date_ranges::{DateRange, set::join_ranges};
//!
//! let a = DateRange::parse("2023-01-01", "2023-01-05")?;
//! let b = DateRange::parse("2023-01-06", "2023-01-10")?;
//! let c = DateRange::parse("2023-02-01", "2023-02-03")?;
//!
//! assert_eq!(a.join(&b), Some(DateRange::parse("2023-01-01", "2023-01-10")?));
//! assert_eq!(join_ranges([c, b, a]).len(), 2);
//! assert_eq!(a.to_string(), "2023-01-01<->2023-01-05");
//! # Ok::<(), date_ranges::RangeError>(())
//! ```

// Logging goes through `log` only when the `log` feature is enabled.
macro_rules! log_trace {
    ($($args:tt)+) => {
        #[cfg(feature = "log")]
        log::trace!($($args)+);
    };
}

macro_rules! log_debug {
    ($($args:tt)+) => {
        #[cfg(feature = "log")]
        log::debug!($($args)+);
    };
}

mod consts;
pub mod ops;
mod period;
mod prelude;
mod range;
pub mod set;
#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use ops::{intersect, join, subtract};
pub use period::{Period, Step};
pub use range::{DateRange, RangeError};
pub use set::{cleanup_sort, intersect_ranges, join_ranges, subtract_ranges, total_days};

pub use chrono::NaiveDate;
