//! Calendar month arithmetic
//!
//! Projection horizons are counted in whole calendar months between two
//! dates. The reference date is always supplied by the caller; nothing in
//! this module reads the wall clock.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Returns the number of whole calendar months from `from` to `to`
///
/// A month is complete once the day-of-month of `to` reaches the
/// day-of-month of `from`, or `to` falls on the last day of a shorter month
/// (Jan 31 to Feb 28 counts as one month). The result is negative when `to`
/// is before `from`.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use core_kernel::months_between;
///
/// let from = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
/// let to = NaiveDate::from_ymd_opt(2045, 1, 15).unwrap();
/// assert_eq!(months_between(from, to), 228);
/// ```
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i64 {
    if to < from {
        return -months_between(to, from);
    }

    let mut months = i64::from(to.year() - from.year()) * 12
        + i64::from(to.month())
        - i64::from(from.month());

    if months > 0 && to.day() < from.day() && !is_last_day_of_month(to) {
        months -= 1;
    }
    months
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.succ_opt().map_or(true, |next| next.month() != date.month())
}

/// A horizon split into whole years and remaining months
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSpan {
    pub years: u32,
    pub months: u32,
}

impl MonthSpan {
    /// Splits a month count into years and months; negative counts become zero
    pub fn from_months(total: i64) -> Self {
        let total = u32::try_from(total.max(0)).unwrap_or(u32::MAX);
        Self {
            years: total / 12,
            months: total % 12,
        }
    }

    pub fn total_months(&self) -> u32 {
        self.years * 12 + self.months
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0
    }
}

impl fmt::Display for MonthSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.years, self.months) {
            (0, 0) => write!(f, "Due soon"),
            (0, m) => write!(f, "{} mo left", m),
            (y, 0) => write!(f, "{} yr left", y),
            (y, m) => write!(f, "{} yr {} mo left", y, m),
        }
    }
}
