//! Calendar dates with a comparable integer key.
//!
//! The engine never does calendar arithmetic; it only needs total ordering of
//! day-resolution dates. `CalendarDate` keeps the day/month/year components
//! for display and derives a `year * 10000 + month * 100 + day` key for every
//! comparison, so ordering is a single integer compare.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// A validated day-resolution calendar date.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDate {
    day: u32,
    month: u32,
    year: i32,
}

impl CalendarDate {
    /// Smallest year a date may carry.
    pub const MIN_YEAR: i32 = 1;
    /// Largest year a date may carry. The `i32` key arithmetic requires
    /// four-digit years; chrono alone would accept years far beyond that.
    pub const MAX_YEAR: i32 = 9999;

    /// Build a date, rejecting anything the proleptic Gregorian calendar
    /// rejects (bad month, day overflowing the month, 29 February outside
    /// leap years) and years outside `MIN_YEAR..=MAX_YEAR`.
    pub fn new(day: u32, month: u32, year: i32) -> DomainResult<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(DomainError::InvalidDate);
        }
        if NaiveDate::from_ymd_opt(year, month, day).is_none() {
            return Err(DomainError::InvalidDate);
        }
        Ok(Self { day, month, year })
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Comparable key: `year * 10000 + month * 100 + day`.
    ///
    /// Two dates compare exactly as their keys do, which is the only date
    /// property the stores rely on.
    pub fn date_key(&self) -> i32 {
        self.year * 10000 + self.month as i32 * 100 + self.day as i32
    }

    pub fn is_before(&self, other: CalendarDate) -> bool {
        self.date_key() < other.date_key()
    }
}

impl ValueObject for CalendarDate {}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.date_key().cmp(&other.date_key())
    }
}

impl core::fmt::Display for CalendarDate {
    /// `DD-MM-YYYY`, day and month zero-padded, year as-is.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:02}-{:02}-{}", self.day, self.month, self.year)
    }
}
