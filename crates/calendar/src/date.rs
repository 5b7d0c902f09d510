//! Validated Gregorian date.

use std::fmt;

use crate::error::CalendarError;
use crate::leap::leap_year;
use crate::names::{MONTH_NAMES, ordinal};

/// Number of days in each month of a common year (index 0 unused).
pub(crate) const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns the number of days in `month` of `year`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    if month == 2 && leap_year(year) {
        Ok(29)
    } else {
        Ok(DAYS_PER_MONTH[usize::from(month)])
    }
}

/// A real date in the proleptic Gregorian calendar.
///
/// Construction validates the month and the day against the month length
/// (including February 29th in leap years). The year itself is not checked
/// here; see [`YearWindow`](crate::YearWindow) for the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate {
    year: i32,
    month: u8,
    day: u8,
}

impl GregorianDate {
    /// Creates a new `GregorianDate` from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidMonth`] or [`CalendarError::InvalidDay`]
    /// if the triple does not name a real date.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let max_day = days_in_month(year, month)?;
        if !(1..=max_day).contains(&day) {
            return Err(CalendarError::InvalidDay {
                year,
                month,
                day,
                max_day,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the English name of the month.
    pub fn month_name(self) -> &'static str {
        MONTH_NAMES[usize::from(self.month)]
    }

    /// Returns the same month and year on a different day.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidDay`] if `day` does not exist in this month.
    pub fn with_day(self, day: u8) -> Result<Self, CalendarError> {
        Self::new(self.year, self.month, day)
    }
}

/// Long English form, e.g. `March 7th, 2022`.
impl fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}, {}",
            self.month_name(),
            ordinal(i64::from(self.day)),
            self.year
        )
    }
}
