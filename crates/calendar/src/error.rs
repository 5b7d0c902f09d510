//! Error types for the doomsday-calendar crate.

/// Error type for all fallible operations in the doomsday-calendar crate.
///
/// `InvalidMonth` and `InvalidDay` mean the caller passed something that is
/// not a real Gregorian date. `OutOfRange` is a policy failure: the date is
/// real but its year lies outside the supported [`YearWindow`](crate::YearWindow).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number does not exist in the given month and year.
    #[error("invalid day: {day} for month {month} of {year} (max {max_day})")]
    InvalidDay {
        /// The year the date was constructed for.
        year: i32,
        /// The month for which the day is invalid.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when a year falls outside the supported window.
    #[error("year {year} is out of range (must be {min}..={max})")]
    OutOfRange {
        /// The rejected year.
        year: i32,
        /// Smallest supported year.
        min: i32,
        /// Largest supported year.
        max: i32,
    },

    /// Returned when a window is built with its bounds reversed.
    #[error("invalid year window: min {min} is greater than max {max}")]
    InvalidWindow {
        /// Requested lower bound.
        min: i32,
        /// Requested upper bound.
        max: i32,
    },
}
