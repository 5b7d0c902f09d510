//! Gregorian leap-year rule.

/// The branch of the Gregorian divisibility chain that decides a year.
///
/// The chain is checked in order: 400, then 100, then 4. The first divisor
/// that divides the year settles the answer; a year divisible by none of
/// them is a common year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeapRule {
    /// Divisible by 400: leap year.
    DivisibleBy400,
    /// Divisible by 100 but not 400: common year.
    DivisibleBy100,
    /// Divisible by 4 but not 100: leap year.
    DivisibleBy4,
    /// Not divisible by 4: common year.
    NotDivisible,
}

impl LeapRule {
    /// Finds the branch of the divisibility chain that applies to `year`.
    pub fn for_year(year: i32) -> Self {
        if year % 400 == 0 {
            Self::DivisibleBy400
        } else if year % 100 == 0 {
            Self::DivisibleBy100
        } else if year % 4 == 0 {
            Self::DivisibleBy4
        } else {
            Self::NotDivisible
        }
    }

    /// Returns whether this branch makes the year a leap year.
    pub fn is_leap(self) -> bool {
        matches!(self, Self::DivisibleBy400 | Self::DivisibleBy4)
    }
}

/// Returns `true` if `year` is a leap year in the Gregorian calendar.
///
/// ```
/// use doomsday_calendar::leap_year;
///
/// assert!(leap_year(2000));
/// assert!(!leap_year(1900));
/// assert!(leap_year(2024));
/// ```
pub fn leap_year(year: i32) -> bool {
    LeapRule::for_year(year).is_leap()
}
