//! Supported year window.

use crate::error::CalendarError;

/// Default lower bound: the year the Gregorian calendar was first adopted.
pub const DEFAULT_MIN_YEAR: i32 = 1582;

/// Default upper bound.
pub const DEFAULT_MAX_YEAR: i32 = 2600;

/// An inclusive range of years a caller accepts.
///
/// The arithmetic works for any year; the window is a policy applied by
/// callers before they hand a date to the rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearWindow {
    min: i32,
    max: i32,
}

impl YearWindow {
    /// Creates a window covering `min..=max`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidWindow`] if `min > max`.
    pub fn new(min: i32, max: i32) -> Result<Self, CalendarError> {
        if min > max {
            return Err(CalendarError::InvalidWindow { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the smallest accepted year.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// Returns the largest accepted year.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Returns whether `year` lies inside the window.
    pub fn contains(&self, year: i32) -> bool {
        (self.min..=self.max).contains(&year)
    }

    /// Checks `year` against the window.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if `year` is outside the window.
    pub fn check(&self, year: i32) -> Result<i32, CalendarError> {
        if self.contains(year) {
            Ok(year)
        } else {
            Err(CalendarError::OutOfRange {
                year,
                min: self.min,
                max: self.max,
            })
        }
    }
}

impl Default for YearWindow {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_YEAR,
            max: DEFAULT_MAX_YEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bounds() {
        let w = YearWindow::default();
        assert_eq!(w.min(), 1582);
        assert_eq!(w.max(), 2600);
    }

    #[test]
    fn check_inclusive() {
        let w = YearWindow::default();
        assert_eq!(w.check(1582).unwrap(), 1582);
        assert_eq!(w.check(2600).unwrap(), 2600);
        assert_eq!(
            w.check(1581).unwrap_err(),
            CalendarError::OutOfRange {
                year: 1581,
                min: 1582,
                max: 2600,
            }
        );
        assert!(w.check(2601).is_err());
    }

    #[test]
    fn reversed_bounds_rejected() {
        assert_eq!(
            YearWindow::new(2000, 1900).unwrap_err(),
            CalendarError::InvalidWindow { min: 2000, max: 1900 }
        );
    }

    #[test]
    fn single_year_window() {
        let w = YearWindow::new(2000, 2000).unwrap();
        assert!(w.contains(2000));
        assert!(!w.contains(2001));
    }
}
