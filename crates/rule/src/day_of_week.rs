//! Combination of the three anchor terms into a weekday.

use doomsday_calendar::{GregorianDate, Weekday};
use tracing::trace;

use crate::century::CenturyTerms;
use crate::month::MonthTerms;
use crate::year::YearTerms;

/// The three anchor terms of a date and their combination.
///
/// The month term stays unreduced until [`sum`](Self::sum) is taken mod 7
/// here, so a negative sum is corrected exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayOfWeekTerms {
    century: CenturyTerms,
    year: YearTerms,
    month: MonthTerms,
    weekday: Weekday,
}

impl DayOfWeekTerms {
    /// Computes every term for `date`.
    pub fn for_date(date: GregorianDate) -> Self {
        let century = CenturyTerms::for_year(date.year());
        let year = YearTerms::for_year(date.year());
        let month = MonthTerms::for_date(date);
        let sum = i32::from(century.anchor()) + i32::from(year.anchor()) + month.offset();
        let weekday = Weekday::from_rem(sum);
        trace!(
            %date,
            century = century.anchor(),
            year = year.anchor(),
            month = month.offset(),
            sum,
            weekday = %weekday,
            "day of week"
        );
        Self {
            century,
            year,
            month,
            weekday,
        }
    }

    /// Century term.
    pub fn century(&self) -> &CenturyTerms {
        &self.century
    }

    /// Year term.
    pub fn year(&self) -> &YearTerms {
        &self.year
    }

    /// Month term.
    pub fn month(&self) -> &MonthTerms {
        &self.month
    }

    /// Raw sum of the three terms. Negative when the month offset is
    /// large and negative.
    pub fn sum(&self) -> i32 {
        i32::from(self.century.anchor()) + i32::from(self.year.anchor()) + self.month.offset()
    }

    /// The resulting weekday.
    pub fn weekday(&self) -> Weekday {
        self.weekday
    }
}

/// Returns the weekday of `date`.
///
/// ```
/// use doomsday_calendar::{GregorianDate, Weekday};
/// use doomsday_rule::day_of_week;
///
/// let date = GregorianDate::new(2022, 3, 26).unwrap();
/// assert_eq!(day_of_week(date), Weekday::Saturday);
/// ```
pub fn day_of_week(date: GregorianDate) -> Weekday {
    DayOfWeekTerms::for_date(date).weekday()
}

/// Returns the weekday index (Sunday = 0 .. Saturday = 6) of `date`.
pub fn day_of_week_index(date: GregorianDate) -> u8 {
    day_of_week(date).index()
}

/// Returns the English weekday name of `date`.
pub fn day_of_week_name(date: GregorianDate) -> &'static str {
    day_of_week(date).name()
}
