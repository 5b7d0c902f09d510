//! Month offset from the month's reference Doomsday.

use doomsday_calendar::{GregorianDate, leap_year};

/// Reference Doomsday (day of month) in a common year.
///
/// Index 0 unused. Even months from April use 4/4, 6/6, 8/8, 10/10, 12/12;
/// the remaining odd months use Conway's "9 to 5 at the 7-11".
const DOOMSDAYS: [u8; 13] = [0, 10, 21, 7, 4, 9, 6, 11, 8, 5, 10, 7, 12];

fn reference_day(year: i32, month: u8) -> u8 {
    let base = DOOMSDAYS[usize::from(month)];
    if month <= 2 && leap_year(year) {
        base + 1
    } else {
        base
    }
}

/// Returns the reference Doomsday for `month` of `year`.
///
/// January and February move one day later in leap years. Returns `None`
/// if `month` is not in 1..=12.
pub fn month_doomsday(year: i32, month: u8) -> Option<u8> {
    (1..=12)
        .contains(&month)
        .then(|| reference_day(year, month))
}

/// The month term: a date's signed distance from its month's Doomsday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthTerms {
    date: GregorianDate,
    doomsday: u8,
    offset: i32,
}

impl MonthTerms {
    /// Computes the month terms for `date`.
    pub fn for_date(date: GregorianDate) -> Self {
        let doomsday = reference_day(date.year(), date.month());
        Self {
            date,
            doomsday,
            offset: i32::from(date.day()) - i32::from(doomsday),
        }
    }

    /// The date this term was computed for.
    pub fn date(&self) -> GregorianDate {
        self.date
    }

    /// Day of month of the reference Doomsday.
    pub fn doomsday(&self) -> u8 {
        self.doomsday
    }

    /// The reference Doomsday as a full date in the same month.
    pub fn doomsday_date(&self) -> GregorianDate {
        // Every reference day is at most the 22nd, so it exists in any month.
        self.date
            .with_day(self.doomsday)
            .expect("reference Doomsday exists in every month")
    }

    /// Whether the reference day depends on the leap-year rule (January and February).
    pub fn leap_sensitive(&self) -> bool {
        self.date.month() <= 2
    }

    /// `day - doomsday`, unreduced. May be negative or larger than 6.
    pub fn offset(&self) -> i32 {
        self.offset
    }
}

/// Returns `day - doomsday` for `date`'s month, without reducing mod 7.
pub fn month_anchor(date: GregorianDate) -> i32 {
    MonthTerms::for_date(date).offset()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> GregorianDate {
        GregorianDate::new(y, m, d).unwrap()
    }

    #[test]
    fn reference_days_common_year() {
        let expected = [10, 21, 7, 4, 9, 6, 11, 8, 5, 10, 7, 12];
        for (i, &want) in expected.iter().enumerate() {
            let month = i as u8 + 1;
            assert_eq!(month_doomsday(2021, month), Some(want), "month {month}");
        }
    }

    #[test]
    fn reference_days_leap_year() {
        assert_eq!(month_doomsday(2024, 1), Some(11));
        assert_eq!(month_doomsday(2024, 2), Some(22));
        assert_eq!(month_doomsday(2024, 3), Some(7));
        assert_eq!(month_doomsday(1900, 1), Some(10));
        assert_eq!(month_doomsday(2000, 2), Some(22));
    }

    #[test]
    fn reference_day_invalid_month() {
        assert_eq!(month_doomsday(2024, 0), None);
        assert_eq!(month_doomsday(2024, 13), None);
    }

    #[test]
    fn offsets_are_unreduced() {
        assert_eq!(month_anchor(date(2022, 3, 26)), 19);
        assert_eq!(month_anchor(date(2021, 1, 15)), 5);
        assert_eq!(month_anchor(date(1958, 11, 26)), 19);
        assert_eq!(month_anchor(date(2023, 2, 1)), -20);
        assert_eq!(month_anchor(date(2024, 2, 1)), -21);
    }

    #[test]
    fn doomsday_date_same_month() {
        let t = MonthTerms::for_date(date(2021, 1, 15));
        assert_eq!(t.doomsday_date(), date(2021, 1, 10));
        assert!(t.leap_sensitive());
        let t = MonthTerms::for_date(date(2021, 9, 30));
        assert_eq!(t.doomsday_date(), date(2021, 9, 5));
        assert!(!t.leap_sensitive());
    }
}
