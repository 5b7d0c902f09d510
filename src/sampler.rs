//! Uniform random dates inside the supported window.

use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate};
use doomsday_calendar::{GregorianDate, YearWindow};
use rand::Rng;

/// Draws dates uniformly by day.
///
/// The range starts on October 15th, 1582 (first day of the Gregorian
/// calendar) or January 1st of the window's first year, whichever is later,
/// and ends on December 31st of the window's last year.
#[derive(Debug, Clone, Copy)]
pub struct DateSampler {
    first: i32,
    last: i32,
}

impl DateSampler {
    pub fn new(window: &YearWindow) -> Result<Self> {
        let adoption = NaiveDate::from_ymd_opt(1582, 10, 15).context("invalid adoption date")?;
        let start = NaiveDate::from_ymd_opt(window.min(), 1, 1)
            .with_context(|| format!("year {} is not representable", window.min()))?;
        let end = NaiveDate::from_ymd_opt(window.max(), 12, 31)
            .with_context(|| format!("year {} is not representable", window.max()))?;
        let first = start.max(adoption).num_days_from_ce();
        let last = end.num_days_from_ce();
        if first > last {
            bail!(
                "window {}..={} ends before the Gregorian calendar was adopted",
                window.min(),
                window.max()
            );
        }
        Ok(Self { first, last })
    }

    /// Draws one date.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<GregorianDate> {
        let n = rng.random_range(self.first..=self.last);
        let naive = NaiveDate::from_num_days_from_ce_opt(n)
            .with_context(|| format!("day number {n} out of range"))?;
        from_naive(naive)
    }
}

/// Converts a chrono date into a [`GregorianDate`].
pub fn from_naive(naive: NaiveDate) -> Result<GregorianDate> {
    GregorianDate::new(naive.year(), naive.month() as u8, naive.day() as u8)
        .with_context(|| format!("cannot convert {naive}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn samples_stay_in_default_window() {
        let sampler = DateSampler::new(&YearWindow::default()).unwrap();
        let adoption = GregorianDate::new(1582, 10, 15).unwrap();
        let end = GregorianDate::new(2600, 12, 31).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let date = sampler.sample(&mut rng).unwrap();
            assert!(date >= adoption && date <= end, "{date} outside window");
        }
    }

    #[test]
    fn single_year_window() {
        let sampler = DateSampler::new(&YearWindow::new(2000, 2000).unwrap()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..200 {
            assert_eq!(sampler.sample(&mut rng).unwrap().year(), 2000);
        }
    }

    #[test]
    fn same_seed_same_dates() {
        let sampler = DateSampler::new(&YearWindow::default()).unwrap();
        let mut a = StdRng::seed_from_u64(9);
        let mut b = StdRng::seed_from_u64(9);
        for _ in 0..20 {
            assert_eq!(sampler.sample(&mut a).unwrap(), sampler.sample(&mut b).unwrap());
        }
    }

    #[test]
    fn window_before_adoption_rejected() {
        let window = YearWindow::new(1500, 1581).unwrap();
        assert!(DateSampler::new(&window).is_err());
    }
}
