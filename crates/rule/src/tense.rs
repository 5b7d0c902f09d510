//! Verb tense of a date relative to a reference date ("today").

use doomsday_calendar::GregorianDate;

/// Whether a date lies before, on, or after the reference date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tense {
    Past,
    Present,
    Future,
}

impl Tense {
    /// Compares `subject` against `reference`.
    pub fn of(subject: GregorianDate, reference: GregorianDate) -> Self {
        match subject.cmp(&reference) {
            std::cmp::Ordering::Less => Self::Past,
            std::cmp::Ordering::Equal => Self::Present,
            std::cmp::Ordering::Greater => Self::Future,
        }
    }

    /// "was", "is" or "will be".
    pub fn to_be(self) -> &'static str {
        match self {
            Self::Past => "was",
            Self::Present => "is",
            Self::Future => "will be",
        }
    }

    /// "fell", "falls" or "will fall".
    pub fn to_fall(self) -> &'static str {
        match self {
            Self::Past => "fell",
            Self::Present => "falls",
            Self::Future => "will fall",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> GregorianDate {
        GregorianDate::new(y, m, d).unwrap()
    }

    #[test]
    fn relative_to_reference() {
        let today = date(2026, 10, 16);
        assert_eq!(Tense::of(date(2022, 3, 26), today), Tense::Past);
        assert_eq!(Tense::of(today, today), Tense::Present);
        assert_eq!(Tense::of(date(2026, 10, 17), today), Tense::Future);
    }

    #[test]
    fn verbs() {
        assert_eq!(Tense::Past.to_be(), "was");
        assert_eq!(Tense::Present.to_fall(), "falls");
        assert_eq!(Tense::Future.to_be(), "will be");
        assert_eq!(Tense::Future.to_fall(), "will fall");
    }
}
