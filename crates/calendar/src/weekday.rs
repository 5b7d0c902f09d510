//! Days of the week, numbered from Sunday.

use std::fmt;

/// English weekday names, indexed by [`Weekday::index`].
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const ALL: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

/// A day of the week. Sunday is 0 and Saturday is 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Maps an arbitrary integer onto a weekday with a non-negative modulo.
    ///
    /// Negative inputs wrap around, so `-1` is Saturday.
    pub fn from_rem(n: i32) -> Self {
        ALL[n.rem_euclid(7) as usize]
    }

    /// Returns the weekday for an index in 0..=6, or `None` otherwise.
    pub fn from_index(index: u8) -> Option<Self> {
        ALL.get(usize::from(index)).copied()
    }

    /// Looks up a weekday by its English name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        WEEKDAY_NAMES
            .iter()
            .position(|n| n.eq_ignore_ascii_case(name))
            .map(|i| ALL[i])
    }

    /// Returns the index of this weekday (Sunday = 0 .. Saturday = 6).
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Returns the English name of this weekday.
    pub fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_name_table() {
        for (i, name) in WEEKDAY_NAMES.iter().enumerate() {
            let wd = Weekday::from_index(i as u8).unwrap();
            assert_eq!(wd.index() as usize, i);
            assert_eq!(wd.name(), *name);
        }
    }

    #[test]
    fn from_index_out_of_range() {
        assert_eq!(Weekday::from_index(7), None);
    }

    #[test]
    fn from_rem_wraps_negative() {
        assert_eq!(Weekday::from_rem(-1), Weekday::Saturday);
        assert_eq!(Weekday::from_rem(-7), Weekday::Sunday);
        assert_eq!(Weekday::from_rem(-18), Weekday::Thursday);
        assert_eq!(Weekday::from_rem(27), Weekday::Saturday);
    }

    #[test]
    fn from_name_ignores_case() {
        assert_eq!(Weekday::from_name("friday"), Some(Weekday::Friday));
        assert_eq!(Weekday::from_name("SUNDAY"), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_name("Fri"), None);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(Weekday::Wednesday.to_string(), "Wednesday");
    }
}
