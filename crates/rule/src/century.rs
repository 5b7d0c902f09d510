//! Century anchor day.

/// Weekday index of the anchor for century zero.
pub const THURSDAY: i32 = 4;

/// Every intermediate value of the century anchor computation.
///
/// `anchor = ((5c + floor((c - 1) / 4)) mod 7 + 4) mod 7` where
/// `c = floor(year / 100) + 1` is the ordinal century (21 for 2022).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CenturyTerms {
    century: i32,
    five_c: i32,
    quarter: i32,
    raw: i32,
    anchor: u8,
}

impl CenturyTerms {
    /// Computes the century terms for `year`.
    pub fn for_year(year: i32) -> Self {
        let century = year.div_euclid(100) + 1;
        let five_c = 5 * century;
        let quarter = (century - 1).div_euclid(4);
        let raw = (five_c + quarter).rem_euclid(7);
        let anchor = (raw + THURSDAY).rem_euclid(7) as u8;
        Self {
            century,
            five_c,
            quarter,
            raw,
            anchor,
        }
    }

    /// Ordinal century number `c`.
    pub fn century(&self) -> i32 {
        self.century
    }

    /// `5 * c`.
    pub fn five_c(&self) -> i32 {
        self.five_c
    }

    /// `floor((c - 1) / 4)`.
    pub fn quarter(&self) -> i32 {
        self.quarter
    }

    /// `5c + floor((c - 1) / 4)` before reduction.
    pub fn sum(&self) -> i32 {
        self.five_c + self.quarter
    }

    /// The sum reduced mod 7, before the Thursday shift.
    pub fn raw(&self) -> i32 {
        self.raw
    }

    /// `raw + 4`, before the final reduction.
    pub fn shifted(&self) -> i32 {
        self.raw + THURSDAY
    }

    /// The anchor weekday index in 0..=6.
    pub fn anchor(&self) -> u8 {
        self.anchor
    }
}

/// Returns the anchor weekday index (0..=6) of the century containing `year`.
pub fn century_anchor(year: i32) -> u8 {
    CenturyTerms::for_year(year).anchor()
}
