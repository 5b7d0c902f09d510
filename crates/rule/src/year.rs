//! Year anchor via the Odds+11 method (Fong & Walters).

/// Every intermediate value of the Odds+11 year anchor computation.
///
/// The steps, in this exact order:
/// 1. `x = year mod 100`; if `x` is odd, `x += 11`
/// 2. `x = x / 2`; if `x` is odd, `x += 11`
/// 3. `anchor = (7 - x mod 7) mod 7`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearTerms {
    two_digit: i32,
    first_odd: bool,
    second_odd: bool,
    value: i32,
    remainder: i32,
    anchor: u8,
}

impl YearTerms {
    /// Computes the year terms for `year`.
    pub fn for_year(year: i32) -> Self {
        let two_digit = year.rem_euclid(100);
        let mut x = two_digit;
        let first_odd = x % 2 == 1;
        if first_odd {
            x += 11;
        }
        x /= 2;
        let second_odd = x % 2 == 1;
        if second_odd {
            x += 11;
        }
        let remainder = x % 7;
        let anchor = (7 - remainder).rem_euclid(7) as u8;
        Self {
            two_digit,
            first_odd,
            second_odd,
            value: x,
            remainder,
            anchor,
        }
    }

    /// The year within its century (0..=99).
    pub fn two_digit(&self) -> i32 {
        self.two_digit
    }

    /// Value after both Odds+11 steps, before reduction.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// `value mod 7`.
    pub fn remainder(&self) -> i32 {
        self.remainder
    }

    /// The 7's complement of the remainder, in 0..=6.
    pub fn anchor(&self) -> u8 {
        self.anchor
    }

    /// Symbolic form of the Odds+11 steps that were applied.
    ///
    /// `22` gives `(22/2)+11`, `21` gives `(21+11)/2` and `3` gives
    /// `((3+11)/2)+11`.
    pub fn expression(&self) -> String {
        let mut expr = if self.first_odd {
            format!("({}+11)", self.two_digit)
        } else {
            self.two_digit.to_string()
        };
        expr.push_str("/2");
        if self.second_odd {
            expr = format!("({expr})+11");
        }
        expr
    }
}

/// Returns the year anchor (0..=6) contributed by the last two digits of `year`.
pub fn year_anchor(year: i32) -> u8 {
    YearTerms::for_year(year).anchor()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_anchors() {
        assert_eq!(year_anchor(2022), 6);
        assert_eq!(year_anchor(1903), 3);
        assert_eq!(year_anchor(2021), 5);
        assert_eq!(year_anchor(1958), 2);
    }

    #[test]
    fn expressions() {
        assert_eq!(YearTerms::for_year(2022).expression(), "(22/2)+11");
        assert_eq!(YearTerms::for_year(2021).expression(), "(21+11)/2");
        assert_eq!(YearTerms::for_year(1903).expression(), "((3+11)/2)+11");
        assert_eq!(YearTerms::for_year(2000).expression(), "0/2");
        assert_eq!(YearTerms::for_year(2004).expression(), "4/2");
    }

    #[test]
    fn terms_1903() {
        let t = YearTerms::for_year(1903);
        assert_eq!(t.two_digit(), 3);
        assert_eq!(t.value(), 18);
        assert_eq!(t.remainder(), 4);
        assert_eq!(t.anchor(), 3);
    }

    #[test]
    fn matches_twelves_method() {
        // Conway's twelves method: y/12 + y%12 + (y%12)/4, reduced mod 7.
        // Odds+11 must agree for every two-digit year.
        for y in 0..100 {
            let twelves = (y / 12 + y % 12 + (y % 12) / 4) % 7;
            assert_eq!(
                i32::from(year_anchor(2000 + y)),
                twelves,
                "two-digit year {y}"
            );
        }
    }
}
