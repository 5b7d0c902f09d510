//! Step-by-step narration of each term.
//!
//! Every line is rendered from the same `*Terms` structs the plain
//! functions return, so the narrated numbers always match the answer.

use std::io::{self, Write};

use doomsday_calendar::{GregorianDate, LeapRule, Weekday, leap_year, ordinal};

use crate::century::CenturyTerms;
use crate::day_of_week::DayOfWeekTerms;
use crate::month::MonthTerms;
use crate::tense::Tense;
use crate::year::YearTerms;

/// Prefix for continuation lines, aligned under the first `=`.
const CONT: &str = "            = ";

/// Narrates which branch of the divisibility chain decides `year`.
pub fn explain_leap_year(year: i32) -> Vec<String> {
    let line = match LeapRule::for_year(year) {
        LeapRule::DivisibleBy400 => {
            format!("{year} is evenly divisible by 400, so it is a leap year.")
        }
        LeapRule::DivisibleBy100 => format!(
            "{year} is not evenly divisible by 400, but is evenly divisible by 100, \
             so it is not a leap year."
        ),
        LeapRule::DivisibleBy4 => format!(
            "{year} is not evenly divisible by neither 400 nor 100, \
             but is evenly divisible by 4, so it is a leap year."
        ),
        LeapRule::NotDivisible => format!(
            "{year} is not evenly divisible by neither 400, 100, nor 4, \
             so it is not a leap year."
        ),
    };
    vec![line]
}

/// Narrates the century anchor of `year`.
pub fn explain_century_anchor(year: i32) -> Vec<String> {
    let t = CenturyTerms::for_year(year);
    vec![
        format!(
            "doomcentury = ((5*{} + floor({}/4)) mod 7 + Thursday) mod 7",
            t.century(),
            t.century() - 1
        ),
        format!(
            "{CONT}(({} + {}) mod 7 + Thursday) mod 7",
            t.five_c(),
            t.quarter()
        ),
        format!("{CONT}({} mod 7 + 4) mod 7", t.sum()),
        format!("{CONT}({} + 4) mod 7", t.raw()),
        format!("{CONT}{} mod 7", t.shifted()),
        result_line(Weekday::from_rem(i32::from(t.anchor()))),
    ]
}

/// Narrates the Odds+11 year anchor of `year`.
pub fn explain_year_anchor(year: i32) -> Vec<String> {
    let t = YearTerms::for_year(year);
    vec![
        format!(
            "doomsyear   = 7's complement of ({} mod 7)",
            t.expression()
        ),
        format!("{CONT}7's complement of ({} mod 7)", t.value()),
        format!("{CONT}7's complement of {}", t.remainder()),
        result_line(Weekday::from_rem(i32::from(t.anchor()))),
    ]
}

/// Narrates the month offset of `date`.
///
/// Verb tenses are chosen relative to `today`.
pub fn explain_month_anchor(date: GregorianDate, today: GregorianDate) -> Vec<String> {
    let t = MonthTerms::for_date(date);
    let mut lines = Vec::with_capacity(4);
    if t.leap_sensitive() {
        lines.push(format!(
            "{} {}{} a leap year, so",
            date.year(),
            Tense::of(date, today).to_be(),
            if leap_year(date.year()) { "" } else { " not" }
        ));
    }
    let doomsday = t.doomsday_date();
    lines.push(format!(
        "{doomsday} {} on a Doomsday.",
        Tense::of(doomsday, today).to_fall()
    ));
    lines.push(format!("doomsmonth  = {} - {}", date.day(), t.doomsday()));
    lines.push(format!("{CONT}{}", t.offset()));
    lines
}

/// Narrates the final combination of the three terms for `date`.
///
/// A negative sum gets two extra lines taking the 7's complement of its
/// magnitude, so the final line always shows an index in 0..=6.
pub fn explain_day_of_week(date: GregorianDate) -> Vec<String> {
    let t = DayOfWeekTerms::for_date(date);
    let sum = t.sum();
    let mut lines = vec![
        "day of week = (doomscentury + doomsyear + doomsmonth) mod 7".to_string(),
        format!(
            "{CONT}({} + {} + {}) mod 7",
            t.century().anchor(),
            t.year().anchor(),
            t.month().offset()
        ),
        format!("{CONT}{sum} mod 7"),
    ];
    if sum < 0 {
        lines.push(format!("{CONT}7's complement of ({} mod 7)", -sum));
        lines.push(format!("{CONT}7's complement of {}", (-sum) % 7));
    }
    lines.push(result_line(t.weekday()));
    lines
}

/// The full four-part walkthrough for `date`: year, century, month, then
/// the combination.
pub fn walkthrough(date: GregorianDate, today: GregorianDate) -> Vec<String> {
    let century = CenturyTerms::for_year(date.year());
    let year = YearTerms::for_year(date.year());
    let c = ordinal(i64::from(century.century()));

    let mut lines = vec![format!(
        "1) Calculate the doomsyear for the {} year of the {c} century.",
        ordinal(i64::from(year.two_digit()))
    )];
    lines.extend(explain_year_anchor(date.year()));
    lines.push(format!("2) Calculate the anchor day for the {c} century."));
    lines.extend(explain_century_anchor(date.year()));
    lines.push(format!(
        "3) Calculate the doomsmonth for {} of the year.",
        date.month_name()
    ));
    lines.extend(explain_month_anchor(date, today));
    lines.push("4) Calculate the day of the week.".to_string());
    lines.extend(explain_day_of_week(date));
    lines
}

/// Writes `lines` to `out`, one per line.
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn result_line(weekday: Weekday) -> String {
    format!("{CONT}{}, i.e. {weekday}", weekday.index())
}
