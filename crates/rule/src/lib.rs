//! # doomsday-rule
//!
//! Conway's Doomsday rule with the Fong & Walters "Odds+11" year step.
//!
//! The weekday of a date is the sum of three terms, reduced once mod 7:
//!
//! ```text
//! day_of_week = (century_anchor + year_anchor + month_anchor) mod 7
//!                  0..=6            0..=6        signed, unreduced
//! ```
//!
//! Each term has a `*Terms` struct holding its intermediate values. The
//! plain functions ([`century_anchor`], [`year_anchor`], [`month_anchor`],
//! [`day_of_week`]) and the `explain_*` narrations are both read off those
//! structs.
//!
//! # Quick start
//!
//! ```
//! use doomsday_calendar::GregorianDate;
//! use doomsday_rule::{century_anchor, day_of_week, explain_year_anchor, year_anchor};
//!
//! assert_eq!(century_anchor(2022), 2);
//! assert_eq!(year_anchor(2022), 6);
//!
//! let date = GregorianDate::new(2022, 3, 26).unwrap();
//! assert_eq!(day_of_week(date).name(), "Saturday");
//!
//! let lines = explain_year_anchor(2022);
//! assert_eq!(lines.last().unwrap(), "            = 6, i.e. Saturday");
//! ```
//!
//! # Architecture
//!
//! ```text
//! DayOfWeekTerms::for_date()
//!   ├─ CenturyTerms::for_year()   (century.rs)
//!   ├─ YearTerms::for_year()      (year.rs)
//!   ├─ MonthTerms::for_date()     (month.rs)
//!   └─ Weekday::from_rem(sum)
//!
//! walkthrough()                   (explain.rs)
//!   ├─ explain_year_anchor()
//!   ├─ explain_century_anchor()
//!   ├─ explain_month_anchor()     (tense.rs for was/is/will be)
//!   └─ explain_day_of_week()
//! ```

pub mod century;
pub mod day_of_week;
pub mod explain;
pub mod month;
pub mod tense;
pub mod year;

pub use century::{CenturyTerms, THURSDAY, century_anchor};
pub use day_of_week::{DayOfWeekTerms, day_of_week, day_of_week_index, day_of_week_name};
pub use explain::{
    explain_century_anchor, explain_day_of_week, explain_leap_year, explain_month_anchor,
    explain_year_anchor, walkthrough, write_lines,
};
pub use month::{MonthTerms, month_anchor, month_doomsday};
pub use tense::Tense;
pub use year::{YearTerms, year_anchor};

// Leap-year rule lives with the other calendar primitives.
pub use doomsday_calendar::leap_year;
