//! # doomsday-calendar
//!
//! Gregorian calendar primitives used by the Doomsday rule.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["year"] -->|"LeapRule::for_year()"| B["LeapRule"]
//!     B -->|".is_leap()"| C["leap_year()"]
//!     D["(year, month, day)"] -->|"GregorianDate::new()"| E["GregorianDate"]
//!     C --> E
//!     F["i32 sum"] -->|"Weekday::from_rem()"| G["Weekday"]
//!     A -->|"YearWindow::check()"| A
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use doomsday_calendar::{GregorianDate, Weekday, YearWindow, leap_year};
//!
//! assert!(leap_year(2024));
//!
//! let date = GregorianDate::new(2022, 3, 7).unwrap();
//! assert_eq!(date.to_string(), "March 7th, 2022");
//!
//! assert_eq!(Weekday::from_rem(-1), Weekday::Saturday);
//! assert!(YearWindow::default().check(1400).is_err());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `leap` | Gregorian leap-year rule |
//! | `date` | Validated date and month lengths |
//! | `weekday` | Weekday enum and name table |
//! | `names` | Month names and English ordinals |
//! | `window` | Supported year window |
//! | `error` | Error types |

mod date;
mod error;
mod leap;
mod names;
mod weekday;
mod window;

pub use date::{GregorianDate, days_in_month};
pub use error::CalendarError;
pub use leap::{LeapRule, leap_year};
pub use names::{month_name, ordinal};
pub use weekday::{WEEKDAY_NAMES, Weekday};
pub use window::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, YearWindow};
