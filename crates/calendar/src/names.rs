//! English month names and ordinal suffixes.

/// Month names (index 0 unused, index 1 = January, ..., index 12 = December).
pub(crate) const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the English name of `month`, or `None` if it is not in 1..=12.
pub fn month_name(month: u8) -> Option<&'static str> {
    match month {
        1..=12 => Some(MONTH_NAMES[usize::from(month)]),
        _ => None,
    }
}

/// Formats `n` as an English ordinal: `1st`, `2nd`, `3rd`, `11th`, `22nd`.
pub fn ordinal(n: i64) -> String {
    let suffix = if (10..20).contains(&(n.rem_euclid(100))) {
        "th"
    } else {
        match n.rem_euclid(10) {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        }
    };
    format!("{n}{suffix}")
}
