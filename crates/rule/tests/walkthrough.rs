use doomsday_calendar::GregorianDate;
use doomsday_rule::{explain_month_anchor, walkthrough, write_lines};

fn date(y: i32, m: u8, d: u8) -> GregorianDate {
    GregorianDate::new(y, m, d).unwrap()
}

/// Renders the walkthrough as it would be printed.
fn render(lines: &[String]) -> String {
    let mut buf = Vec::new();
    write_lines(&mut buf, lines).unwrap();
    String::from_utf8(buf).unwrap()
}

fn today() -> GregorianDate {
    date(2026, 10, 16)
}

const MARCH_26_2022: &str = "\
1) Calculate the doomsyear for the 22nd year of the 21st century.
doomsyear   = 7's complement of ((22/2)+11 mod 7)
            = 7's complement of (22 mod 7)
            = 7's complement of 1
            = 6, i.e. Saturday
2) Calculate the anchor day for the 21st century.
doomcentury = ((5*21 + floor(20/4)) mod 7 + Thursday) mod 7
            = ((105 + 5) mod 7 + Thursday) mod 7
            = (110 mod 7 + 4) mod 7
            = (5 + 4) mod 7
            = 9 mod 7
            = 2, i.e. Tuesday
3) Calculate the doomsmonth for March of the year.
March 7th, 2022 fell on a Doomsday.
doomsmonth  = 26 - 7
            = 19
4) Calculate the day of the week.
day of week = (doomscentury + doomsyear + doomsmonth) mod 7
            = (2 + 6 + 19) mod 7
            = 27 mod 7
            = 6, i.e. Saturday
";

const JANUARY_15_2021: &str = "\
1) Calculate the doomsyear for the 21st year of the 21st century.
doomsyear   = 7's complement of ((21+11)/2 mod 7)
            = 7's complement of (16 mod 7)
            = 7's complement of 2
            = 5, i.e. Friday
2) Calculate the anchor day for the 21st century.
doomcentury = ((5*21 + floor(20/4)) mod 7 + Thursday) mod 7
            = ((105 + 5) mod 7 + Thursday) mod 7
            = (110 mod 7 + 4) mod 7
            = (5 + 4) mod 7
            = 9 mod 7
            = 2, i.e. Tuesday
3) Calculate the doomsmonth for January of the year.
2021 was not a leap year, so
January 10th, 2021 fell on a Doomsday.
doomsmonth  = 15 - 10
            = 5
4) Calculate the day of the week.
day of week = (doomscentury + doomsyear + doomsmonth) mod 7
            = (2 + 5 + 5) mod 7
            = 12 mod 7
            = 5, i.e. Friday
";

const NOVEMBER_26_1958: &str = "\
1) Calculate the doomsyear for the 58th year of the 20th century.
doomsyear   = 7's complement of ((58/2)+11 mod 7)
            = 7's complement of (40 mod 7)
            = 7's complement of 5
            = 2, i.e. Tuesday
2) Calculate the anchor day for the 20th century.
doomcentury = ((5*20 + floor(19/4)) mod 7 + Thursday) mod 7
            = ((100 + 4) mod 7 + Thursday) mod 7
            = (104 mod 7 + 4) mod 7
            = (6 + 4) mod 7
            = 10 mod 7
            = 3, i.e. Wednesday
3) Calculate the doomsmonth for November of the year.
November 7th, 1958 fell on a Doomsday.
doomsmonth  = 26 - 7
            = 19
4) Calculate the day of the week.
day of week = (doomscentury + doomsyear + doomsmonth) mod 7
            = (3 + 2 + 19) mod 7
            = 24 mod 7
            = 3, i.e. Wednesday
";

#[test]
fn march_26_2022() {
    assert_eq!(render(&walkthrough(date(2022, 3, 26), today())), MARCH_26_2022);
}

#[test]
fn january_15_2021() {
    assert_eq!(
        render(&walkthrough(date(2021, 1, 15), today())),
        JANUARY_15_2021
    );
}

#[test]
fn november_26_1958() {
    assert_eq!(
        render(&walkthrough(date(1958, 11, 26), today())),
        NOVEMBER_26_1958
    );
}

#[test]
fn month_explanation_standalone() {
    assert_eq!(
        render(&explain_month_anchor(date(2021, 1, 15), today())),
        "2021 was not a leap year, so\n\
         January 10th, 2021 fell on a Doomsday.\n\
         doomsmonth  = 15 - 10\n\
         \x20           = 5\n"
    );
}

#[test]
fn leap_january_present_tense() {
    let day = date(2024, 1, 11);
    let lines = walkthrough(day, day);
    assert!(
        lines.contains(&"2024 is a leap year, so".to_string()),
        "missing leap line in {lines:#?}"
    );
    assert!(lines.contains(&"January 11th, 2024 falls on a Doomsday.".to_string()));
    assert!(lines.contains(&"doomsmonth  = 11 - 11".to_string()));
}
