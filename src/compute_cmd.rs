//! Single-shot commands: print a value, or its walkthrough with `--explain`.

use std::io::Write;

use anyhow::Result;
use doomsday_calendar::{GregorianDate, YearWindow, leap_year};
use doomsday_rule::{
    century_anchor, day_of_week, explain_century_anchor, explain_leap_year, explain_month_anchor,
    explain_year_anchor, month_anchor, walkthrough, write_lines, year_anchor,
};
use tracing::{debug, info_span};

use crate::cli::{DateArgs, DayOfWeekArgs, YearArgs};

/// `leapyear YEAR`
pub fn leapyear<W: Write>(args: &YearArgs, window: &YearWindow, out: &mut W) -> Result<()> {
    let _cmd = info_span!("leapyear", year = args.year).entered();
    let year = window.check(args.year)?;
    if args.explain {
        write_lines(out, &explain_leap_year(year))?;
    } else {
        writeln!(out, "{}", leap_year(year))?;
    }
    Ok(())
}

/// `doomscentury YEAR`
pub fn doomscentury<W: Write>(args: &YearArgs, window: &YearWindow, out: &mut W) -> Result<()> {
    let _cmd = info_span!("doomscentury", year = args.year).entered();
    let year = window.check(args.year)?;
    if args.explain {
        write_lines(out, &explain_century_anchor(year))?;
    } else {
        writeln!(out, "{}", century_anchor(year))?;
    }
    Ok(())
}

/// `doomsyear YEAR`
pub fn doomsyear<W: Write>(args: &YearArgs, window: &YearWindow, out: &mut W) -> Result<()> {
    let _cmd = info_span!("doomsyear", year = args.year).entered();
    let year = window.check(args.year)?;
    if args.explain {
        write_lines(out, &explain_year_anchor(year))?;
    } else {
        writeln!(out, "{}", year_anchor(year))?;
    }
    Ok(())
}

/// `doomsmonth DATE`
pub fn doomsmonth<W: Write>(
    args: &DateArgs,
    window: &YearWindow,
    today: GregorianDate,
    out: &mut W,
) -> Result<()> {
    let _cmd = info_span!("doomsmonth", date = %args.date).entered();
    let date = checked(args.date, window)?;
    if args.explain {
        write_lines(out, &explain_month_anchor(date, today))?;
    } else {
        writeln!(out, "{}", month_anchor(date))?;
    }
    Ok(())
}

/// `dayofweek DATE`
pub fn dayofweek<W: Write>(
    args: &DayOfWeekArgs,
    window: &YearWindow,
    today: GregorianDate,
    out: &mut W,
) -> Result<()> {
    let _cmd = info_span!("dayofweek", date = %args.date.date).entered();
    let date = checked(args.date.date, window)?;
    if args.date.explain {
        write_lines(out, &walkthrough(date, today))?;
    } else if args.index {
        writeln!(out, "{}", day_of_week(date).index())?;
    } else {
        writeln!(out, "{}", day_of_week(date))?;
    }
    Ok(())
}

fn checked(date: GregorianDate, window: &YearWindow) -> Result<GregorianDate> {
    window.check(date.year())?;
    debug!(%date, "date accepted");
    Ok(date)
}
