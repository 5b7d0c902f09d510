use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use clap::{Parser, Subcommand};
use doomsday_calendar::GregorianDate;

/// Doomsday rule calculator and day-of-week trainer.
#[derive(Parser)]
#[command(
    name = "doomsday",
    version,
    about = "A command line Doomsday rule utility and trainer"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./doomsday.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Determine if YEAR is a leap year.
    Leapyear(YearArgs),
    /// Calculate the anchor day for the century of YEAR.
    Doomscentury(YearArgs),
    /// Calculate the doomsyear for YEAR.
    Doomsyear(YearArgs),
    /// Calculate the doomsmonth for DATE.
    Doomsmonth(DateArgs),
    /// Calculate the day of the week for DATE.
    Dayofweek(DayOfWeekArgs),
    /// Estimate your accuracy in calculating the day of the week.
    Test(TestArgs),
    /// Practice until you quit, with a walkthrough after every wrong answer.
    Train(TrainArgs),
}

/// Arguments for subcommands that take a bare year.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Year to evaluate.
    pub year: i32,

    /// Provide a walkthrough of the calculation.
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for subcommands that take a full date.
#[derive(clap::Args)]
pub struct DateArgs {
    /// Date as YYYY-MM-DD.
    #[arg(value_parser = parse_date)]
    pub date: GregorianDate,

    /// Provide a walkthrough of the calculation.
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for the `dayofweek` subcommand.
#[derive(clap::Args)]
pub struct DayOfWeekArgs {
    #[command(flatten)]
    pub date: DateArgs,

    /// Print the weekday index (Sunday = 0) instead of its name.
    #[arg(long, conflicts_with = "explain")]
    pub index: bool,
}

/// Arguments for the `test` subcommand.
#[derive(clap::Args)]
pub struct TestArgs {
    /// Number of dates to quiz (overrides [quiz].trials).
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=100))]
    pub trials: Option<u32>,

    /// RNG seed for reproducible quizzes (overrides [quiz].seed).
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `train` subcommand.
#[derive(clap::Args)]
pub struct TrainArgs {
    /// RNG seed for reproducible sessions (overrides [quiz].seed).
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Parses `YYYY-MM-DD` into a validated date.
fn parse_date(s: &str) -> Result<GregorianDate, String> {
    let naive = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM-DD, got '{s}': {e}"))?;
    GregorianDate::new(naive.year(), naive.month() as u8, naive.day() as u8)
        .map_err(|e| e.to_string())
}
