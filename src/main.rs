mod cli;
mod compute_cmd;
mod config;
mod logging;
mod quiz_cmd;
mod sampler;

use std::process;

use anyhow::Result;
use clap::Parser;
use doomsday_calendar::GregorianDate;

use crate::cli::{Cli, Command};
use crate::config::DoomsdayConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = DoomsdayConfig::load(cli.config.as_deref())?;
    let window = config.window()?;
    let today = today()?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Leapyear(args) => compute_cmd::leapyear(&args, &window, &mut out),
        Command::Doomscentury(args) => compute_cmd::doomscentury(&args, &window, &mut out),
        Command::Doomsyear(args) => compute_cmd::doomsyear(&args, &window, &mut out),
        Command::Doomsmonth(args) => compute_cmd::doomsmonth(&args, &window, today, &mut out),
        Command::Dayofweek(args) => compute_cmd::dayofweek(&args, &window, today, &mut out),
        Command::Test(args) => {
            drop(out);
            quiz_cmd::run_test(args, &config, today)
        }
        Command::Train(args) => {
            drop(out);
            quiz_cmd::run_train(args, &config, today)
        }
    }
}

/// Local calendar date, used to pick verb tenses in explanations.
fn today() -> Result<GregorianDate> {
    sampler::from_naive(chrono::Local::now().date_naive())
}
