//! Interactive commands: the fixed-length `test` quiz and the open-ended
//! `train` loop.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use doomsday_calendar::{GregorianDate, Weekday};
use doomsday_rule::{Tense, day_of_week, walkthrough, write_lines};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, info_span};

use crate::cli::{TestArgs, TrainArgs};
use crate::config::DoomsdayConfig;
use crate::sampler::DateSampler;

const TRAIN_HINT: &str = "Type 'q' to quit, 0 - 6 (or a weekday name) for day of week guess.";
const BAD_INPUT: &str = "Bad input: type 'q' to quit, 0 - 6 for day of week guess.";

/// Running score of a session.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    trials: u32,
    correct: u32,
}

impl Tally {
    pub fn record(&mut self, correct: bool) {
        self.trials += 1;
        if correct {
            self.correct += 1;
        }
    }

    pub fn trials(&self) -> u32 {
        self.trials
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Share of correct answers as a whole percentage, or `None` before any trial.
    pub fn percent(&self) -> Option<String> {
        if self.trials == 0 {
            return None;
        }
        let ratio = f64::from(self.correct) / f64::from(self.trials);
        Some(format!("{:.0}%", ratio * 100.0))
    }
}

/// Interprets a guess as a weekday index (0-6) or a weekday name.
pub fn parse_guess(input: &str) -> Option<Weekday> {
    let input = input.trim();
    match input.parse::<u8>() {
        Ok(n) => Weekday::from_index(n),
        Err(_) => Weekday::from_name(input),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Reads one line, returning `None` at end of input.
fn read_answer<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let n = input.read_line(&mut line).context("failed to read answer")?;
    if n == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Runs the `test` command against stdin/stdout.
pub fn run_test(args: TestArgs, config: &DoomsdayConfig, today: GregorianDate) -> Result<()> {
    let _cmd = info_span!("test").entered();
    let trials = args.trials.unwrap_or(config.quiz.trials);
    let sampler = DateSampler::new(&config.window()?)?;
    let mut rng = make_rng(args.seed.or(config.quiz.seed));
    info!(trials, "starting quiz");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let tally = quiz(
        trials,
        &sampler,
        today,
        &mut rng,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )?;
    info!(trials = tally.trials(), correct = tally.correct(), "quiz finished");
    Ok(())
}

/// Asks `trials` random dates, reveals each answer, then prints accuracy.
///
/// Stops early if the input ends; accuracy then covers the dates answered.
pub fn quiz<R: BufRead, W: Write, G: Rng + ?Sized>(
    trials: u32,
    sampler: &DateSampler,
    today: GregorianDate,
    rng: &mut G,
    input: &mut R,
    out: &mut W,
) -> Result<Tally> {
    let mut tally = Tally::default();
    for _ in 0..trials {
        let date = sampler.sample(rng)?;
        let answer = day_of_week(date);
        write!(out, "{date}? ")?;
        out.flush()?;
        let Some(guess) = read_answer(input)? else {
            writeln!(out)?;
            break;
        };
        let correct = parse_guess(&guess) == Some(answer);
        debug!(%date, %answer, guess = %guess, correct, "answer");
        writeln!(
            out,
            "{date} {} a {answer}.",
            Tense::of(date, today).to_be()
        )?;
        tally.record(correct);
    }
    if let Some(p) = tally.percent() {
        writeln!(out, "Accuracy: {p} over {} trials.", tally.trials())?;
    }
    Ok(tally)
}

/// Runs the `train` command against stdin/stdout.
pub fn run_train(args: TrainArgs, config: &DoomsdayConfig, today: GregorianDate) -> Result<()> {
    let _cmd = info_span!("train").entered();
    let sampler = DateSampler::new(&config.window()?)?;
    let mut rng = make_rng(args.seed.or(config.quiz.seed));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let tally = train(
        &sampler,
        today,
        &mut rng,
        &mut stdin.lock(),
        &mut stdout.lock(),
    )?;
    info!(trials = tally.trials(), correct = tally.correct(), "training finished");
    Ok(())
}

/// Asks random dates until `q` or end of input. A wrong guess is followed
/// by the full walkthrough for that date.
pub fn train<R: BufRead, W: Write, G: Rng + ?Sized>(
    sampler: &DateSampler,
    today: GregorianDate,
    rng: &mut G,
    input: &mut R,
    out: &mut W,
) -> Result<Tally> {
    let mut tally = Tally::default();
    writeln!(out, "{TRAIN_HINT}")?;
    loop {
        let date = sampler.sample(rng)?;
        write!(out, "{date}? ")?;
        out.flush()?;
        let Some(line) = read_answer(input)? else {
            writeln!(out)?;
            break;
        };
        if line.trim() == "q" {
            break;
        }
        let Some(guess) = parse_guess(&line) else {
            writeln!(out, "{BAD_INPUT}")?;
            continue;
        };
        if guess == day_of_week(date) {
            tally.record(true);
            writeln!(out, "Correct!")?;
        } else {
            tally.record(false);
            writeln!(out, "Wrong!")?;
            write_lines(out, &walkthrough(date, today))?;
        }
    }
    if let Some(p) = tally.percent() {
        let plural = if tally.trials() > 1 { "s" } else { "" };
        writeln!(out, "Accuracy = {p} over {} trial{plural}", tally.trials())?;
    }
    Ok(tally)
}
