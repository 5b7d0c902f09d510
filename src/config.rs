use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use doomsday_calendar::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR, YearWindow};
use serde::Deserialize;
use tracing::debug;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "doomsday.toml";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DoomsdayConfig {
    /// Supported year window.
    #[serde(default)]
    pub window: WindowToml,

    /// Quiz settings.
    #[serde(default)]
    pub quiz: QuizToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WindowToml {
    #[serde(default = "default_min_year")]
    pub min_year: i32,
    #[serde(default = "default_max_year")]
    pub max_year: i32,
}

impl Default for WindowToml {
    fn default() -> Self {
        Self {
            min_year: default_min_year(),
            max_year: default_max_year(),
        }
    }
}

fn default_min_year() -> i32 {
    DEFAULT_MIN_YEAR
}
fn default_max_year() -> i32 {
    DEFAULT_MAX_YEAR
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuizToml {
    #[serde(default = "default_trials")]
    pub trials: u32,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for QuizToml {
    fn default() -> Self {
        Self {
            trials: default_trials(),
            seed: None,
        }
    }
}

fn default_trials() -> u32 {
    10
}

impl DoomsdayConfig {
    /// Loads configuration from `path`, or from [`DEFAULT_CONFIG_FILE`] if it
    /// exists, or falls back to built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.exists() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                default
            }
        };
        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        config.validate()?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Checks cross-field constraints that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        self.window()?;
        if !(1..=100).contains(&self.quiz.trials) {
            bail!(
                "[quiz].trials must be in 1..=100, got {}",
                self.quiz.trials
            );
        }
        Ok(())
    }

    /// Builds the year window from `[window]`.
    pub fn window(&self) -> Result<YearWindow> {
        YearWindow::new(self.window.min_year, self.window.max_year)
            .context("invalid [window] section")
    }
}
