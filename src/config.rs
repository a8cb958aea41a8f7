//! Command-line configuration.
//!
//! Parsed with clap, then validated into [`Config`] before the terminal is
//! touched, so a bad value is reported on a normal screen.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::types::DEFAULT_DELAY_MS;

/// Terminal falling-block puzzle game with an adjustable fall delay
#[derive(Parser, Debug, Clone)]
#[command(name = "tetris-terminal")]
#[command(about = "Falling-block puzzle game in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Seconds between gravity steps (must be > 0)
    #[arg(
        long,
        env = "TETRIS_DELAY",
        default_value_t = DEFAULT_DELAY_MS as f64 / 1000.0,
        allow_negative_numbers = true
    )]
    pub delay: f64,

    /// Seed for a reproducible piece sequence
    #[arg(long, env = "TETRIS_SEED")]
    pub seed: Option<u64>,

    /// Append logs to this file (filter with TETRIS_LOG, default "info")
    #[arg(long, env = "TETRIS_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Startup configuration errors. All of them are fatal.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("--delay must be greater than 0 (got {0})")]
    NonPositiveDelay(f64),

    #[error("--delay {0} is not a usable number of seconds")]
    InvalidDelay(f64),
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub delay: Duration,
    pub seed: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl TryFrom<Cli> for Config {
    type Error = ConfigError;

    fn try_from(cli: Cli) -> Result<Self, Self::Error> {
        Ok(Self {
            delay: parse_delay(cli.delay)?,
            seed: cli.seed,
            log_file: cli.log_file,
        })
    }
}

/// Turn a delay in seconds into a `Duration`, rejecting zero, negatives,
/// NaN and values too large to represent.
pub fn parse_delay(secs: f64) -> Result<Duration, ConfigError> {
    if secs.is_nan() || secs <= 0.0 {
        return Err(ConfigError::NonPositiveDelay(secs));
    }
    Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::InvalidDelay(secs))
}
