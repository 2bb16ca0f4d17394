//! Runtime configuration from environment variables.
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `ARCADE_TICK_MS` | 75 | Tick period in milliseconds (> 0) |
//! | `ARCADE_SEED` | time-based | Seed for apple placement |
//! | `ARCADE_GAME_OVER_HOLD_MS` | 2000 | How long the final score stays up |
//! | `ARCADE_LOG_PATH` | unset | Enables logging into this file |
//! | `ARCADE_LOG` | `info` | Log filter (env_logger syntax) |

use std::env;
use std::num::ParseIntError;
use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::driver::LoopConfig;
use crate::types::{GAME_OVER_HOLD_MS, TICK_MS};

pub const TICK_MS_VAR: &str = "ARCADE_TICK_MS";
pub const SEED_VAR: &str = "ARCADE_SEED";
pub const GAME_OVER_HOLD_VAR: &str = "ARCADE_GAME_OVER_HOLD_MS";
pub const LOG_PATH_VAR: &str = "ARCADE_LOG_PATH";
pub const LOG_FILTER_VAR: &str = "ARCADE_LOG";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}={value:?} is not a valid number")]
    InvalidNumber {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("{var} must be greater than zero")]
    Zero { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArcadeConfig {
    pub tick_ms: u32,
    pub seed: u32,
    pub game_over_hold_ms: u32,
    pub log_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for ArcadeConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            seed: time_seed(),
            game_over_hold_ms: GAME_OVER_HOLD_MS,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl ArcadeConfig {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Build from any variable lookup; unset or blank variables take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| {
            lookup(var)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        let defaults = Self::default();

        let tick_ms = parse_u32(TICK_MS_VAR, get(TICK_MS_VAR))?.unwrap_or(defaults.tick_ms);
        if tick_ms == 0 {
            return Err(ConfigError::Zero { var: TICK_MS_VAR });
        }

        Ok(Self {
            tick_ms,
            seed: parse_u32(SEED_VAR, get(SEED_VAR))?.unwrap_or(defaults.seed),
            game_over_hold_ms: parse_u32(GAME_OVER_HOLD_VAR, get(GAME_OVER_HOLD_VAR))?
                .unwrap_or(defaults.game_over_hold_ms),
            log_path: get(LOG_PATH_VAR).map(PathBuf::from),
            log_filter: get(LOG_FILTER_VAR).unwrap_or(defaults.log_filter),
        })
    }

    pub fn loop_config(&self) -> LoopConfig {
        LoopConfig {
            tick: Duration::from_millis(self.tick_ms as u64),
            game_over_hold: Duration::from_millis(self.game_over_hold_ms as u64),
            max_ticks: None,
        }
    }
}

fn parse_u32(var: &'static str, value: Option<String>) -> Result<Option<u32>, ConfigError> {
    value
        .map(|value| {
            value
                .parse()
                .map_err(|source| ConfigError::InvalidNumber { var, value, source })
        })
        .transpose()
}

/// Seed from the wall clock, for runs without `ARCADE_SEED`.
fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| {
            let nanos = d.as_nanos() as u64;
            (nanos ^ (nanos >> 32)) as u32
        })
        .unwrap_or(1)
}
