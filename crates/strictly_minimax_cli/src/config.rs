//! Match configuration for self-play.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_minimax::{Player, Position, Strategy};
use tracing::{debug, info, instrument};

/// Which strategy each side searches with, and an optional forced opening.
///
/// The defaults reproduce the classic demo: X runs exhaustive minimax, O
/// runs alpha-beta, and X picks its own first move.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Strategy used by X.
    #[serde(default = "default_x_strategy")]
    x_strategy: Strategy,

    /// Strategy used by O.
    #[serde(default = "default_o_strategy")]
    o_strategy: Strategy,

    /// X's first move, bypassing search.
    #[serde(default)]
    opening: Option<Position>,
}

fn default_x_strategy() -> Strategy {
    Strategy::Exhaustive
}

fn default_o_strategy() -> Strategy {
    Strategy::Pruned
}

impl MatchConfig {
    /// Creates a configuration from explicit choices.
    #[instrument]
    pub fn new(x_strategy: Strategy, o_strategy: Strategy, opening: Option<Position>) -> Self {
        Self {
            x_strategy,
            o_strategy,
            opening,
        }
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading match config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            x = %config.x_strategy,
            o = %config.o_strategy,
            opening = ?config.opening,
            "Match config loaded"
        );
        Ok(config)
    }

    /// Replaces any field given on the command line.
    pub fn with_overrides(
        mut self,
        x_strategy: Option<Strategy>,
        o_strategy: Option<Strategy>,
        opening: Option<Position>,
    ) -> Self {
        if let Some(strategy) = x_strategy {
            self.x_strategy = strategy;
        }
        if let Some(strategy) = o_strategy {
            self.o_strategy = strategy;
        }
        if opening.is_some() {
            self.opening = opening;
        }
        self
    }

    /// Strategy for the given side.
    pub fn strategy_for(&self, player: Player) -> Strategy {
        match player {
            Player::X => self.x_strategy,
            Player::O => self.o_strategy,
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self::new(default_x_strategy(), default_o_strategy(), None)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
