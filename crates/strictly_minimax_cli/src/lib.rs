//! Self-play driver and solver for strictly_minimax.
//!
//! The engine crate only answers "which move?"; this crate owns everything
//! around it: the command line, match configuration, the game loop, timing
//! and console output.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod orchestrator;
pub mod players;
pub mod render;
pub mod verify;

pub use cli::{Cli, Command};
pub use config::{ConfigError, MatchConfig};
pub use orchestrator::{GameEvent, MatchSummary, MoveRecord, Orchestrator};
pub use players::{Choice, Player, ScriptedPlayer, SearchPlayer};
pub use verify::{Mismatch, VerifyReport, verify_all};
