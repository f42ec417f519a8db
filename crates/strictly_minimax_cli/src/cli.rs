//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::{Board, Position, Strategy};

/// Strictly Minimax - perfect tic-tac-toe by exhaustive search
#[derive(Parser, Debug)]
#[command(name = "minimax")]
#[command(
    about = "Solve and self-play tic-tac-toe with minimax and alpha-beta search",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a full game between two search players
    Play {
        /// Path to a TOML match config
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Strategy for X (exhaustive or pruned)
        #[arg(short = 'x', long = "x")]
        x_strategy: Option<Strategy>,

        /// Strategy for O (exhaustive or pruned)
        #[arg(short = 'o', long = "o")]
        o_strategy: Option<Strategy>,

        /// Force X's first move (label, index 0-8, or row,col)
        #[arg(long)]
        opening: Option<Position>,
    },

    /// Find the best move for the side to play on a board
    Solve {
        /// Board as three rows, e.g. "XX./OO./..."
        #[arg(short, long)]
        board: Board,

        /// Only run this strategy (default: both)
        #[arg(short, long)]
        strategy: Option<Strategy>,
    },

    /// Check that both strategies agree on every reachable board
    Verify,
}
