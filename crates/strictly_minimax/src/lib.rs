//! Strictly Minimax - perfect tic-tac-toe by exhaustive game-tree search
//!
//! # Architecture
//!
//! - **Board model**: [`Board`], [`Square`], [`Player`] and [`Position`] are
//!   small `Copy` values; every move produces a new board.
//! - **Rules**: win lines, draws, terminal detection and [`Utility`].
//! - **Turn resolver**: [`current_player`] and [`apply`].
//! - **Move generator**: [`legal_actions`].
//! - **Search**: [`Exhaustive`] minimax and [`AlphaBeta`] pruning behind the
//!   [`SearchStrategy`] trait, selected per call with [`Strategy`].
//! - **Engine**: the driver boundary ([`select_action`], [`advance`],
//!   [`status`]).
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Decision, Position, Strategy, select_action};
//!
//! let board: Board = "XX./OO./...".parse().unwrap();
//! assert_eq!(
//!     select_action(&board, Strategy::Pruned),
//!     Ok(Decision::Play(Position::TopRight))
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod invariants;
mod movegen;
mod position;
mod reachable;
pub mod rules;
pub mod search;
mod turn;
mod types;

// Crate-level exports - Board model
pub use position::Position;
pub use types::{Board, GameStatus, Player, Square};

// Crate-level exports - Errors
pub use error::{
    BoardParseError, MoveError, PlayError, PositionParseError, RuleError, SearchError,
};

// Crate-level exports - Rules and turn order
pub use movegen::legal_actions;
pub use rules::{Utility, evaluate, is_terminal, utility, winner};
pub use turn::{apply, current_player};

// Crate-level exports - Search
pub use search::{
    AlphaBeta, Exhaustive, SearchReport, SearchResult, SearchStats, SearchStrategy, Strategy,
};

// Crate-level exports - Driver boundary
pub use engine::{Decision, advance, play_out, select_action, status};
pub use reachable::reachable_boards;
