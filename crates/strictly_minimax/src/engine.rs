//! The boundary a game driver talks to.
//!
//! A driver holds the current board, asks [`select_action`] for a move with
//! the strategy of its choice, plays it with [`advance`], and stops once
//! [`status`] reports the game is over.

use crate::error::{MoveError, PlayError, SearchError};
use crate::invariants;
use crate::position::Position;
use crate::rules;
use crate::search::Strategy;
use crate::turn;
use crate::types::{Board, GameStatus, Player};
use tracing::{debug, instrument};

/// What the engine wants to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Play this position.
    Play(Position),
    /// The game is over; nothing to play.
    EndOfGame(GameStatus),
}

/// Picks an optimal action for the player to move using `strategy`.
///
/// # Errors
///
/// Returns [`SearchError::MalformedBoard`] if the board cannot arise from
/// legal play. A finished game is not an error: it yields
/// [`Decision::EndOfGame`].
#[instrument(skip(board), fields(marks = board.marks_placed()))]
pub fn select_action(board: &Board, strategy: Strategy) -> Result<Decision, SearchError> {
    match strategy.best_action(board) {
        Ok(report) => Ok(Decision::Play(report.action)),
        Err(SearchError::NoMoveAvailable) => Ok(Decision::EndOfGame(status(board))),
        Err(err) => Err(err),
    }
}

/// Plays the current player's mark at `pos`.
///
/// # Errors
///
/// Returns [`MoveError::SquareOccupied`] if the square is taken.
pub fn advance(board: &Board, pos: Position) -> Result<Board, MoveError> {
    turn::apply(board, pos)
}

/// Whether the game on `board` is still going, won, or drawn.
pub fn status(board: &Board) -> GameStatus {
    rules::status(board)
}

/// Plays `board` to the end, X searching with `x` and O with `o`.
///
/// # Errors
///
/// Returns [`PlayError::Search`] if `board` is malformed, and
/// [`PlayError::Move`] only if a search hands back an occupied square.
#[instrument(skip(board))]
pub fn play_out(board: &Board, x: Strategy, o: Strategy) -> Result<Board, PlayError> {
    let mut board = *board;
    // current_player asserts the turn invariant, so validate before asking it.
    invariants::check_board(&board).map_err(SearchError::MalformedBoard)?;
    loop {
        let strategy = match turn::current_player(&board) {
            Player::X => x,
            Player::O => o,
        };
        match select_action(&board, strategy)? {
            Decision::Play(pos) => {
                board = advance(&board, pos)?;
                debug!(position = %pos, %strategy, "Played");
            }
            Decision::EndOfGame(status) => {
                debug!(%status, "Game over");
                return Ok(board);
            }
        }
    }
}
