//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board: winner detection, terminal checks
//! and the utility of finished games. Rules are kept apart from board storage
//! so the search can call them on every node without touching any state.

pub mod draw;
pub mod utility;
pub mod win;

pub use draw::{is_draw, is_full};
pub use utility::Utility;
pub use win::{LINES, check_winner, winning_line};

use crate::error::RuleError;
use crate::types::{Board, GameStatus, Player};

/// Returns the winner, if any line is complete.
pub fn winner(board: &Board) -> Option<Player> {
    check_winner(board)
}

/// A board is terminal once someone has won or no empty square remains.
pub fn is_terminal(board: &Board) -> bool {
    evaluate(board).is_some()
}

/// Utility of the board if it is terminal, `None` while play continues.
pub fn evaluate(board: &Board) -> Option<Utility> {
    match check_winner(board) {
        Some(Player::X) => Some(Utility::XWins),
        Some(Player::O) => Some(Utility::OWins),
        None if is_full(board) => Some(Utility::Draw),
        None => None,
    }
}

/// Utility of a terminal board: +1 if X won, -1 if O won, 0 for a draw.
///
/// # Errors
///
/// Returns [`RuleError::NotTerminal`] if the game is still in progress.
pub fn utility(board: &Board) -> Result<Utility, RuleError> {
    evaluate(board).ok_or(RuleError::NotTerminal)
}

/// Status of the game on this board.
pub fn status(board: &Board) -> GameStatus {
    match check_winner(board) {
        Some(player) => GameStatus::Won(player),
        None if is_full(board) => GameStatus::Draw,
        None => GameStatus::InProgress,
    }
}
