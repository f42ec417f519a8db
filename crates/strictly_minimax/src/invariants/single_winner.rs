//! Single winner invariant: the game stops at the first completed line.

use super::Invariant;
use crate::rules::LINES;
use crate::types::{Board, Player, Square};

/// Invariant: at most one player owns a completed line.
pub struct SingleWinnerInvariant;

impl SingleWinnerInvariant {
    fn owns_line(board: &Board, player: Player) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&pos| board.get(pos) == Square::Occupied(player)))
    }
}

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        !(Self::owns_line(board, Player::X) && Self::owns_line(board, Player::O))
    }

    fn description() -> &'static str {
        "At most one player has three in a row"
    }
}
