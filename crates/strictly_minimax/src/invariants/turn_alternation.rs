//! Turn alternation invariant: X moves first, then players alternate.

use super::Invariant;
use crate::types::{Board, Player};
use tracing::warn;

/// Invariant: X has as many marks as O, or exactly one more.
pub struct TurnAlternationInvariant;

impl Invariant<Board> for TurnAlternationInvariant {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = x_count == o_count || x_count == o_count + 1;
        if !valid {
            warn!(x_count, o_count, "Turn alternation violated");
        }
        valid
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X (X count - O count is 0 or 1)"
    }
}
