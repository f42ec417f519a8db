//! Turn resolution: whose move it is, and applying that player's move.

use crate::error::MoveError;
use crate::invariants::{Invariant, TurnAlternationInvariant};
use crate::position::Position;
use crate::types::{Board, Player};

/// Returns the player to move: X when mark counts are equal, O otherwise.
///
/// # Panics
///
/// Panics if the board breaks [`TurnAlternationInvariant`]; no player is on
/// move on such a board. Searches check this up front and report
/// [`crate::SearchError::MalformedBoard`] instead.
pub fn current_player(board: &Board) -> Player {
    assert!(
        TurnAlternationInvariant::holds(board),
        "current_player called on a board with impossible turn order"
    );
    if board.count(Player::X) == board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Places the current player's mark at `pos`.
///
/// # Errors
///
/// Returns [`MoveError::SquareOccupied`] if the square is taken.
pub fn apply(board: &Board, pos: Position) -> Result<Board, MoveError> {
    board.place(pos, current_player(board))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn test_x_moves_first() {
        assert_eq!(current_player(&Board::new()), Player::X);
    }

    #[test]
    fn test_players_alternate() {
        let mut board = Board::new();
        for (ply, pos) in [Position::Center, Position::TopLeft, Position::BottomRight]
            .into_iter()
            .enumerate()
        {
            let expected = if ply % 2 == 0 { Player::X } else { Player::O };
            assert_eq!(current_player(&board), expected);
            board = apply(&board, pos).unwrap();
            assert_eq!(board.get(pos), Square::Occupied(expected));
        }
        assert_eq!(current_player(&board), Player::O);
    }

    #[test]
    fn test_apply_occupied_square_fails() {
        let board = apply(&Board::new(), Position::Center).unwrap();
        assert_eq!(
            apply(&board, Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
    }

    #[test]
    #[should_panic(expected = "impossible turn order")]
    fn test_o_only_board_panics() {
        let board = Board::new()
            .place(Position::Center, Player::O)
            .and_then(|b| b.place(Position::TopLeft, Player::O))
            .unwrap();
        current_player(&board);
    }

    #[test]
    #[should_panic(expected = "impossible turn order")]
    fn test_apply_on_x_heavy_board_panics() {
        let board = Board::new()
            .place(Position::Center, Player::X)
            .and_then(|b| b.place(Position::TopLeft, Player::X))
            .unwrap();
        let _ = apply(&board, Position::BottomRight);
    }
}
