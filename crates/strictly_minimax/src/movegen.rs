//! Legal move generation.

use crate::position::Position;
use crate::types::Board;

/// All empty positions on the board, in row-major order.
///
/// The order is fixed so that searches break ties the same way every time.
pub fn legal_actions(board: &Board) -> Vec<Position> {
    board.empty_positions().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, Square};

    #[test]
    fn test_empty_board_offers_every_square() {
        assert_eq!(legal_actions(&Board::new()), Position::ALL.to_vec());
    }

    #[test]
    fn test_occupied_squares_are_filtered() {
        let board: Board = "X../.O./...".parse().unwrap();
        let actions = legal_actions(&board);

        assert_eq!(actions.len(), 7);
        assert!(!actions.contains(&Position::TopLeft));
        assert!(!actions.contains(&Position::Center));
        assert!(actions.iter().all(|&pos| board.get(pos) == Square::Empty));
        assert!(actions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_size_is_nine_minus_marks() {
        let mut board = Board::new();
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            assert_eq!(legal_actions(&board).len(), 9 - i);
            let player = if i % 2 == 0 { Player::X } else { Player::O };
            board = board.place(pos, player).unwrap();
        }
        assert!(legal_actions(&board).is_empty());
    }
}
