//! Core domain types for tic-tac-toe.

use crate::error::{BoardParseError, MoveError};
use crate::position::Position;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first, maximizes utility).
    X,
    /// Player O (goes second, minimizes utility).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns true for the player whose objective is to maximize utility.
    pub fn is_maximizer(self) -> bool {
        matches!(self, Player::X)
    }

    /// Single-character symbol used when rendering and parsing boards.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// 3x3 tic-tac-toe board.
///
/// Boards are plain values: every transformation returns a new board and
/// leaves the original untouched, so recursive search can hand a child board
/// to each branch without any aliasing between siblings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of marks the player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|&&s| s == Square::Occupied(player))
            .count()
    }

    /// Number of occupied squares.
    pub fn marks_placed(&self) -> usize {
        self.squares.iter().filter(|&&s| s != Square::Empty).count()
    }

    /// Checks if the board is full (all squares occupied).
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|&s| s != Square::Empty)
    }

    /// Empty positions in row-major order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |&pos| self.is_empty(pos))
    }

    /// Returns a new board with `player`'s mark at `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::SquareOccupied`] if the square already holds a mark.
    pub fn place(&self, pos: Position, player: Player) -> Result<Board, MoveError> {
        if !self.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }
        Ok(self.marked(pos, player))
    }

    /// Copy of this board with the square set, no occupancy check.
    ///
    /// Callers must only pass positions from [`Board::empty_positions`].
    pub(crate) fn marked(&self, pos: Position, player: Player) -> Board {
        let mut next = *self;
        next.squares[pos.to_index()] = Square::Occupied(player);
        next
    }

    /// Builds a board from raw squares, checking the turn invariant.
    pub fn from_squares(squares: [Square; 9]) -> Result<Self, BoardParseError> {
        let board = Self { squares };
        let (x_count, o_count) = (board.count(Player::X), board.count(Player::O));
        if x_count != o_count && x_count != o_count + 1 {
            return Err(BoardParseError::TurnOrder { x_count, o_count });
        }
        Ok(board)
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "Player {} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Parses boards written as three rows, e.g. `"XX./OO./..."`.
///
/// Rows may be separated by `/`, `|` or newlines, which are skipped wherever
/// they appear. `.`, `_`, `-` and spaces mark empty squares, including at the
/// start or end of the text; `X` and `O` are case-insensitive.
impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = [Square::Empty; 9];
        let mut filled = 0;
        for c in s.chars() {
            let square = match c {
                '/' | '\n' | '\r' | '|' => continue,
                '.' | '_' | '-' | ' ' => Square::Empty,
                'x' | 'X' => Square::Occupied(Player::X),
                'o' | 'O' => Square::Occupied(Player::O),
                other => return Err(BoardParseError::InvalidSymbol(other)),
            };
            if filled == 9 {
                return Err(BoardParseError::WrongLength(filled + 1));
            }
            squares[filled] = square;
            filled += 1;
        }
        if filled != 9 {
            return Err(BoardParseError::WrongLength(filled));
        }
        Self::from_squares(squares)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.squares().iter().all(|&s| s == Square::Empty));
        assert_eq!(board.marks_placed(), 0);
    }

    #[test]
    fn test_place_leaves_original_untouched() {
        let board = Board::new();
        let next = board.place(Position::Center, Player::X).unwrap();

        assert_eq!(board, Board::new());
        assert_eq!(next.get(Position::Center), Square::Occupied(Player::X));
        for pos in Position::ALL {
            if pos != Position::Center {
                assert_eq!(next.get(pos), board.get(pos));
            }
        }
    }

    #[test]
    fn test_place_on_occupied_square_fails() {
        let board = Board::new().place(Position::TopLeft, Player::X).unwrap();
        assert_eq!(
            board.place(Position::TopLeft, Player::O),
            Err(MoveError::SquareOccupied(Position::TopLeft))
        );
    }

    #[test]
    fn test_siblings_do_not_alias() {
        let parent = "X../.O./...".parse::<Board>().unwrap();
        let left = parent.place(Position::TopRight, Player::X).unwrap();
        let right = parent.place(Position::BottomLeft, Player::X).unwrap();

        assert!(left.is_empty(Position::BottomLeft));
        assert!(right.is_empty(Position::TopRight));
        assert_eq!(parent.marks_placed(), 2);
    }

    #[test]
    fn test_parse_board() {
        let board: Board = "XX_\nOO_\n___".parse().unwrap();
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 2);
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::O));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XX./OO./..".parse::<Board>(),
            Err(BoardParseError::WrongLength(8))
        );
        assert_eq!(
            "XX./OO./...X".parse::<Board>(),
            Err(BoardParseError::WrongLength(10))
        );
        assert_eq!(
            "XQ./OO./...".parse::<Board>(),
            Err(BoardParseError::InvalidSymbol('Q'))
        );
        assert_eq!(
            "XXX/.../...".parse::<Board>(),
            Err(BoardParseError::TurnOrder {
                x_count: 3,
                o_count: 0
            })
        );
        assert!(matches!(
            "O../.../...".parse::<Board>(),
            Err(BoardParseError::TurnOrder { .. })
        ));
    }

    #[test]
    fn test_parse_spaces_at_either_end_are_squares() {
        let board: Board = "X  /   /   ".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(board.marks_placed(), 1);

        let board: Board = "   / X /   ".parse().unwrap();
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
        assert_eq!(board.marks_placed(), 1);

        let board: Board = "XO /   /   ".parse().unwrap();
        assert_eq!(board.get(Position::TopCenter), Square::Occupied(Player::O));
        assert!(board.is_empty(Position::BottomRight));
    }

    #[test]
    fn test_parse_skips_trailing_newline() {
        let board: Board = "XX.\nOO.\n...\n".parse().unwrap();
        assert_eq!(board.marks_placed(), 4);
    }

    #[test]
    fn test_display_numbers_empty_squares() {
        let board = Board::new().place(Position::Center, Player::X).unwrap();
        assert_eq!(board.to_string(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }
}
