//! Error types for the game model and search.
//!
//! Every error here is a caller mistake rather than a transient failure, so
//! nothing in the crate retries on them.

use crate::invariants::InvariantViolation;
use crate::position::Position;

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),
}

impl std::error::Error for MoveError {}

/// Error returned when a search is asked to choose a move it cannot make.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board is terminal; there is no move to choose.
    #[display("No move available: the game is already over")]
    NoMoveAvailable,

    /// The board cannot arise from legal play.
    #[display("Malformed board: {}", describe(_0))]
    MalformedBoard(Vec<InvariantViolation>),
}

impl std::error::Error for SearchError {}

fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error while playing a game to the end.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum PlayError {
    /// A search could not choose a move.
    #[display("{}", _0)]
    Search(SearchError),

    /// A chosen move could not be applied.
    #[display("{}", _0)]
    Move(MoveError),
}

impl std::error::Error for PlayError {}

/// Error raised when a rule is queried outside its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum RuleError {
    /// Utility was requested for a board that is still in progress.
    #[display("Utility is only defined for terminal boards")]
    NotTerminal,
}

impl std::error::Error for RuleError {}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// The text did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(usize),

    /// A character that is neither a mark nor an empty-square symbol.
    #[display("Invalid square symbol {:?}", _0)]
    InvalidSymbol(char),

    /// Mark counts that cannot arise from alternating play starting with X.
    #[display("Impossible turn order: {} X marks vs {} O marks", x_count, o_count)]
    TurnOrder {
        /// Number of X marks.
        x_count: usize,
        /// Number of O marks.
        o_count: usize,
    },
}

impl std::error::Error for BoardParseError {}

/// Error parsing a position from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Unknown position {:?} (use a label, an index 0-8 or row,col)", _0)]
pub struct PositionParseError(pub String);

impl std::error::Error for PositionParseError {}
