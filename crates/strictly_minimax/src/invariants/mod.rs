//! First-class invariants for boards reached by legal play.
//!
//! None of these are enforced by [`Board`] itself. [`check_board`] guards
//! every search entry point, and the turn resolver asserts turn alternation,
//! so a malformed board fails loudly instead of producing a plausible but
//! wrong search result.

mod single_winner;
mod turn_alternation;

pub use single_winner::SingleWinnerInvariant;
pub use turn_alternation::TurnAlternationInvariant;

use crate::types::Board;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Every invariant a reachable board satisfies.
pub type BoardInvariants = (TurnAlternationInvariant, SingleWinnerInvariant);

/// Checks a board against [`BoardInvariants`].
pub fn check_board(board: &Board) -> Result<(), Vec<InvariantViolation>> {
    BoardInvariants::check_all(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;
    use crate::types::Player;

    #[test]
    fn test_empty_board_satisfies_all() {
        assert_eq!(check_board(&Board::new()), Ok(()));
    }

    #[test]
    fn test_violations_are_collected() {
        // Three O marks, no X: wrong turn order, but only one winner.
        let board = [Position::TopLeft, Position::TopCenter, Position::TopRight]
            .into_iter()
            .fold(Board::new(), |b, pos| b.marked(pos, Player::O));

        let violations = check_board(&board).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].description,
            TurnAlternationInvariant::description()
        );
    }
}
