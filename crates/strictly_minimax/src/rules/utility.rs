//! Game-theoretic value of finished games.

use serde::{Deserialize, Serialize};

/// Value of a terminal board from X's point of view.
///
/// Variants are declared from worst to best for X, so the derived ordering
/// matches the numeric score: `OWins < Draw < XWins`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(i8)]
pub enum Utility {
    /// O (the minimizer) won.
    OWins = -1,
    /// Board full with no winner.
    Draw = 0,
    /// X (the maximizer) won.
    XWins = 1,
}

impl Utility {
    /// Numeric score: -1, 0 or +1.
    pub fn score(self) -> i8 {
        self as i8
    }

    /// Converts a numeric score back into a utility.
    pub fn from_score(score: i8) -> Option<Self> {
        match score {
            -1 => Some(Utility::OWins),
            0 => Some(Utility::Draw),
            1 => Some(Utility::XWins),
            _ => None,
        }
    }
}

impl std::fmt::Display for Utility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Utility::Draw => write!(f, "0"),
            other => write!(f, "{:+}", other.score()),
        }
    }
}
