//! Minimax with alpha-beta pruning.

use super::{SearchResult, SearchStats, SearchStrategy, Strategy};
use crate::rules::{self, Utility};
use crate::types::{Board, Player};

/// Search bounds carried down the tree.
///
/// `alpha` is the value X can already guarantee, `beta` the value O can
/// already guarantee. Once `beta <= alpha` the remaining siblings cannot
/// affect the choice made higher up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    /// Lower bound, raised by the maximizer.
    pub alpha: i8,
    /// Upper bound, lowered by the minimizer.
    pub beta: i8,
}

impl Window {
    /// `(-inf, +inf)`: nothing is known yet.
    pub const FULL: Window = Window {
        alpha: i8::MIN,
        beta: i8::MAX,
    };

    /// Raises alpha (X) or lowers beta (O) to the node's best value so far.
    pub fn tighten(&mut self, player: Player, value: Utility) {
        if player.is_maximizer() {
            self.alpha = self.alpha.max(value.score());
        } else {
            self.beta = self.beta.min(value.score());
        }
    }

    /// True once the remaining siblings are provably irrelevant.
    pub fn is_closed(&self) -> bool {
        self.beta <= self.alpha
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::FULL
    }
}

/// Minimax with alpha-beta cutoffs.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaBeta;

impl SearchStrategy for AlphaBeta {
    fn strategy(&self) -> Strategy {
        Strategy::Pruned
    }

    fn solve(&self, board: &Board, to_move: Player, stats: &mut SearchStats) -> SearchResult {
        alphabeta(board, to_move, Window::FULL, stats)
    }
}

/// Evaluates `board` within `window`, stopping a sibling loop at the first
/// cutoff. Tie-breaking is identical to [`super::minimax`].
pub fn alphabeta(
    board: &Board,
    to_move: Player,
    mut window: Window,
    stats: &mut SearchStats,
) -> SearchResult {
    stats.nodes += 1;
    if let Some(utility) = rules::evaluate(board) {
        return SearchResult::terminal(utility);
    }

    let mut best = SearchResult::unresolved(to_move);
    for action in board.empty_positions() {
        let child = alphabeta(
            &board.marked(action, to_move),
            to_move.opponent(),
            window,
            stats,
        );
        best.consider(to_move, action, child.utility);

        window.tighten(to_move, best.utility);
        if window.is_closed() {
            stats.cutoffs += 1;
            break;
        }
    }
    best
}
