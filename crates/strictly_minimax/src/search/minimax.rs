//! Exhaustive minimax.

use super::{SearchResult, SearchStats, SearchStrategy, Strategy};
use crate::rules;
use crate::types::{Board, Player};

/// Full-depth minimax with no pruning.
#[derive(Debug, Clone, Copy, Default)]
pub struct Exhaustive;

impl SearchStrategy for Exhaustive {
    fn strategy(&self) -> Strategy {
        Strategy::Exhaustive
    }

    fn solve(&self, board: &Board, to_move: Player, stats: &mut SearchStats) -> SearchResult {
        minimax(board, to_move, stats)
    }
}

/// Evaluates every continuation of `board`.
///
/// X keeps the first action with a strictly greater child value, O the first
/// with a strictly smaller one.
pub fn minimax(board: &Board, to_move: Player, stats: &mut SearchStats) -> SearchResult {
    stats.nodes += 1;
    if let Some(utility) = rules::evaluate(board) {
        return SearchResult::terminal(utility);
    }

    let mut best = SearchResult::unresolved(to_move);
    for action in board.empty_positions() {
        let child = minimax(&board.marked(action, to_move), to_move.opponent(), stats);
        best.consider(to_move, action, child.utility);
    }
    best
}
