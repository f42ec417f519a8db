//! Enumeration of every board reachable by legal play.

use crate::rules;
use crate::turn::current_player;
use crate::types::Board;
use std::collections::HashSet;
use tracing::{debug, instrument};

/// Every distinct board reachable from the empty board, terminal ones
/// included, in depth-first discovery order.
#[instrument]
pub fn reachable_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut boards = Vec::new();
    let mut stack = vec![Board::new()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        boards.push(board);
        if rules::is_terminal(&board) {
            continue;
        }
        let player = current_player(&board);
        // Reverse so the first empty square is explored first.
        let children: Vec<Board> = board
            .empty_positions()
            .map(|pos| board.marked(pos, player))
            .collect();
        stack.extend(children.into_iter().rev());
    }

    debug!(count = boards.len(), "Enumerated reachable boards");
    boards
}
