//! Game-tree search.
//!
//! Two strategies share one contract: given a non-terminal board, return the
//! game-theoretic value and an action achieving it. [`Exhaustive`] walks the
//! whole tree; [`AlphaBeta`] skips subtrees that cannot change the decision.
//! Both keep the first action in row-major order among equally good ones, so
//! they agree on the chosen action as well as the value.

mod alphabeta;
mod minimax;

pub use alphabeta::{AlphaBeta, Window, alphabeta};
pub use minimax::{Exhaustive, minimax};

use crate::error::SearchError;
use crate::invariants;
use crate::position::Position;
use crate::rules::{self, Utility};
use crate::turn::current_player;
use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Which search algorithm to run.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive)]
pub enum Strategy {
    /// Full minimax without pruning.
    #[serde(alias = "minimax")]
    #[strum(to_string = "exhaustive", serialize = "minimax")]
    Exhaustive,
    /// Minimax with alpha-beta pruning.
    #[serde(alias = "alpha-beta")]
    #[strum(to_string = "pruned", serialize = "alpha-beta")]
    Pruned,
}

impl Strategy {
    /// Searches `board` with this strategy.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MalformedBoard`] if the board cannot arise from
    /// legal play, and [`SearchError::NoMoveAvailable`] if it is terminal.
    pub fn best_action(self, board: &Board) -> Result<SearchReport, SearchError> {
        match self {
            Strategy::Exhaustive => Exhaustive.best_action(board),
            Strategy::Pruned => AlphaBeta.best_action(board),
        }
    }
}

/// Value of a board under optimal play, with the move that achieves it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Game-theoretic value of the searched board.
    pub utility: Utility,
    /// Optimal action; absent only when the board was already terminal.
    pub action: Option<Position>,
}

impl SearchResult {
    /// Result for a board with nothing left to play.
    pub fn terminal(utility: Utility) -> Self {
        Self {
            utility,
            action: None,
        }
    }

    /// Starting point for a node: the worst value for `player`, no action yet.
    pub(crate) fn unresolved(player: Player) -> Self {
        let utility = if player.is_maximizer() {
            Utility::OWins
        } else {
            Utility::XWins
        };
        Self {
            utility,
            action: None,
        }
    }

    /// Records `action` if its value strictly improves on the incumbent for
    /// `player`. The first action seen is always recorded.
    pub(crate) fn consider(&mut self, player: Player, action: Position, value: Utility) {
        if self.action.is_none() || improves(player, value, self.utility) {
            self.utility = value;
            self.action = Some(action);
        }
    }
}

/// Strict improvement: greater for the maximizer, less for the minimizer.
pub(crate) fn improves(player: Player, candidate: Utility, incumbent: Utility) -> bool {
    if player.is_maximizer() {
        candidate > incumbent
    } else {
        candidate < incumbent
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Recursive evaluations, terminal leaves included.
    pub nodes: u64,
    /// Sibling loops abandoned because `beta <= alpha`.
    pub cutoffs: u64,
}

impl SearchStats {
    /// Adds another search's counters into this one.
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.cutoffs += other.cutoffs;
    }
}

/// Outcome of a top-level search on a non-terminal board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Strategy that produced this report.
    pub strategy: Strategy,
    /// Player the action was chosen for.
    pub player: Player,
    /// Chosen action.
    pub action: Position,
    /// Value of the board under optimal play.
    pub utility: Utility,
    /// Search counters.
    pub stats: SearchStats,
}

/// A search algorithm over tic-tac-toe boards.
pub trait SearchStrategy {
    /// Identifies the algorithm.
    fn strategy(&self) -> Strategy;

    /// Searches `board` to the end of the game with `to_move` on turn.
    ///
    /// Terminal boards yield their utility and no action.
    fn solve(&self, board: &Board, to_move: Player, stats: &mut SearchStats) -> SearchResult;

    /// Chooses an optimal action for the player to move.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::MalformedBoard`] if the board breaks an
    /// invariant of legal play, and [`SearchError::NoMoveAvailable`] if it is
    /// terminal.
    #[instrument(skip(self, board), fields(strategy = %self.strategy()))]
    fn best_action(&self, board: &Board) -> Result<SearchReport, SearchError> {
        invariants::check_board(board).map_err(SearchError::MalformedBoard)?;
        if rules::is_terminal(board) {
            return Err(SearchError::NoMoveAvailable);
        }

        let player = current_player(board);
        let mut stats = SearchStats::default();
        let result = self.solve(board, player, &mut stats);
        let action = result.action.ok_or(SearchError::NoMoveAvailable)?;

        debug!(
            %player,
            action = %action,
            utility = %result.utility,
            nodes = stats.nodes,
            cutoffs = stats.cutoffs,
            "Search complete"
        );

        Ok(SearchReport {
            strategy: self.strategy(),
            player,
            action,
            utility: result.utility,
            stats,
        })
    }
}
