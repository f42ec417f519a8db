//! Cross-checks the two search strategies over the whole state space.

use anyhow::Result;
use strictly_minimax::{Board, SearchStats, Strategy, is_terminal, reachable_boards};
use tracing::{info, instrument, warn};

/// A board on which the strategies disagreed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// The board searched.
    pub board: Board,
    /// What went wrong.
    pub reason: String,
}

/// Totals from a verification run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VerifyReport {
    /// Non-terminal boards searched.
    pub boards: usize,
    /// Combined exhaustive-search counters.
    pub exhaustive: SearchStats,
    /// Combined pruned-search counters.
    pub pruned: SearchStats,
    /// Boards where the strategies disagreed or pruning cost more.
    pub mismatches: Vec<Mismatch>,
}

impl VerifyReport {
    /// True when no mismatch was found.
    pub fn passed(&self) -> bool {
        self.mismatches.is_empty()
    }
}

/// Runs both strategies on every reachable non-terminal board.
#[instrument]
pub fn verify_all() -> Result<VerifyReport> {
    let mut report = VerifyReport::default();

    for board in reachable_boards().into_iter().filter(|b| !is_terminal(b)) {
        let full = Strategy::Exhaustive.best_action(&board)?;
        let pruned = Strategy::Pruned.best_action(&board)?;

        let reason = if full.utility != pruned.utility {
            Some(format!("value {} vs {}", full.utility, pruned.utility))
        } else if full.action != pruned.action {
            Some(format!("action {} vs {}", full.action, pruned.action))
        } else if pruned.stats.nodes > full.stats.nodes {
            Some(format!(
                "pruned visited {} nodes vs {}",
                pruned.stats.nodes, full.stats.nodes
            ))
        } else {
            None
        };

        if let Some(reason) = reason {
            warn!(%reason, "Strategies disagree");
            report.mismatches.push(Mismatch { board, reason });
        }

        report.exhaustive.merge(&full.stats);
        report.pruned.merge(&pruned.stats);
        report.boards += 1;
    }

    info!(
        boards = report.boards,
        exhaustive_nodes = report.exhaustive.nodes,
        pruned_nodes = report.pruned.nodes,
        mismatches = report.mismatches.len(),
        "Verification finished"
    );
    Ok(report)
}
