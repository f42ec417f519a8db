//! Plain-text rendering of games for the console.

use crate::orchestrator::MoveRecord;
use strictly_minimax::rules::winning_line;
use strictly_minimax::{Board, GameStatus, SearchReport};

/// One line describing a move, its timing and its search cost.
pub fn format_move(record: &MoveRecord) -> String {
    let mut line = format!(
        "Player {} ({}) chooses: {} (Time: {:.4}s",
        record.player,
        record.name,
        record.position,
        record.elapsed.as_secs_f64()
    );
    match &record.report {
        Some(report) => line.push_str(&format!(", nodes: {})", report.stats.nodes)),
        None => line.push_str(", scripted)"),
    }
    line
}

/// Search summary for the solve command.
pub fn format_report(report: &SearchReport) -> String {
    format!(
        "{:<10} {} to move plays {} (value {}, nodes {}, cutoffs {})",
        report.strategy.to_string(),
        report.player,
        report.action,
        report.utility,
        report.stats.nodes,
        report.stats.cutoffs
    )
}

/// Closing lines once the game is over.
pub fn format_outcome(board: &Board, status: GameStatus) -> String {
    match (status, winning_line(board)) {
        (GameStatus::Won(player), Some((_, line))) => {
            let squares: Vec<_> = line.iter().map(|pos| pos.label()).collect();
            format!("Game Over.\nWinner: {} ({})", player, squares.join(", "))
        }
        (GameStatus::Won(player), None) => format!("Game Over.\nWinner: {}", player),
        (GameStatus::Draw, _) => "Game Over.\nIt's a draw!".to_string(),
        (GameStatus::InProgress, _) => "Game in progress.".to_string(),
    }
}
