//! Player trait and implementations.

use anyhow::Result;
use std::collections::VecDeque;
use strictly_minimax::{Board, Position, SearchReport, Strategy};
use tracing::debug;

/// A move chosen by a player, with the search report when one was run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    /// Position to play.
    pub position: Position,
    /// Search that produced the position, if any.
    pub report: Option<SearchReport>,
}

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player for a board that is still in progress.
    fn choose(&mut self, board: &Board) -> Result<Choice>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}

/// Player that searches every move with a fixed strategy.
#[derive(Debug, Clone)]
pub struct SearchPlayer {
    strategy: Strategy,
    name: String,
}

impl SearchPlayer {
    /// Creates a search player.
    pub fn new(strategy: Strategy) -> Self {
        let name = match strategy {
            Strategy::Exhaustive => "Minimax".to_string(),
            Strategy::Pruned => "Alpha-Beta".to_string(),
        };
        Self { strategy, name }
    }

    /// Strategy this player searches with.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }
}

impl Player for SearchPlayer {
    fn choose(&mut self, board: &Board) -> Result<Choice> {
        let report = self.strategy.best_action(board)?;
        debug!(
            player = %self.name,
            position = %report.action,
            nodes = report.stats.nodes,
            "Search chose move"
        );
        Ok(Choice {
            position: report.action,
            report: Some(report),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Player that plays a fixed script of moves, then hands over to search.
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    script: VecDeque<Position>,
    fallback: SearchPlayer,
}

impl ScriptedPlayer {
    /// Plays `script` in order, then searches with `fallback`.
    pub fn new(script: impl IntoIterator<Item = Position>, fallback: Strategy) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback: SearchPlayer::new(fallback),
        }
    }
}

impl Player for ScriptedPlayer {
    fn choose(&mut self, board: &Board) -> Result<Choice> {
        match self.script.pop_front() {
            Some(position) if board.is_empty(position) => {
                debug!(position = %position, "Playing scripted move");
                Ok(Choice {
                    position,
                    report: None,
                })
            }
            Some(position) => anyhow::bail!("Scripted move {} is already occupied", position),
            None => self.fallback.choose(board),
        }
    }

    fn name(&self) -> &str {
        self.fallback.name()
    }
}
