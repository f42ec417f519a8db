//! Game orchestration between players.

use crate::config::MatchConfig;
use crate::players::{Player, ScriptedPlayer, SearchPlayer};
use anyhow::Result;
use std::time::{Duration, Instant};
use strictly_minimax::{Board, GameStatus, Position, SearchReport, advance, current_player, status};
use tracing::{debug, info, instrument};

/// One ply of a finished or ongoing game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Side that moved.
    pub player: strictly_minimax::Player,
    /// Display name of the player that moved.
    pub name: String,
    /// Square played.
    pub position: Position,
    /// Time spent choosing the move.
    pub elapsed: Duration,
    /// Search report, absent for scripted moves.
    pub report: Option<SearchReport>,
}

/// Messages sent from orchestrator to the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Game started on this board.
    Started(Board),
    /// Move was made, producing the board.
    MoveMade(MoveRecord, Board),
    /// Game ended on the board.
    GameOver(GameStatus, Board),
}

/// Final state of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSummary {
    /// Board when the game ended.
    pub board: Board,
    /// How the game ended.
    pub status: GameStatus,
    /// Every move in order.
    pub moves: Vec<MoveRecord>,
}

/// Orchestrates gameplay between two players.
pub struct Orchestrator {
    board: Board,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates an orchestrator starting from the empty board.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            board: Board::new(),
            player_x,
            player_o,
        }
    }

    /// Builds both players from a match config.
    pub fn from_config(config: &MatchConfig) -> Self {
        let player_x: Box<dyn Player> = match config.opening() {
            Some(opening) => Box::new(ScriptedPlayer::new([*opening], *config.x_strategy())),
            None => Box::new(SearchPlayer::new(*config.x_strategy())),
        };
        let player_o = Box::new(SearchPlayer::new(*config.o_strategy()));
        Self::new(player_x, player_o)
    }

    /// Current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs the game loop to completion, reporting each step to `on_event`.
    #[instrument(skip_all)]
    pub fn run(&mut self, mut on_event: impl FnMut(&GameEvent)) -> Result<MatchSummary> {
        info!("Starting game orchestration");
        on_event(&GameEvent::Started(self.board));

        let mut moves = Vec::new();
        loop {
            let game_status = status(&self.board);
            if game_status.is_over() {
                info!(status = %game_status, "Game over");
                on_event(&GameEvent::GameOver(game_status, self.board));
                return Ok(MatchSummary {
                    board: self.board,
                    status: game_status,
                    moves,
                });
            }

            let side = current_player(&self.board);
            let player = match side {
                strictly_minimax::Player::X => &mut self.player_x,
                strictly_minimax::Player::O => &mut self.player_o,
            };

            debug!(player = %player.name(), %side, "Waiting for move");
            let start = Instant::now();
            let choice = player.choose(&self.board)?;
            let elapsed = start.elapsed();

            self.board = advance(&self.board, choice.position)?;

            let record = MoveRecord {
                player: side,
                name: player.name().to_string(),
                position: choice.position,
                elapsed,
                report: choice.report,
            };
            on_event(&GameEvent::MoveMade(record.clone(), self.board));
            moves.push(record);
        }
    }
}
