//! Strictly Minimax - Unified CLI

use anyhow::Result;
use clap::Parser;
use strictly_minimax::{Board, GameStatus, Strategy, status};
use strictly_minimax_cli::render::{format_move, format_outcome, format_report};
use strictly_minimax_cli::{Cli, Command, GameEvent, MatchConfig, Orchestrator, verify_all};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            x_strategy,
            o_strategy,
            opening,
        } => {
            let config = match config {
                Some(path) => MatchConfig::from_file(path)?,
                None => MatchConfig::default(),
            };
            run_play(config.with_overrides(x_strategy, o_strategy, opening))
        }
        Command::Solve { board, strategy } => run_solve(board, strategy),
        Command::Verify => run_verify(),
    }
}

/// Plays one game and prints every board.
#[instrument]
fn run_play(config: MatchConfig) -> Result<()> {
    info!("Starting self-play");

    let mut orchestrator = Orchestrator::from_config(&config);
    orchestrator.run(|event| match event {
        GameEvent::Started(board) => println!("Initial board:\n{}\n", board),
        GameEvent::MoveMade(record, board) => {
            println!("{}", format_move(record));
            println!("{}\n", board);
        }
        GameEvent::GameOver(game_status, board) => {
            println!("{}", format_outcome(board, *game_status));
        }
    })?;

    Ok(())
}

/// Prints the best move for the side to play.
#[instrument(skip(board))]
fn run_solve(board: Board, strategy: Option<Strategy>) -> Result<()> {
    println!("{}\n", board);

    let game_status = status(&board);
    if game_status != GameStatus::InProgress {
        println!("{}", format_outcome(&board, game_status));
        return Ok(());
    }

    let strategies = match strategy {
        Some(strategy) => vec![strategy],
        None => vec![Strategy::Exhaustive, Strategy::Pruned],
    };
    for strategy in strategies {
        let report = strategy.best_action(&board)?;
        println!("{}", format_report(&report));
    }

    Ok(())
}

/// Checks both strategies against each other on every reachable board.
#[instrument]
fn run_verify() -> Result<()> {
    let report = verify_all()?;

    println!("Boards searched:   {}", report.boards);
    println!(
        "Exhaustive nodes:  {} (cutoffs {})",
        report.exhaustive.nodes, report.exhaustive.cutoffs
    );
    println!(
        "Pruned nodes:      {} (cutoffs {})",
        report.pruned.nodes, report.pruned.cutoffs
    );
    for mismatch in &report.mismatches {
        println!("Mismatch: {}\n{}\n", mismatch.reason, mismatch.board);
    }

    if !report.passed() {
        anyhow::bail!(
            "{} boards where the strategies disagree",
            report.mismatches.len()
        );
    }
    println!("All boards agree.");
    Ok(())
}
