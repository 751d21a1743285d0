//! Strictly Tic-Tac-Toe - terminal shell
//!
//! Plays N×N tic-tac-toe on stdin/stdout with full history and time travel.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod shell;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use strictly_tictactoe::Timeline;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so the board on stdout stays readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let mut timeline = Timeline::with_order(*config.side(), *config.order())
        .with_context(|| format!("Cannot start a game with side {}", config.side()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            info!(side = timeline.side(), "Starting interactive game");
            shell::run(&mut timeline, std::io::stdin().lock(), &mut out)
        }
        Command::Replay { moves, jump } => {
            info!(side = timeline.side(), moves = moves.len(), "Replaying moves");
            shell::replay(&mut timeline, &moves, jump, &mut out)
        }
    }
}

/// Reads the config file, if any, and applies command-line overrides.
#[instrument(skip(cli))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    Ok(config.with_overrides(cli.side, cli.descending))
}
