//! Command-line interface for strictly_tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Tic-Tac-Toe - N×N tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_tictactoe")]
#[command(about = "Play tic-tac-toe on any square board, then jump back through history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Board side length (overrides the config file)
    #[arg(short, long)]
    pub side: Option<usize>,

    /// Path to a TOML game config
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List history newest first (overrides the config file)
    #[arg(long)]
    pub descending: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively on stdin/stdout
    Play,

    /// Apply moves non-interactively and print the final position
    Replay {
        /// Board indices to play, in order
        moves: Vec<usize>,

        /// Step to jump to after the moves are applied
        #[arg(long)]
        jump: Option<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::parse_from(["strictly_tictactoe"]);
        assert_eq!(cli.side, None);
        assert!(!cli.descending);
        assert_eq!(cli.command, None);
    }

    #[test]
    fn test_replay_with_jump() {
        let cli = Cli::parse_from([
            "strictly_tictactoe",
            "--side",
            "4",
            "replay",
            "0",
            "5",
            "--jump",
            "1",
        ]);
        assert_eq!(cli.side, Some(4));
        assert_eq!(
            cli.command,
            Some(Command::Replay {
                moves: vec![0, 5],
                jump: Some(1),
            })
        );
    }
}
