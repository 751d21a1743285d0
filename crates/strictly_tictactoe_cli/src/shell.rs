//! Line-oriented game shell.
//!
//! The shell is a thin consumer of the timeline: it turns text commands
//! into timeline commands and re-renders the view after each one.

use anyhow::Result;
use derive_more::{Display, Error};
use std::io::{BufRead, Write};
use std::str::FromStr;
use strictly_tictactoe::{CurrentView, MoveOutcome, Square, Timeline, TimelineEntry};
use tracing::{debug, instrument, warn};

const HELP: &str = "\
Commands:
  move <i>   (m)  play square i
  jump <n>   (j)  go to step n
  toggle     (t)  reverse the move list
  help       (h)  show this text
  quit       (q)  leave";

/// Command keywords accepted by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display)]
#[strum(ascii_case_insensitive)]
enum Verb {
    #[strum(to_string = "move", serialize = "m")]
    Move,
    #[strum(to_string = "jump", serialize = "j")]
    Jump,
    #[strum(to_string = "toggle", serialize = "t")]
    Toggle,
    #[strum(to_string = "help", serialize = "h", serialize = "?")]
    Help,
    #[strum(to_string = "quit", serialize = "q", serialize = "exit")]
    Quit,
}

/// A parsed shell command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand {
    /// Play a square.
    Move(usize),
    /// Jump to a history step.
    Jump(usize),
    /// Reverse the move list.
    Toggle,
    /// Print usage.
    Help,
    /// Leave the shell.
    Quit,
}

/// A line the shell could not understand.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{}", message)]
pub struct ParseError {
    /// What was wrong with the line.
    pub message: String,
}

impl ParseError {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl FromStr for ShellCommand {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let word = words.next().ok_or_else(|| ParseError::new("Empty command"))?;
        let verb = Verb::from_str(word)
            .map_err(|_| ParseError::new(format!("Unknown command '{}' (try 'help')", word)))?;

        let mut number = || -> Result<usize, ParseError> {
            let arg = words
                .next()
                .ok_or_else(|| ParseError::new(format!("'{}' needs a number", verb)))?;
            arg.parse()
                .map_err(|_| ParseError::new(format!("'{}' is not a number", arg)))
        };

        Ok(match verb {
            Verb::Move => ShellCommand::Move(number()?),
            Verb::Jump => ShellCommand::Jump(number()?),
            Verb::Toggle => ShellCommand::Toggle,
            Verb::Help => ShellCommand::Help,
            Verb::Quit => ShellCommand::Quit,
        })
    }
}

/// Renders the board, wrapping winning squares in brackets.
pub fn render_board(view: &CurrentView) -> String {
    let board = view.board();
    let winning = view.winning_cells();
    if winning.is_empty() {
        return board.display();
    }

    let width = (board.len() - 1).to_string().len().max(1);
    board
        .squares()
        .chunks(board.side())
        .enumerate()
        .map(|(row, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(col, square)| {
                    let index = row * board.side() + col;
                    let text = match square {
                        Square::Empty => index.to_string(),
                        Square::Occupied(player) => player.to_string(),
                    };
                    if winning.contains(&index) {
                        format!("[{:>width$}]", text)
                    } else {
                        format!(" {:>width$} ", text)
                    }
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders the move list, marking the current entry.
pub fn render_entries(entries: &[TimelineEntry]) -> String {
    entries
        .iter()
        .map(|entry| {
            let marker = if *entry.is_current() { '>' } else { ' ' };
            let annotation = entry.annotation();
            if annotation.is_empty() {
                format!("{} {}. {}", marker, entry.step(), entry.label())
            } else {
                format!("{} {}. {} {}", marker, entry.step(), entry.label(), annotation)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders everything the player sees after a command.
pub fn render(timeline: &Timeline) -> Result<String> {
    let view = timeline.current_view();
    let entries = timeline.render_timeline()?;
    Ok(format!(
        "{}\n\n{}  [{}: t]\n{}\n",
        render_board(&view),
        view.status(),
        timeline.order().toggle_label(),
        render_entries(&entries)
    ))
}

/// Applies one command, writing any feedback to `out`.
///
/// Returns false when the shell should stop.
#[instrument(skip(timeline, out))]
pub fn execute(timeline: &mut Timeline, command: ShellCommand, out: &mut impl Write) -> Result<bool> {
    match command {
        ShellCommand::Move(index) => match timeline.apply_move(index) {
            Ok(MoveOutcome::Applied(mov)) => debug!(%mov, "Shell move applied"),
            Ok(MoveOutcome::Ignored(rejection)) => writeln!(out, "Ignored: {}", rejection)?,
            Err(e) => {
                warn!(error = %e, "Move rejected");
                writeln!(out, "Error: {}", e.kind())?;
            }
        },
        ShellCommand::Jump(step) => {
            if let Err(e) = timeline.jump_to(step) {
                warn!(error = %e, "Jump rejected");
                writeln!(out, "Error: {}", e.kind())?;
            }
        }
        ShellCommand::Toggle => timeline.toggle_order(),
        ShellCommand::Help => writeln!(out, "{}", HELP)?,
        ShellCommand::Quit => return Ok(false),
    }
    Ok(true)
}

/// Runs the interactive loop until `quit` or end of input.
#[instrument(skip_all, fields(side = timeline.side()))]
pub fn run(timeline: &mut Timeline, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    write!(out, "{}", render(timeline)?)?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(out, "> ")?;
            out.flush()?;
            continue;
        }

        match line.parse::<ShellCommand>() {
            Ok(command) => {
                if !execute(timeline, command, out)? {
                    break;
                }
                if command != ShellCommand::Help {
                    write!(out, "{}", render(timeline)?)?;
                }
            }
            Err(e) => writeln!(out, "{}", e)?,
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    Ok(())
}

/// Plays `moves` in order, optionally jumps, and prints the result.
#[instrument(skip(timeline, out))]
pub fn replay(
    timeline: &mut Timeline,
    moves: &[usize],
    jump: Option<usize>,
    out: &mut impl Write,
) -> Result<()> {
    for &index in moves {
        execute(timeline, ShellCommand::Move(index), out)?;
    }
    if let Some(step) = jump {
        execute(timeline, ShellCommand::Jump(step), out)?;
    }
    write!(out, "{}", render(timeline)?)?;
    Ok(())
}
