//! Line-based command input.

use crate::config::OutputFormat;
use derive_more::{Display, Error};
use gomoku_engine::Coord;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, instrument, warn};

/// A request from the player to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Generate a new board; `None` reuses the current size.
    NewGame {
        /// Requested edge length, clamped by the engine.
        size: Option<usize>,
    },
    /// Place a marker for the human whose turn it is.
    Play(Coord),
    /// Stop the session.
    Quit,
}

/// A line that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Could not read {:?}: {}", line, reason)]
pub struct InputError {
    /// The offending input, trimmed.
    pub line: String,
    /// What was wrong with it.
    pub reason: &'static str,
}

impl InputError {
    fn new(line: &str, reason: &'static str) -> Self {
        Self {
            line: line.to_string(),
            reason,
        }
    }
}

/// Parses `new [size]`, `<row> <col>` or `quit`.
///
/// Returns `Ok(None)` for blank lines.
pub fn parse_command(line: &str) -> Result<Option<Command>, InputError> {
    let trimmed = line.trim();
    let words: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|w| !w.is_empty())
        .collect();

    match words.as_slice() {
        [] => Ok(None),
        ["q" | "quit" | "exit"] => Ok(Some(Command::Quit)),
        ["new" | "n"] => Ok(Some(Command::NewGame { size: None })),
        ["new" | "n", size] => {
            let size = parse_size(size)
                .ok_or_else(|| InputError::new(trimmed, "board size must be a number"))?;
            Ok(Some(Command::NewGame { size: Some(size) }))
        }
        [row, col] => {
            let row = row.parse().map_err(|_| InputError::new(trimmed, "row must be a number"))?;
            let col = col.parse().map_err(|_| InputError::new(trimmed, "column must be a number"))?;
            Ok(Some(Command::Play(Coord::new(row, col))))
        }
        _ => Err(InputError::new(trimmed, "expected `<row> <col>`, `new [size]` or `quit`")),
    }
}

/// Reads a board size, saturating instead of failing on any whole number.
///
/// Out-of-range sizes are clamped by the engine, not refused here.
fn parse_size(word: &str) -> Option<usize> {
    let (negative, digits) = match word.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, word.strip_prefix('+').unwrap_or(word)),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if negative {
        return Some(0);
    }
    Some(digits.parse().unwrap_or(usize::MAX))
}

/// Forwards parsed lines from `reader` until `quit` or end of input.
///
/// End of input sends `Quit`. A read error drops the sender without one,
/// which also stops the driver, and is returned to the caller.
#[instrument(skip_all)]
pub async fn forward_commands<R>(
    reader: R,
    commands: mpsc::UnboundedSender<Command>,
    output: OutputFormat,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(Some(command)) => {
                commands.send(command)?;
                if command == Command::Quit {
                    return Ok(());
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "Unreadable command");
                match output {
                    OutputFormat::Text => println!("{e}"),
                    OutputFormat::Json => println!(
                        "{}",
                        serde_json::json!({ "event": "input_error", "message": e.to_string() })
                    ),
                }
            }
        }
    }

    debug!("Input closed");
    commands.send(Command::Quit)?;
    Ok(())
}
