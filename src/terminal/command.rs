//! Text commands accepted by the terminal session.

use derive_more::{Display, Error};
use std::str::FromStr;

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a stone at `(row, col)`.
    Place {
        /// Row, 0-based.
        row: usize,
        /// Column, 0-based.
        col: usize,
    },
    /// Take back the last move.
    Undo,
    /// Start a new game.
    Restart,
    /// Print the engine snapshot as JSON.
    State,
    /// Print the command list.
    Help,
    /// Leave the session.
    Quit,
}

/// Help text listing every command.
pub const HELP: &str = "\
Commands:
  <row> <col>   place a stone (0-based, e.g. `7 7` or `7,7`)
  undo          take back the last move
  restart       start a new game (alias: reset)
  state         print the game state as JSON
  help          show this help
  quit          leave (alias: exit)";

/// Input line that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized command `{}` (type `help` for a list)", input)]
pub struct CommandError {
    /// The offending input, trimmed.
    pub input: String,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let err = || CommandError {
            input: input.to_string(),
        };

        match input.to_ascii_lowercase().as_str() {
            "undo" | "u" => return Ok(Command::Undo),
            "restart" | "reset" | "r" => return Ok(Command::Restart),
            "state" => return Ok(Command::State),
            "help" | "?" => return Ok(Command::Help),
            "quit" | "exit" | "q" => return Ok(Command::Quit),
            _ => {}
        }

        let mut parts = input
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty());
        let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(err());
        };
        let row = row.parse().map_err(|_| err())?;
        let col = col.parse().map_err(|_| err())?;
        Ok(Command::Place { row, col })
    }
}
