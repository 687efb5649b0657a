//! Line-oriented play session.
//!
//! Reads commands from any `BufRead`, drives a [`GameEngine`], and writes
//! the rendered state to any `Write`. The engine stays the only source of
//! truth; the session keeps nothing but the config.

use super::command::{Command, HELP};
use super::render;
use crate::config::GameConfig;
use crate::games::gomoku::GameEngine;
use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop the session.
    Quit,
}

/// Interactive game session over text streams.
#[derive(Debug)]
pub struct Session {
    engine: GameEngine,
    config: GameConfig,
}

impl Session {
    /// Creates a session with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        Self {
            engine: GameEngine::new(),
            config,
        }
    }

    /// Returns the engine being played.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Runs until `quit` or end of input.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        info!("Starting gomoku session");
        writeln!(output, "{}", HELP)?;
        write!(output, "\n{}", render::render(&self.engine, &self.config))?;
        output.flush()?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command, &mut output)? == Flow::Quit {
                        info!("Session ended by user");
                        return Ok(());
                    }
                }
                Err(e) => {
                    debug!(error = %e, "Unparseable input");
                    writeln!(output, "{}", e)?;
                }
            }
            output.flush()?;
        }

        info!("Input closed, ending session");
        Ok(())
    }

    /// Applies one command and writes the response.
    #[instrument(skip(self, output))]
    pub fn execute<W: Write>(&mut self, command: Command, mut output: W) -> io::Result<Flow> {
        match command {
            Command::Place { row, col } => match self.engine.apply_move(row, col) {
                Ok(status) => {
                    debug!(%status, "Move accepted");
                    write!(output, "{}", render::render(&self.engine, &self.config))?;
                }
                Err(e) => {
                    warn!(error = %e, "Move rejected");
                    writeln!(output, "{}", e)?;
                }
            },
            Command::Undo => match self.engine.undo() {
                Ok(record) => {
                    let who = render::label(&self.config, record.player());
                    writeln!(output, "Took back {}'s move at {}", who, record.position())?;
                    write!(output, "{}", render::render(&self.engine, &self.config))?;
                }
                Err(e) => {
                    warn!(error = %e, "Undo rejected");
                    writeln!(output, "{}", e)?;
                }
            },
            Command::Restart => {
                self.engine.reset();
                writeln!(output, "New game")?;
                write!(output, "{}", render::render(&self.engine, &self.config))?;
            }
            Command::State => {
                let json = serde_json::to_string_pretty(&self.engine.snapshot())
                    .map_err(io::Error::other)?;
                writeln!(output, "{}", json)?;
            }
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => {
                writeln!(output, "Bye")?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }
}
