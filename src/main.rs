//! Strictly Gomoku - terminal front end
//!
//! Plays connect-five on stdin/stdout against a second human.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use strictly_gomoku::{GameConfig, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(&config),
        Command::Config => print_default_config(),
    }
}

/// Run an interactive game
fn run_play(config_path: &Path) -> Result<()> {
    let config = GameConfig::load_or_default(config_path)?;

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(config = %config_path.display(), "Starting gomoku");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut session = Session::new(config);
    session.run(stdin.lock(), stdout.lock())?;

    Ok(())
}

/// Print the default configuration
fn print_default_config() -> Result<()> {
    println!("{}", GameConfig::default_toml()?);
    Ok(())
}
