//! Command-line interface for the gomoku binary.

use clap::{Parser, Subcommand};

/// Strictly Gomoku - connect five in the terminal
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Two-player connect-five on a 15x15 board", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Path to a TOML config file (defaults are used if it is missing)
        #[arg(short, long, default_value = "gomoku.toml")]
        config: std::path::PathBuf,
    },

    /// Print the default configuration as TOML
    Config,
}
