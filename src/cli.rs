//! Command-line interface for rewind_tictactoe.

use clap::{Parser, Subcommand};
use rewind_tictactoe::OutputFormat;
use std::path::PathBuf;

/// Rewind Tic-Tac-Toe - terminal tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind_tictactoe")]
#[command(about = "Terminal tic-tac-toe with move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Replay moves without a terminal UI and print the resulting view
    Replay {
        /// Cell indices (0-8, row-major) to play in order; others are ignored
        cells: Vec<usize>,

        /// Jump to this move after playing
        #[arg(short, long)]
        jump: Option<usize>,

        /// List moves newest first
        #[arg(short, long)]
        descending: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play { config: None }
    }
}
