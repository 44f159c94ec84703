//! Rewind Tic-Tac-Toe - Unified CLI
//!
//! Interactive terminal game, or a headless replay that prints the view.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rewind_tictactoe::{Config, ReplayScript, SortOrder, render, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play { config } => {
            let cwd = std::env::current_dir()?;
            let config = Config::load(config.as_deref(), &cwd)?;
            run_tui(&config)
        }
        Command::Replay {
            cells,
            jump,
            descending,
            format,
        } => {
            let script = ReplayScript {
                cells,
                jump,
                sort_order: if descending {
                    SortOrder::Descending
                } else {
                    SortOrder::Ascending
                },
            };
            run_replay(&script, format)
        }
    }
}

/// Run a scripted game and print the resulting view
fn run_replay(script: &ReplayScript, format: rewind_tictactoe::OutputFormat) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(Config::default().log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(?script, "Starting replay");
    let game = script.run()?;
    println!("{}", render(&game.view(), format)?);
    Ok(())
}
