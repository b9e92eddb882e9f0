//! Command-line interface for strictly_reversi.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Reversi - Reversi in the terminal with a persistent save slot
#[derive(Parser, Debug)]
#[command(name = "strictly_reversi")]
#[command(about = "Reversi in the terminal with a persistent save slot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal, resuming the saved game
    Play {
        /// Path to the TOML config file (defaults apply if missing)
        #[arg(short, long, default_value = "strictly_reversi.toml")]
        config: PathBuf,

        /// Override the save file location
        #[arg(long)]
        save_path: Option<PathBuf>,

        /// Override the scripted side's thinking delay in milliseconds
        #[arg(long)]
        thinking_delay_ms: Option<u64>,
    },

    /// Print the saved game and exit
    Show {
        /// Path to the TOML config file (defaults apply if missing)
        #[arg(short, long, default_value = "strictly_reversi.toml")]
        config: PathBuf,

        /// Override the save file location
        #[arg(long)]
        save_path: Option<PathBuf>,

        /// Print the game as JSON
        #[arg(long)]
        json: bool,
    },
}
