//! Strictly Reversi - Unified CLI
//!
//! Plays Reversi in the terminal or prints the saved game.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::{Path, PathBuf};
use strictly_reversi::{FileGameRepository, GameRepository, ReversiConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            save_path,
            thinking_delay_ms,
        } => {
            let mut config = load_config(&config, save_path)?;
            if let Some(delay) = thinking_delay_ms {
                config = config.with_thinking_delay_ms(delay);
            }
            tui::run_tui(config).await
        }
        Command::Show {
            config,
            save_path,
            json,
        } => run_show(load_config(&config, save_path)?, json),
    }
}

fn load_config(path: &Path, save_path: Option<PathBuf>) -> Result<ReversiConfig> {
    let config = ReversiConfig::from_file(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    Ok(match save_path {
        Some(save_path) => config.with_save_path(save_path),
        None => config,
    })
}

/// Prints the saved game to stdout
#[instrument(skip_all, fields(save_path = %config.save_path().display()))]
fn run_show(config: ReversiConfig, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,strictly_reversi=debug")),
        )
        .with_writer(std::io::stderr)
        .init();

    let repository = FileGameRepository::new(config.save_path());
    let game = repository
        .load()
        .with_context(|| format!("No readable game at {}", config.save_path().display()))?;
    info!(turn = ?game.turn(), "Loaded saved game");

    if json {
        println!("{}", serde_json::to_string_pretty(&game)?);
        return Ok(());
    }

    print!("{}", game.board());
    let [dark, light] = game.board().disk_counts();
    println!("Dark {}  Light {}", dark, light);
    println!("{}", game.status());
    Ok(())
}
