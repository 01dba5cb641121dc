//! Command-line interface for gomoku.

use crate::config::OutputFormat;
use clap::Parser;
use gomoku_engine::Mode;

/// Five in a row against the computer or a friend
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Five-in-a-row in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults are used if it is missing)
    #[arg(short, long, default_value = "gomoku.toml")]
    pub config: std::path::PathBuf,

    /// Board edge length, clamped to 3..=20
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Game variant: vs-computer or hot-seat
    #[arg(short, long)]
    pub mode: Option<Mode>,

    /// Pause before the computer replies, in milliseconds
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Seed for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format: text or json
    #[arg(short, long)]
    pub output: Option<OutputFormat>,
}
