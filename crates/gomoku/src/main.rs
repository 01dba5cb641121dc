//! Gomoku - five in a row in the terminal.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use gomoku::{Cli, Driver, GameConfig, View, forward_commands};
use gomoku_engine::{RandomSource, SeededRng, SystemRng};
use tokio::io::BufReader;
use tokio::sync::mpsc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Stdout carries the game, so logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)?.with_overrides(
        cli.size,
        cli.mode,
        cli.delay_ms,
        cli.seed,
        cli.output,
    );
    info!(?config, "Starting gomoku");

    let rng: Box<dyn RandomSource + Send> = match config.seed() {
        Some(seed) => Box::new(SeededRng::from_seed(*seed)),
        None => Box::new(SystemRng),
    };

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let (command_tx, command_rx) = mpsc::unbounded_channel();

    let driver = Driver::new(
        *config.mode(),
        *config.board_size(),
        config.computer_delay(),
        rng,
        event_tx,
    )?;
    let driver = tokio::spawn(driver.run(command_rx));
    let stdin = BufReader::new(tokio::io::stdin());
    let reader = tokio::spawn(forward_commands(stdin, command_tx, *config.output()));

    let mut view = View::new(*config.mode(), *config.output());
    while let Some(event) = event_rx.recv().await {
        if let Some(text) = view.render(&event)? {
            println!("{text}");
        }
    }

    driver.await??;
    // The driver only stops once the reader has sent `Quit` or hung up.
    if let Err(e) = reader.await? {
        warn!(error = %e, "Reading commands failed");
    }
    info!("Goodbye");
    Ok(())
}
