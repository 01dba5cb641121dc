//! Terminal front end for the five-in-a-row engine.
//!
//! # Architecture
//!
//! - **Input**: stdin lines parsed into [`Command`]s
//! - **Driver**: owns the [`TurnSequencer`](gomoku_engine::TurnSequencer) and
//!   the computer's reply timer, and emits [`GameEvent`]s
//! - **View**: mirrors the board from events and renders text or JSON lines
//! - **Config**: TOML file plus command-line overrides
//!
//! # Example
//!
//! ```no_run
//! use gomoku::{Command, Driver, GameConfig, View};
//! use gomoku_engine::{Coord, SeededRng};
//! use tokio::sync::mpsc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = GameConfig::default();
//! let (event_tx, mut event_rx) = mpsc::unbounded_channel();
//! let (command_tx, command_rx) = mpsc::unbounded_channel();
//!
//! let driver = Driver::new(
//!     *config.mode(),
//!     *config.board_size(),
//!     config.computer_delay(),
//!     SeededRng::from_seed(7),
//!     event_tx,
//! )?;
//! let handle = tokio::spawn(driver.run(command_rx));
//!
//! command_tx.send(Command::Play(Coord::new(7, 7)))?;
//! command_tx.send(Command::Quit)?;
//! handle.await??;
//!
//! let mut view = View::new(*config.mode(), *config.output());
//! while let Some(event) = event_rx.recv().await {
//!     if let Some(text) = view.render(&event)? {
//!         println!("{text}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod driver;
mod input;
mod view;

pub use cli::Cli;
pub use config::{ConfigError, GameConfig, OutputFormat};
pub use driver::{Driver, GameEvent};
pub use input::{Command, InputError, forward_commands, parse_command};
pub use view::View;
