//! Five-in-a-row game engine.
//!
//! Pure game logic with no rendering or I/O. A presentation layer drives
//! the engine through [`TurnSequencer`] (or a bare [`GameSession`]) and
//! renders the [`MoveResult`] values it gets back.
//!
//! # Architecture
//!
//! - **Board**: N×N grid of write-once cells, size clamped to
//!   [`MIN_BOARD_SIZE`]..=[`MAX_BOARD_SIZE`]
//! - **Contracts**: move preconditions (turn, bounds, empty cell) and
//!   debug-build postconditions backed by [`invariants`]
//! - **Rules**: run counting from the last move for wins, full-board draws
//! - **Typestate**: [`GameSetup`] → [`GameInProgress`] → [`GameFinished`]
//! - **Session**: value-level wrapper that reports rejections instead of
//!   consuming the game
//! - **Sequencer**: coin-flip first turn, random automated opponent,
//!   generation-tagged tickets for delayed replies
//!
//! # Example
//!
//! ```
//! use gomoku_engine::{Coord, GameSession, MoveResult, Outcome, Player};
//!
//! let mut session = GameSession::new(5, Player::One);
//! for col in 0..4 {
//!     session.attempt_move(Coord::new(0, col), Player::One);
//!     session.attempt_move(Coord::new(4, col), Player::Two);
//! }
//! let result = session.attempt_move(Coord::new(0, 4), Player::One);
//! assert_eq!(result, MoveResult::Accepted(Outcome::Won(Player::One)));
//! assert!(session.is_terminal());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod contracts;
pub mod invariants;
mod opponent;
mod phases;
mod random;
pub mod rules;
mod sequencer;
mod session;
mod types;
mod typestate;

pub use action::{Move, MoveError};
pub use board::{Board, MAX_BOARD_SIZE, MIN_BOARD_SIZE, clamp_size};
pub use opponent::RandomOpponent;
pub use phases::{GameStatus, Outcome};
pub use random::{RandomSource, SeededRng, SystemRng};
pub use rules::WIN_LENGTH;
pub use sequencer::{AutoMoveTicket, Controller, Mode, Opening, Played, Turn, TurnSequencer};
pub use session::{GameSession, MoveResult};
pub use types::{Cell, Coord, Player};
pub use typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
