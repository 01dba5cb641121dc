//! First-class action types for five-in-a-row.
//!
//! Moves are domain events, not side effects. They carry the player's
//! intent and can be validated before anything touches the board.

use super::{Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move: a player placing their marker at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// Where the marker goes.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, coord: Coord) -> Self {
        Self { player, coord }
    }

    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the target coordinate.
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)
    }
}

/// Why a move was not applied.
///
/// Apart from `InvariantViolation`, these are ordinary outcomes of play
/// (re-clicking a marker, clicking while the computer is thinking).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum MoveError {
    /// The game is already over.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// The coordinate is off the board.
    #[display("{} is off the board", _0)]
    OutOfBounds(Coord),

    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Coord),

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
