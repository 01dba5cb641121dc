//! Game status and per-move outcome values.

use super::Player;
use super::action::MoveError;
use serde::{Deserialize, Serialize};

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// What an accepted move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game goes on with the other player.
    Continuing,
    /// The move completed a line of five.
    Won(Player),
    /// The move filled the board without a line of five.
    Draw,
}

impl From<Outcome> for GameStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Continuing => GameStatus::InProgress,
            Outcome::Won(player) => GameStatus::Won(player),
            Outcome::Draw => GameStatus::Draw,
        }
    }
}

impl TryFrom<GameStatus> for Outcome {
    type Error = MoveError;

    /// Outcome of the move that ended a game. A status still in progress
    /// ended nothing and is refused.
    fn try_from(status: GameStatus) -> Result<Self, Self::Error> {
        match status {
            GameStatus::Won(player) => Ok(Outcome::Won(player)),
            GameStatus::Draw => Ok(Outcome::Draw),
            GameStatus::InProgress => Err(MoveError::InvariantViolation(
                "finished game reports no result".to_string(),
            )),
        }
    }
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "In progress"),
            GameStatus::Won(player) => write!(f, "{} wins", player),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}
