//! Core domain types for five-in-a-row.

use serde::{Deserialize, Serialize};

/// Player in the game.
///
/// In the vs-computer variant `One` is the human and `Two` the automated
/// opponent; in hot-seat play both are people.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// First participant.
    #[display("Player 1")]
    One,
    /// Second participant.
    #[display("Player 2")]
    Two,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Zero-based board coordinate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("({}, {})", row, col)]
pub struct Coord {
    /// Row index, top to bottom.
    pub row: usize,
    /// Column index, left to right.
    pub col: usize,
}

impl Coord {
    /// Creates a new coordinate.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Steps `distance` cells along `(dr, dc)`.
    ///
    /// Returns `None` when the step would leave the non-negative quadrant;
    /// the upper bound is the board's concern.
    pub fn offset(self, dr: isize, dc: isize, distance: isize) -> Option<Self> {
        let row = self.row.checked_add_signed(dr * distance)?;
        let col = self.col.checked_add_signed(dc * distance)?;
        Some(Self { row, col })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent().opponent(), Player::Two);
    }

    #[test]
    fn test_offset_stops_at_zero() {
        let origin = Coord::new(0, 2);
        assert_eq!(origin.offset(0, -1, 2), Some(Coord::new(0, 0)));
        assert_eq!(origin.offset(-1, 1, 1), None);
        assert_eq!(origin.offset(1, -1, 3), None);
    }

    #[test]
    fn test_cell_player() {
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Cell::Occupied(Player::Two).player(), Some(Player::Two));
    }
}
