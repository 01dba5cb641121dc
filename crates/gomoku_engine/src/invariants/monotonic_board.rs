//! Monotonic board invariant: cells never change once set.

use super::super::{Board, Cell, GameInProgress};
use super::Invariant;

/// Invariant: Board cells are write-once.
///
/// Replaying the history onto an empty board must never hit an occupied
/// cell and must reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<GameInProgress> for MonotonicBoardInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let mut reconstructed = Board::new(game.board().size());

        for mov in game.history() {
            if !reconstructed.is_empty(mov.coord) {
                return false;
            }
            if reconstructed.set(mov.coord, Cell::Occupied(mov.player)).is_err() {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
