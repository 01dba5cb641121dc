//! The automated opponent: uniformly random among empty cells.

use super::random::RandomSource;
use super::{Board, Coord};
use tracing::{debug, instrument};

/// Picks a uniformly random empty cell. No lookahead, no blocking.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOpponent;

impl RandomOpponent {
    /// Returns the chosen cell, or `None` when the board is full.
    #[instrument(skip(self, board, rng), fields(size = board.size()))]
    pub fn pick_move<R: RandomSource + ?Sized>(&self, board: &Board, rng: &mut R) -> Option<Coord> {
        let empty = board.empty_cells();
        if empty.is_empty() {
            return None;
        }
        let chosen = empty[rng.pick_index(empty.len())];
        debug!(%chosen, choices = empty.len(), "Opponent chose cell");
        Some(chosen)
    }
}
