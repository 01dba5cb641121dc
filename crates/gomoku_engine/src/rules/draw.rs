//! Draw detection.

use super::super::{Board, Coord};
use super::win::check_winner_at;
use tracing::instrument;

/// Checks if the board is full (all cells occupied).
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A draw is a full board where the last move did not complete a line.
///
/// Win takes priority: a move that fills the board and completes five
/// is a win, never a draw.
#[instrument(skip(board), fields(size = board.size()))]
pub fn is_draw(board: &Board, last: Coord) -> bool {
    is_full(board) && check_winner_at(board, last).is_none()
}
