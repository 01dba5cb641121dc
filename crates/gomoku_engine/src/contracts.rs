//! Contract-based validation for moves.
//!
//! Contracts pair preconditions with postconditions: {P} action {Q}.
//! Preconditions gate every move; postconditions re-check the invariants
//! after the board has been written.

use super::action::{Move, MoveError};
use super::invariants::{GomokuInvariants, InvariantSet};
use super::typestate::GameInProgress;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Rejects a move by the player not holding the turn.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if mov.player != game.to_move() {
            Err(MoveError::WrongPlayer(mov.player))
        } else {
            Ok(())
        }
    }
}

/// Precondition: The coordinate must be on the board.
pub struct InBounds;

impl InBounds {
    /// Rejects coordinates outside `[0, size)`.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if game.board().contains(mov.coord) {
            Ok(())
        } else {
            warn!(size = game.board().size(), coord = %mov.coord, "Move outside the board");
            Err(MoveError::OutOfBounds(mov.coord))
        }
    }
}

/// Precondition: The target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto an occupied cell.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        if game.board().is_empty(mov.coord) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(mov.coord))
        }
    }
}

/// Composite precondition, checked in order: turn, bounds, empty cell.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(mov: &Move, game: &GameInProgress) -> Result<(), MoveError> {
        PlayersTurn::check(mov, game)?;
        InBounds::check(mov, game)?;
        CellIsEmpty::check(mov, game)?;
        Ok(())
    }
}

/// Contract for move actions.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - Board remains monotonic
/// - Players still alternate
/// - History remains consistent with board
/// - Exactly one cell was filled
pub struct MoveContract;

impl Contract<GameInProgress, Move> for MoveContract {
    fn pre(game: &GameInProgress, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameInProgress, after: &GameInProgress) -> Result<(), MoveError> {
        if after.board().occupied() != before.board().occupied() + 1 {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: move did not fill exactly one cell".to_string(),
            ));
        }

        GomokuInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
