//! Alternating turn invariant: players alternate starting with the first mover.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// The first recorded move belongs to the player chosen at start, no
/// player moves twice in a row, and `to_move` follows from the history
/// length.
pub struct AlternatingTurnInvariant;

impl Invariant<GameInProgress> for AlternatingTurnInvariant {
    fn holds(game: &GameInProgress) -> bool {
        let history = game.history();
        let first = game.first_player();

        if history.first().is_some_and(|m| m.player != first) {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            first
        } else {
            first.opponent()
        };

        game.to_move() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns starting with the first mover"
    }
}
