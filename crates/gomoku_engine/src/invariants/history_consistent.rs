//! History consistency invariant: history length matches occupied cells.

use super::super::GameInProgress;
use super::Invariant;

/// Invariant: History length equals the number of occupied cells.
pub struct HistoryConsistentInvariant;

impl Invariant<GameInProgress> for HistoryConsistentInvariant {
    fn holds(game: &GameInProgress) -> bool {
        game.history().len() == game.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Coord, GameInProgress, GameResult, GameSetup, Move, Player};

    #[test]
    fn test_empty_game_holds() {
        let game = GameSetup::new(12).start(Player::One);
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_multiple_moves_hold() {
        let moves = [
            Move::new(Player::Two, Coord::new(0, 0)),
            Move::new(Player::One, Coord::new(1, 1)),
            Move::new(Player::Two, Coord::new(2, 2)),
            Move::new(Player::One, Coord::new(3, 3)),
        ];

        let replayed = GameInProgress::replay(12, Player::Two, &moves);
        let Ok(GameResult::InProgress(game)) = replayed else {
            panic!("Expected in-progress game");
        };
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 4);
    }

    #[test]
    fn test_unrecorded_marker_violates() {
        let mut game = GameSetup::new(12).start(Player::One);
        game.board.set(Coord::new(6, 6), Cell::Occupied(Player::One)).unwrap();
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
