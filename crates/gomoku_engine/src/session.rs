//! Value-level game session.
//!
//! The typestate phases consume the game on every move. A session keeps
//! whichever phase is current and turns rejected moves into plain values,
//! so a caller can retry without losing the game.

use super::action::{Move, MoveError};
use super::phases::{GameStatus, Outcome};
use super::typestate::{GameFinished, GameInProgress, GameResult, GameSetup};
use super::{Board, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Result of attempting a move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveResult {
    /// The move was not applied; the session is unchanged.
    Rejected(MoveError),
    /// The move was applied.
    Accepted(Outcome),
}

impl MoveResult {
    /// Returns true if the move was applied.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted(_))
    }

    /// Returns the outcome of an accepted move.
    pub fn outcome(&self) -> Option<Outcome> {
        match self {
            MoveResult::Accepted(outcome) => Some(*outcome),
            MoveResult::Rejected(_) => None,
        }
    }
}

#[derive(Debug, Clone)]
enum Phase {
    Playing(GameInProgress),
    Finished(GameFinished),
}

/// One game on one board.
#[derive(Debug, Clone)]
pub struct GameSession {
    phase: Phase,
}

impl GameSession {
    /// Starts a session on a clamped `size`×`size` board.
    #[instrument]
    pub fn new(size: usize, first_player: Player) -> Self {
        let game = GameSetup::new(size).start(first_player);
        info!(size = game.board().size(), ?first_player, "New game session");
        Self {
            phase: Phase::Playing(game),
        }
    }

    /// Attempts a move for `player` at `coord`.
    ///
    /// Rejections leave the session untouched.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, coord: Coord, player: Player) -> MoveResult {
        let game = match &self.phase {
            Phase::Playing(game) => game,
            Phase::Finished(_) => {
                debug!("Move after game end ignored");
                return MoveResult::Rejected(MoveError::GameOver);
            }
        };

        match game.clone().make_move(Move::new(player, coord)) {
            Ok(GameResult::InProgress(next)) => {
                debug!(next = ?next.to_move(), "Move accepted");
                self.phase = Phase::Playing(next);
                MoveResult::Accepted(Outcome::Continuing)
            }
            Ok(GameResult::Finished(done)) => match Outcome::try_from(done.status()) {
                Ok(outcome) => {
                    info!(?outcome, moves = done.history().len(), "Game over");
                    self.phase = Phase::Finished(done);
                    MoveResult::Accepted(outcome)
                }
                Err(err) => {
                    warn!(%err, "Finished game without a result");
                    MoveResult::Rejected(err)
                }
            },
            Err(err @ MoveError::InvariantViolation(_)) => {
                warn!(%err, "Move broke a game invariant");
                MoveResult::Rejected(err)
            }
            Err(err) => {
                debug!(%err, "Move rejected");
                MoveResult::Rejected(err)
            }
        }
    }

    /// Player whose turn it is. Once the game is over this stays on the
    /// player who made the final move.
    pub fn current_turn(&self) -> Player {
        match &self.phase {
            Phase::Playing(game) => game.to_move(),
            Phase::Finished(done) => done.last_mover(),
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_terminal(&self) -> bool {
        matches!(self.phase, Phase::Finished(_))
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        match &self.phase {
            Phase::Playing(_) => GameStatus::InProgress,
            Phase::Finished(done) => done.status(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        match &self.phase {
            Phase::Playing(game) => game.board(),
            Phase::Finished(done) => done.board(),
        }
    }

    /// Edge length of the board.
    pub fn size(&self) -> usize {
        self.board().size()
    }

    /// Empty cells; none once the game is over.
    pub fn legal_moves(&self) -> Vec<Coord> {
        match &self.phase {
            Phase::Playing(game) => game.valid_moves(),
            Phase::Finished(_) => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_rejection_leaves_session_unchanged() {
        let mut session = GameSession::new(6, Player::One);
        assert!(session.attempt_move(Coord::new(2, 2), Player::One).is_accepted());

        let before = session.board().clone();
        let result = session.attempt_move(Coord::new(2, 2), Player::Two);
        assert_eq!(result, MoveResult::Rejected(MoveError::CellOccupied(Coord::new(2, 2))));
        assert_eq!(session.board(), &before);
        assert_eq!(session.current_turn(), Player::Two);
    }

    #[test]
    fn test_out_of_turn_is_rejected() {
        let mut session = GameSession::new(6, Player::Two);
        let result = session.attempt_move(Coord::new(0, 0), Player::One);
        assert_eq!(result, MoveResult::Rejected(MoveError::WrongPlayer(Player::One)));
        assert_eq!(session.board().occupied(), 0);
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut session = GameSession::new(6, Player::One);
        let result = session.attempt_move(Coord::new(6, 6), Player::One);
        assert_eq!(result, MoveResult::Rejected(MoveError::OutOfBounds(Coord::new(6, 6))));
        assert!(!session.is_terminal());
    }

    #[test]
    fn test_finished_session_is_read_only() {
        let mut session = GameSession::new(3, Player::One);
        let mut player = Player::One;
        for coord in Board::new(3).coords() {
            session.attempt_move(coord, player);
            player = player.opponent();
        }
        assert_eq!(session.status(), GameStatus::Draw);
        assert!(session.legal_moves().is_empty());
        assert_eq!(session.current_turn(), Player::One);

        let result = session.attempt_move(Coord::new(0, 0), Player::Two);
        assert_eq!(result, MoveResult::Rejected(MoveError::GameOver));
        assert_eq!(session.board().get(Coord::new(0, 0)), Some(Cell::Occupied(Player::One)));
    }
}
