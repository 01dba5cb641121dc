//! Phase-specific typestate structs for five-in-a-row.
//!
//! Each phase is its own type. A `GameFinished` always has an outcome and
//! has no way to accept a move; a `GameSetup` has no player to move yet.

use super::action::{Move, MoveError};
use super::contracts::{Contract, MoveContract};
use super::phases::GameStatus;
use super::rules;
use super::{Board, Cell, Coord, Player};
use tracing::{debug, instrument};

// ─────────────────────────────────────────────────────────────
//  Setup Phase
// ─────────────────────────────────────────────────────────────

/// Game in setup phase: an empty board waiting for a first mover.
#[derive(Debug, Clone)]
pub struct GameSetup {
    board: Board,
}

impl GameSetup {
    /// Creates a new game on a `size`×`size` board (size is clamped).
    #[instrument]
    pub fn new(size: usize) -> Self {
        Self {
            board: Board::new(size),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Starts the game with the given first player.
    #[instrument(skip(self), fields(size = self.board.size()))]
    pub fn start(self, first_player: Player) -> GameInProgress {
        GameInProgress {
            board: self.board,
            history: Vec::new(),
            first_player,
            to_move: first_player,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  InProgress Phase
// ─────────────────────────────────────────────────────────────

/// Game in progress: can accept moves.
#[derive(Debug, Clone)]
pub struct GameInProgress {
    pub(crate) board: Board,
    pub(crate) history: Vec<Move>,
    pub(crate) first_player: Player,
    pub(crate) to_move: Player,
}

impl GameInProgress {
    /// Makes a move, consuming self and transitioning to the next phase.
    ///
    /// Preconditions are always checked. Postconditions (the invariants)
    /// are checked in debug builds only.
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn make_move(self, action: Move) -> Result<GameResult, MoveError> {
        MoveContract::pre(&self, &action)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.board
            .set(action.coord, Cell::Occupied(action.player))
            .map_err(|_| MoveError::OutOfBounds(action.coord))?;
        game.history.push(action);
        game.to_move = action.player.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(&before, &game)?;

        if let Some(winner) = rules::check_winner_at(&game.board, action.coord) {
            debug!(?winner, moves = game.history.len(), "Game won");
            return Ok(GameResult::Finished(game.finish(action.player, GameStatus::Won(winner))));
        }

        if rules::is_draw(&game.board, action.coord) {
            debug!(moves = game.history.len(), "Board full, game drawn");
            return Ok(GameResult::Finished(game.finish(action.player, GameStatus::Draw)));
        }

        Ok(GameResult::InProgress(game))
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the player who moved first.
    pub fn first_player(&self) -> Player {
        self.first_player
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the moves played so far.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns every empty coordinate.
    pub fn valid_moves(&self) -> Vec<Coord> {
        self.board.empty_cells()
    }

    /// Replays moves from an empty board of the given size.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(
        size: usize,
        first_player: Player,
        moves: &[Move],
    ) -> Result<GameResult, MoveError> {
        let mut game = GameSetup::new(size).start(first_player);

        for action in moves {
            match game.make_move(*action)? {
                GameResult::InProgress(g) => game = g,
                GameResult::Finished(g) => return Ok(GameResult::Finished(g)),
            }
        }

        Ok(GameResult::InProgress(game))
    }

    fn finish(self, last_mover: Player, status: GameStatus) -> GameFinished {
        GameFinished {
            board: self.board,
            history: self.history,
            last_mover,
            status,
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// Game finished: the status is always `Won` or `Draw`.
#[derive(Debug, Clone)]
pub struct GameFinished {
    board: Board,
    history: Vec<Move>,
    last_mover: Player,
    status: GameStatus,
}

impl GameFinished {
    /// Returns the final status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the winner, or `None` for a draw.
    pub fn winner(&self) -> Option<Player> {
        self.status.winner()
    }

    /// Returns the player whose move ended the game.
    pub fn last_mover(&self) -> Player {
        self.last_mover
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Restarts on a fresh board of the same size.
    #[instrument(skip(self))]
    pub fn restart(self) -> GameSetup {
        GameSetup::new(self.board.size())
    }
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of making a move.
#[derive(Debug)]
pub enum GameResult {
    /// Game continues.
    InProgress(GameInProgress),
    /// Game finished.
    Finished(GameFinished),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_board_is_empty() {
        let setup = GameSetup::new(10);
        assert_eq!(setup.board().empty_cells().len(), 100);
    }

    #[test]
    fn test_start_assigns_first_player() {
        let game = GameSetup::new(10).start(Player::Two);
        assert_eq!(game.to_move(), Player::Two);
        assert_eq!(game.first_player(), Player::Two);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_out_of_bounds_rejected_before_mutation() {
        let game = GameSetup::new(4).start(Player::One);
        let result = game.make_move(Move::new(Player::One, Coord::new(4, 0)));
        assert_eq!(result.unwrap_err(), MoveError::OutOfBounds(Coord::new(4, 0)));
    }

    #[test]
    fn test_restart_keeps_size() {
        let moves: Vec<_> = (0..5)
            .flat_map(|col| {
                [
                    Move::new(Player::One, Coord::new(0, col)),
                    Move::new(Player::Two, Coord::new(1, col)),
                ]
            })
            .collect();
        let Ok(GameResult::Finished(done)) = GameInProgress::replay(7, Player::One, &moves) else {
            panic!("Expected a finished game");
        };
        assert_eq!(done.winner(), Some(Player::One));
        // The winning move is the ninth; Two's last move is never played.
        assert_eq!(done.history().len(), 9);

        let setup = done.restart();
        assert_eq!(setup.board().size(), 7);
        assert_eq!(setup.board().occupied(), 0);
    }
}
