//! Turn sequencing and the automated opponent.
//!
//! The sequencer owns the current [`GameSession`], flips the coin for the
//! first move and decides when the computer plays. It never sleeps: a
//! delayed computer reply is handed back as an [`AutoMoveTicket`] that the
//! caller redeems with [`TurnSequencer::fire_automated`] once its timer
//! fires. Every ticket is tagged with the board generation it was issued
//! for, so a ticket outliving its board is a no-op.

use super::opponent::RandomOpponent;
use super::phases::Outcome;
use super::random::RandomSource;
use super::session::{GameSession, MoveResult};
use super::{Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Game variant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Mode {
    /// Player one is human, player two is the random opponent.
    #[default]
    VsComputer,
    /// Two people share one board.
    HotSeat,
}

/// Who makes a player's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Controller {
    /// Moves come from outside the engine.
    Human,
    /// Moves come from [`RandomOpponent`].
    Computer,
}

impl Mode {
    /// Returns who controls `player` in this variant.
    pub fn controller(self, player: Player) -> Controller {
        match (self, player) {
            (Mode::VsComputer, Player::Two) => Controller::Computer,
            _ => Controller::Human,
        }
    }
}

/// Permission for one delayed computer move on one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AutoMoveTicket {
    generation: u64,
    player: Player,
}

impl AutoMoveTicket {
    /// Board generation the ticket was issued for.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Player the computer will move for.
    pub fn player(&self) -> Player {
        self.player
    }
}

/// A move that was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Played {
    /// Who moved.
    pub player: Player,
    /// Where.
    pub coord: Coord,
    /// What it did to the game.
    pub outcome: Outcome,
}

/// Report for a freshly generated board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opening {
    /// Board generation.
    pub generation: u64,
    /// Winner of the coin flip.
    pub first: Player,
    /// The computer's immediate first move, if it won the flip.
    pub automated: Option<Played>,
}

/// Result of a human move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    /// Acting player as resolved by the sequencer.
    pub player: Player,
    /// What the session did with the move.
    pub result: MoveResult,
    /// Computer reply to schedule, if one is due.
    pub ticket: Option<AutoMoveTicket>,
}

/// Drives one game after another for a fixed [`Mode`].
#[derive(Debug)]
pub struct TurnSequencer<R> {
    mode: Mode,
    rng: R,
    opponent: RandomOpponent,
    session: GameSession,
    generation: u64,
}

impl<R: RandomSource> TurnSequencer<R> {
    /// Creates a sequencer and generates its first board.
    #[instrument(skip(rng))]
    pub fn start(mode: Mode, size: usize, rng: R) -> (Self, Opening) {
        let mut sequencer = Self {
            mode,
            rng,
            opponent: RandomOpponent,
            session: GameSession::new(size, Player::One),
            generation: 0,
        };
        let opening = sequencer.new_game(size);
        (sequencer, opening)
    }

    /// Replaces the board with a fresh one and flips for the first move.
    ///
    /// Outstanding tickets become stale. If the computer wins the flip it
    /// moves immediately, without a delay.
    #[instrument(skip(self), fields(mode = %self.mode))]
    pub fn new_game(&mut self, size: usize) -> Opening {
        let first = if self.rng.coin_flip() { Player::One } else { Player::Two };
        self.generation += 1;
        self.session = GameSession::new(size, first);
        info!(generation = self.generation, ?first, size = self.session.size(), "Board generated");

        let automated = match self.mode.controller(first) {
            Controller::Computer => self.play_automated(first),
            Controller::Human => None,
        };

        Opening {
            generation: self.generation,
            first,
            automated,
        }
    }

    /// Plays a human move at `coord`.
    ///
    /// Against the computer the human is always player one; in hot-seat
    /// play the move goes to whoever holds the turn.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn human_move(&mut self, coord: Coord) -> Turn {
        let player = match self.mode {
            Mode::VsComputer => Player::One,
            Mode::HotSeat => self.session.current_turn(),
        };
        let result = self.session.attempt_move(coord, player);

        let ticket = match result {
            MoveResult::Accepted(Outcome::Continuing) => {
                let next = self.session.current_turn();
                (self.mode.controller(next) == Controller::Computer).then(|| {
                    debug!(?next, "Computer reply due");
                    AutoMoveTicket {
                        generation: self.generation,
                        player: next,
                    }
                })
            }
            _ => None,
        };

        Turn { player, result, ticket }
    }

    /// Redeems a ticket: the computer plays if the ticket still applies.
    ///
    /// Returns `None` for a ticket from an older board, for a finished
    /// game, or when it is no longer the ticket holder's turn.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn fire_automated(&mut self, ticket: AutoMoveTicket) -> Option<Played> {
        if ticket.generation != self.generation {
            debug!(stale = ticket.generation, "Discarding ticket from an older board");
            return None;
        }
        if self.session.is_terminal() || self.session.current_turn() != ticket.player {
            debug!("Ticket no longer applies");
            return None;
        }
        self.play_automated(ticket.player)
    }

    fn play_automated(&mut self, player: Player) -> Option<Played> {
        let coord = self.opponent.pick_move(self.session.board(), &mut self.rng)?;
        match self.session.attempt_move(coord, player) {
            MoveResult::Accepted(outcome) => Some(Played { player, coord, outcome }),
            MoveResult::Rejected(_) => None,
        }
    }

    /// The current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The variant being played.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Generation of the current board.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
