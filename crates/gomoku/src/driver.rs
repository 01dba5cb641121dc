//! Event loop between the player, the engine and the computer's timer.

use crate::input::Command;
use anyhow::Result;
use gomoku_engine::{
    AutoMoveTicket, Controller, Coord, GameStatus, Mode, MoveError, MoveResult, Outcome, Played,
    Player, RandomSource, TurnSequencer,
};
use serde::Serialize;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, info, instrument};

/// Messages sent from the driver to the view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// A fresh board was generated.
    BoardCreated {
        /// Board generation.
        generation: u64,
        /// Edge length that was asked for.
        requested: usize,
        /// Edge length after clamping.
        size: usize,
        /// Winner of the coin flip.
        first: Player,
    },
    /// A marker was placed.
    MovePlayed {
        /// Who moved.
        player: Player,
        /// Where.
        coord: Coord,
        /// Human or computer.
        by: Controller,
    },
    /// A move was refused; nothing changed.
    MoveRejected {
        /// Requested cell.
        coord: Coord,
        /// Why.
        reason: MoveError,
    },
    /// It is now `player`'s turn.
    TurnChanged {
        /// Player to move.
        player: Player,
    },
    /// The computer will reply after the delay.
    ComputerThinking,
    /// The game ended.
    GameOver {
        /// Final status.
        status: GameStatus,
    },
}

/// Owns the sequencer and runs the command/timer loop.
pub struct Driver<R> {
    sequencer: TurnSequencer<R>,
    size: usize,
    delay: Duration,
    events: mpsc::UnboundedSender<GameEvent>,
}

impl<R: RandomSource> Driver<R> {
    /// Creates a driver and announces its first board.
    #[instrument(skip(rng, events))]
    pub fn new(
        mode: Mode,
        size: usize,
        delay: Duration,
        rng: R,
        events: mpsc::UnboundedSender<GameEvent>,
    ) -> Result<Self> {
        let (sequencer, opening) = TurnSequencer::start(mode, size, rng);
        let driver = Self {
            size: sequencer.session().size(),
            sequencer,
            delay,
            events,
        };
        driver.announce_board(size, opening.generation, opening.first)?;
        if let Some(played) = opening.automated {
            driver.announce_move(played)?;
        }
        Ok(driver)
    }

    /// Processes commands until `Quit` or until the command channel closes.
    ///
    /// At most one computer reply is pending at a time. A new board drops
    /// it; the ticket's generation check covers anything that slips past.
    pub async fn run(mut self, mut commands: mpsc::UnboundedReceiver<Command>) -> Result<()> {
        let mut pending: Option<(Instant, AutoMoveTicket)> = None;

        loop {
            let deadline = pending.map(|(at, _)| at);
            let timer = async move {
                match deadline {
                    Some(at) => sleep_until(at).await,
                    None => std::future::pending::<()>().await,
                }
            };

            tokio::select! {
                command = commands.recv() => match command {
                    None | Some(Command::Quit) => {
                        info!("Driver stopping");
                        return Ok(());
                    }
                    Some(Command::NewGame { size }) => {
                        pending = None;
                        self.new_game(size)?;
                    }
                    Some(Command::Play(coord)) => {
                        if let Some(ticket) = self.play(coord)? {
                            pending = Some((Instant::now() + self.delay, ticket));
                        }
                    }
                },
                () = timer => {
                    if let Some((_, ticket)) = pending.take() {
                        self.fire(ticket)?;
                    }
                }
            }
        }
    }

    /// Generates a new board, keeping the previous size when none is given.
    #[instrument(skip(self))]
    fn new_game(&mut self, size: Option<usize>) -> Result<()> {
        let requested = size.unwrap_or(self.size);
        let opening = self.sequencer.new_game(requested);
        self.size = self.sequencer.session().size();
        self.announce_board(requested, opening.generation, opening.first)?;
        if let Some(played) = opening.automated {
            self.announce_move(played)?;
        }
        Ok(())
    }

    /// Plays a human move and returns the computer's ticket, if any.
    #[instrument(skip(self))]
    fn play(&mut self, coord: Coord) -> Result<Option<AutoMoveTicket>> {
        let turn = self.sequencer.human_move(coord);
        match turn.result {
            MoveResult::Rejected(reason) => {
                self.send(GameEvent::MoveRejected { coord, reason })?;
                Ok(None)
            }
            MoveResult::Accepted(outcome) => {
                self.announce_move(Played {
                    player: turn.player,
                    coord,
                    outcome,
                })?;
                if turn.ticket.is_some() {
                    self.send(GameEvent::ComputerThinking)?;
                }
                Ok(turn.ticket)
            }
        }
    }

    fn fire(&mut self, ticket: AutoMoveTicket) -> Result<()> {
        match self.sequencer.fire_automated(ticket) {
            Some(played) => self.announce_move(played),
            None => {
                debug!(generation = ticket.generation(), "Computer move skipped");
                Ok(())
            }
        }
    }

    fn announce_board(&self, requested: usize, generation: u64, first: Player) -> Result<()> {
        self.send(GameEvent::BoardCreated {
            generation,
            requested,
            size: self.size,
            first,
        })?;
        self.send(GameEvent::TurnChanged { player: first })
    }

    fn announce_move(&self, played: Played) -> Result<()> {
        self.send(GameEvent::MovePlayed {
            player: played.player,
            coord: played.coord,
            by: self.sequencer.mode().controller(played.player),
        })?;
        match played.outcome {
            Outcome::Continuing => self.send(GameEvent::TurnChanged {
                player: self.sequencer.session().current_turn(),
            }),
            Outcome::Won(_) | Outcome::Draw => self.send(GameEvent::GameOver {
                status: self.sequencer.session().status(),
            }),
        }
    }

    fn send(&self, event: GameEvent) -> Result<()> {
        self.events.send(event)?;
        Ok(())
    }
}
