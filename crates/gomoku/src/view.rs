//! Turns driver events into what the player sees.

use crate::config::OutputFormat;
use crate::driver::GameEvent;
use anyhow::Result;
use gomoku_engine::{Board, Cell, Controller, GameStatus, Mode, MoveError, Player};
use tracing::warn;

/// Keeps a copy of the board in step with the event stream.
#[derive(Debug, Clone)]
pub struct View {
    mode: Mode,
    format: OutputFormat,
    board: Board,
}

impl View {
    /// Creates a view for `mode`, writing in `format`.
    pub fn new(mode: Mode, format: OutputFormat) -> Self {
        Self {
            mode,
            format,
            board: Board::new(0),
        }
    }

    /// Board as the view last saw it.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Applies `event` and returns the text to print, if any.
    pub fn render(&mut self, event: &GameEvent) -> Result<Option<String>> {
        self.apply(event);
        match self.format {
            OutputFormat::Json => Ok(Some(serde_json::to_string(event)?)),
            OutputFormat::Text => Ok(self.text(event)),
        }
    }

    fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::BoardCreated { size, .. } => self.board = Board::new(*size),
            GameEvent::MovePlayed { player, coord, .. } => {
                if let Err(e) = self.board.set(*coord, Cell::Occupied(*player)) {
                    warn!(%coord, error = e, "View out of step with engine");
                }
            }
            _ => {}
        }
    }

    fn text(&self, event: &GameEvent) -> Option<String> {
        match event {
            GameEvent::BoardCreated {
                requested, size, first, ..
            } => {
                let mut out = String::new();
                if requested != size {
                    out.push_str(&format!(
                        "Board size must be between {} and {}; using {size}.\n",
                        gomoku_engine::MIN_BOARD_SIZE,
                        gomoku_engine::MAX_BOARD_SIZE
                    ));
                }
                out.push_str(&format!("New {size}x{size} game. {} goes first.", self.name(*first)));
                Some(out)
            }
            GameEvent::MovePlayed { player, coord, by } => {
                let who = match by {
                    Controller::Computer => "Computer".to_string(),
                    Controller::Human => self.name(*player),
                };
                Some(format!("{who} played {coord}.\n{}", self.board.display()))
            }
            GameEvent::MoveRejected { coord, reason } => Some(rejection(*coord, reason)),
            GameEvent::TurnChanged { player } => Some(self.turn_banner(*player)),
            GameEvent::ComputerThinking => Some("Computer is thinking...".to_string()),
            GameEvent::GameOver { status } => Some(self.game_over(*status)),
        }
    }

    fn name(&self, player: Player) -> String {
        match (self.mode, player) {
            (Mode::VsComputer, Player::One) => "You".to_string(),
            (Mode::VsComputer, Player::Two) => "Computer".to_string(),
            (Mode::HotSeat, p) => p.to_string(),
        }
    }

    fn turn_banner(&self, player: Player) -> String {
        match self.mode.controller(player) {
            Controller::Computer => "Computer's turn".to_string(),
            Controller::Human if self.mode == Mode::VsComputer => "Your turn".to_string(),
            Controller::Human => format!("{player}'s turn"),
        }
    }

    fn game_over(&self, status: GameStatus) -> String {
        match (status, self.mode) {
            (GameStatus::Won(Player::One), Mode::VsComputer) => "You win!".to_string(),
            (GameStatus::Won(Player::Two), Mode::VsComputer) => "Computer wins!".to_string(),
            (GameStatus::Won(p), Mode::HotSeat) => format!("{p} wins!"),
            (GameStatus::Draw, _) => "It's a draw!".to_string(),
            (GameStatus::InProgress, _) => "Game in progress".to_string(),
        }
    }
}

fn rejection(coord: gomoku_engine::Coord, reason: &MoveError) -> String {
    match reason {
        MoveError::GameOver => "The game is over. Type `new` to play again.".to_string(),
        MoveError::WrongPlayer(_) => "Please wait for your turn.".to_string(),
        MoveError::OutOfBounds(_) => format!("{coord} is off the board."),
        MoveError::CellOccupied(_) => format!("{coord} is already taken."),
        MoveError::InvariantViolation(detail) => format!("Move refused: {detail}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gomoku_engine::Coord;

    fn created(size: usize, requested: usize, first: Player) -> GameEvent {
        GameEvent::BoardCreated {
            generation: 1,
            requested,
            size,
            first,
        }
    }

    #[test]
    fn test_view_mirrors_moves() {
        let mut view = View::new(Mode::VsComputer, OutputFormat::Text);
        view.render(&created(5, 5, Player::One)).unwrap();
        let text = view
            .render(&GameEvent::MovePlayed {
                player: Player::One,
                coord: Coord::new(1, 2),
                by: Controller::Human,
            })
            .unwrap()
            .unwrap();

        assert_eq!(view.board().get(Coord::new(1, 2)), Some(Cell::Occupied(Player::One)));
        assert!(text.starts_with("You played (1, 2)."));
        assert!(text.contains("  1  .  .  O  .  ."));
    }

    #[test]
    fn test_new_board_clears_view() {
        let mut view = View::new(Mode::HotSeat, OutputFormat::Text);
        view.render(&created(5, 5, Player::One)).unwrap();
        view.render(&GameEvent::MovePlayed {
            player: Player::One,
            coord: Coord::new(0, 0),
            by: Controller::Human,
        })
        .unwrap();
        view.render(&created(6, 6, Player::Two)).unwrap();
        assert_eq!(view.board().size(), 6);
        assert_eq!(view.board().occupied(), 0);
    }

    #[test]
    fn test_clamped_size_is_reported() {
        let mut view = View::new(Mode::VsComputer, OutputFormat::Text);
        let text = view.render(&created(20, 99, Player::Two)).unwrap().unwrap();
        assert!(text.contains("using 20"));
        assert!(text.ends_with("Computer goes first."));
    }

    #[test]
    fn test_end_messages() {
        let mut vs = View::new(Mode::VsComputer, OutputFormat::Text);
        let over = |status| GameEvent::GameOver { status };
        assert_eq!(vs.render(&over(GameStatus::Won(Player::One))).unwrap().unwrap(), "You win!");
        assert_eq!(
            vs.render(&over(GameStatus::Won(Player::Two))).unwrap().unwrap(),
            "Computer wins!"
        );
        assert_eq!(vs.render(&over(GameStatus::Draw)).unwrap().unwrap(), "It's a draw!");

        let mut seat = View::new(Mode::HotSeat, OutputFormat::Text);
        assert_eq!(
            seat.render(&over(GameStatus::Won(Player::Two))).unwrap().unwrap(),
            "Player 2 wins!"
        );
    }

    #[test]
    fn test_turn_banners() {
        let mut vs = View::new(Mode::VsComputer, OutputFormat::Text);
        let turn = |player| GameEvent::TurnChanged { player };
        assert_eq!(vs.render(&turn(Player::One)).unwrap().unwrap(), "Your turn");
        assert_eq!(vs.render(&turn(Player::Two)).unwrap().unwrap(), "Computer's turn");

        let mut seat = View::new(Mode::HotSeat, OutputFormat::Text);
        assert_eq!(seat.render(&turn(Player::Two)).unwrap().unwrap(), "Player 2's turn");
    }

    #[test]
    fn test_json_lines() {
        let mut view = View::new(Mode::VsComputer, OutputFormat::Json);
        let line = view
            .render(&GameEvent::MoveRejected {
                coord: Coord::new(3, 3),
                reason: MoveError::CellOccupied(Coord::new(3, 3)),
            })
            .unwrap()
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["event"], "move_rejected");
        assert_eq!(value["coord"]["row"], 3);
    }
}
