//! Win detection by counting runs through the last move.
//!
//! A new line of five can only pass through the newest marker, so each
//! move costs at most four directions times eight neighbour probes.

use super::super::{Board, Coord, Player};
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Number of contiguous markers needed to win.
pub const WIN_LENGTH: usize = 5;

/// The four line axes. The opposite direction is the negated step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum Direction {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// Top-left to bottom-right.
    DiagonalDown,
    /// Bottom-left to top-right.
    DiagonalUp,
}

impl Direction {
    /// Forward step as `(row delta, col delta)`.
    pub fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDown => (1, 1),
            Direction::DiagonalUp => (-1, 1),
        }
    }
}

/// Counts `player`'s markers from `from` outward along one signed step,
/// not counting `from` itself. Stops at the edge or the first foreign cell.
fn count_from(board: &Board, from: Coord, player: Player, dr: isize, dc: isize) -> usize {
    (1..WIN_LENGTH as isize)
        .map_while(|i| from.offset(dr, dc, i))
        .take_while(|c| board.is_owned_by(*c, player))
        .count()
}

/// Length of `player`'s run through `at` along `direction`.
///
/// Counting is capped at `WIN_LENGTH - 1` per side, which is enough to
/// decide a win.
pub fn run_length(board: &Board, at: Coord, player: Player, direction: Direction) -> usize {
    let (dr, dc) = direction.step();
    1 + count_from(board, at, player, dr, dc) + count_from(board, at, player, -dr, -dc)
}

/// Returns the winner if the marker at `last` completes a line of five.
///
/// Returns `None` for an empty or off-board `last`.
#[instrument(skip(board), fields(size = board.size()))]
pub fn check_winner_at(board: &Board, last: Coord) -> Option<Player> {
    let player = board.get(last)?.player()?;

    let direction = Direction::iter().find(|d| run_length(board, last, player, *d) >= WIN_LENGTH)?;
    debug!(?player, ?direction, "Line of five completed");
    Some(player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn place_all(board: &mut Board, player: Player, coords: &[(usize, usize)]) {
        for &(row, col) in coords {
            board.set(Coord::new(row, col), Cell::Occupied(player)).unwrap();
        }
    }

    #[test]
    fn test_no_winner_empty_cell() {
        let board = Board::new(9);
        assert_eq!(check_winner_at(&board, Coord::new(4, 4)), None);
        assert_eq!(check_winner_at(&board, Coord::new(40, 4)), None);
    }

    #[test]
    fn test_winner_each_direction() {
        let lines: [(Direction, [(usize, usize); 5]); 4] = [
            (Direction::Horizontal, [(3, 1), (3, 2), (3, 3), (3, 4), (3, 5)]),
            (Direction::Vertical, [(0, 6), (1, 6), (2, 6), (3, 6), (4, 6)]),
            (Direction::DiagonalDown, [(2, 2), (3, 3), (4, 4), (5, 5), (6, 6)]),
            (Direction::DiagonalUp, [(8, 0), (7, 1), (6, 2), (5, 3), (4, 4)]),
        ];

        for (direction, line) in lines {
            let mut board = Board::new(9);
            place_all(&mut board, Player::Two, &line);
            for &(row, col) in &line {
                let at = Coord::new(row, col);
                assert_eq!(run_length(&board, at, Player::Two, direction), 5, "{direction:?}");
                assert_eq!(check_winner_at(&board, at), Some(Player::Two), "{direction:?}");
            }
        }
    }

    #[test]
    fn test_four_is_not_enough() {
        let mut board = Board::new(9);
        place_all(&mut board, Player::One, &[(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!(check_winner_at(&board, Coord::new(0, 3)), None);
        assert_eq!(run_length(&board, Coord::new(0, 3), Player::One, Direction::Horizontal), 4);
    }

    #[test]
    fn test_opponent_breaks_run() {
        let mut board = Board::new(9);
        place_all(&mut board, Player::One, &[(1, 0), (1, 1), (1, 3), (1, 4), (1, 5)]);
        place_all(&mut board, Player::Two, &[(1, 2)]);
        assert_eq!(check_winner_at(&board, Coord::new(1, 4)), None);
    }

    #[test]
    fn test_gap_filled_in_middle_wins() {
        let mut board = Board::new(9);
        place_all(&mut board, Player::One, &[(5, 0), (5, 1), (5, 3), (5, 4)]);
        assert_eq!(check_winner_at(&board, Coord::new(5, 4)), None);
        place_all(&mut board, Player::One, &[(5, 2)]);
        assert_eq!(check_winner_at(&board, Coord::new(5, 2)), Some(Player::One));
    }

    #[test]
    fn test_overline_wins() {
        let mut board = Board::new(9);
        place_all(&mut board, Player::Two, &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]);
        assert_eq!(check_winner_at(&board, Coord::new(0, 5)), Some(Player::Two));
    }

    #[test]
    fn test_line_at_far_edge() {
        let mut board = Board::new(5);
        place_all(&mut board, Player::One, &[(0, 4), (1, 3), (2, 2), (3, 1), (4, 0)]);
        assert_eq!(check_winner_at(&board, Coord::new(0, 4)), Some(Player::One));
        assert_eq!(check_winner_at(&board, Coord::new(4, 0)), Some(Player::One));
    }
}
