//! Square board storage.

use super::types::{Cell, Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Smallest supported board edge.
pub const MIN_BOARD_SIZE: usize = 3;

/// Largest supported board edge.
pub const MAX_BOARD_SIZE: usize = 20;

/// Clamps a requested board edge into the supported range.
#[instrument]
pub fn clamp_size(requested: usize) -> usize {
    let size = requested.clamp(MIN_BOARD_SIZE, MAX_BOARD_SIZE);
    if size != requested {
        debug!(requested, size, "Board size clamped");
    }
    size
}

/// N×N board, cells stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

/// Unchecked wire form of a [`Board`].
#[derive(Deserialize)]
struct BoardRepr {
    size: usize,
    cells: Vec<Cell>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = String;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&repr.size) {
            return Err(format!(
                "board size {} outside {}..={}",
                repr.size, MIN_BOARD_SIZE, MAX_BOARD_SIZE
            ));
        }
        if repr.cells.len() != repr.size * repr.size {
            return Err(format!(
                "{} cells for a {}x{} board",
                repr.cells.len(),
                repr.size,
                repr.size
            ));
        }
        Ok(Self {
            size: repr.size,
            cells: repr.cells,
        })
    }
}

impl Board {
    /// Creates an empty board. The size is clamped to the supported range.
    #[instrument]
    pub fn new(size: usize) -> Self {
        let size = clamp_size(size);
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Edge length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the coordinate lies on the board.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.size && coord.col < self.size
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Sets the cell at the given coordinate.
    ///
    /// This is raw storage; write-once is enforced by the move contracts.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> Result<(), &'static str> {
        let i = self.index(coord).ok_or("Coordinate out of bounds")?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Checks if a cell is on the board and empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        matches!(self.get(coord), Some(Cell::Empty))
    }

    /// Returns true if `player` occupies the cell.
    pub fn is_owned_by(&self, coord: Coord, player: Player) -> bool {
        self.get(coord) == Some(Cell::Occupied(player))
    }

    /// Checks if every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    /// All empty coordinates in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.coords().filter(|c| self.is_empty(*c)).collect()
    }

    /// Iterates every coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| Coord::new(row, col)))
    }

    /// Formats the board as a human-readable grid.
    ///
    /// `.` is empty, `O` is player one, `X` is player two.
    pub fn display(&self) -> String {
        let mut result = String::from("   ");
        for col in 0..self.size {
            result.push_str(&format!("{:>3}", col));
        }
        result.push('\n');
        for row in 0..self.size {
            result.push_str(&format!("{:>3}", row));
            for col in 0..self.size {
                let symbol = match self.cells[row * self.size + col] {
                    Cell::Empty => '.',
                    Cell::Occupied(Player::One) => 'O',
                    Cell::Occupied(Player::Two) => 'X',
                };
                result.push_str(&format!("{:>3}", symbol));
            }
            result.push('\n');
        }
        result
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.contains(coord).then(|| coord.row * self.size + coord.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(7);
        assert_eq!(board.size(), 7);
        assert_eq!(board.empty_cells().len(), 49);
        assert!(!board.is_full());
    }

    #[test]
    fn test_size_is_clamped() {
        assert_eq!(Board::new(0).size(), MIN_BOARD_SIZE);
        assert_eq!(Board::new(1).size(), MIN_BOARD_SIZE);
        assert_eq!(Board::new(99).size(), MAX_BOARD_SIZE);
        assert_eq!(clamp_size(12), 12);
    }

    #[test]
    fn test_set_out_of_bounds_fails() {
        let mut board = Board::new(3);
        assert!(board.set(Coord::new(3, 0), Cell::Occupied(Player::One)).is_err());
        assert_eq!(board.get(Coord::new(0, 3)), None);
        assert!(!board.is_empty(Coord::new(5, 5)));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(3);
        let coords: Vec<_> = board.coords().collect();
        for coord in coords {
            board.set(coord, Cell::Occupied(Player::Two)).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.occupied(), 9);
        assert!(board.empty_cells().is_empty());
    }

    #[test]
    fn test_deserialize_checks_shape() {
        let mut board = Board::new(5);
        board.set(Coord::new(4, 4), Cell::Occupied(Player::Two)).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        let back: Board = serde_json::from_str(&json).unwrap();
        assert_eq!(back.get(Coord::new(4, 4)), Some(Cell::Occupied(Player::Two)));

        let short = serde_json::from_str::<Board>(r#"{"size":5,"cells":["Empty"]}"#);
        assert!(short.is_err());

        let tiny = serde_json::from_str::<Board>(r#"{"size":1,"cells":["Empty"]}"#);
        assert!(tiny.is_err());
    }

    #[test]
    fn test_display_marks() {
        let mut board = Board::new(3);
        board.set(Coord::new(0, 0), Cell::Occupied(Player::One)).unwrap();
        board.set(Coord::new(2, 1), Cell::Occupied(Player::Two)).unwrap();
        let text = board.display();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[1], "  0  O  .  .");
        assert_eq!(lines[3], "  2  .  X  .");
    }
}
