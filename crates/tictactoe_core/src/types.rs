//! Core domain types for tic-tac-toe.

use super::{BoardError, MarkerError, Position, rules};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, instrument};

/// Single-character identity of a player.
///
/// Markers are opaque: two players are told apart only by comparing
/// their characters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub struct Marker(char);

impl Marker {
    /// Creates a marker from a character.
    pub fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Returns the marker's character.
    pub fn symbol(self) -> char {
        self.0
    }
}

impl FromStr for Marker {
    type Err = MarkerError;

    /// Accepts exactly one non-whitespace character.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(MarkerError::Empty),
            (Some(c), None) if c.is_whitespace() => Err(MarkerError::Blank),
            (Some(c), None) => Ok(Self(c)),
            (Some(_), Some(_)) => Err(MarkerError::TooLong(s.to_string())),
        }
    }
}

/// A square's contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has marked the square.
    Empty,
    /// Square marked by a player.
    MarkedBy(Marker),
}

impl Cell {
    /// Returns the marker occupying this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::MarkedBy(marker) => Some(marker),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// 3x3 tic-tac-toe board.
///
/// A cell goes from [`Cell::Empty`] to [`Cell::MarkedBy`] at most once;
/// only [`Board::reset`] clears it again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (index 0 is square 1).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given position.
    pub fn cell(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    /// Checks if the square at the given position is unmarked.
    pub fn is_unmarked(&self, pos: Position) -> bool {
        self.cell(pos).is_empty()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Marks the square with the given number (1-9).
    #[instrument(skip(self))]
    pub fn mark(&mut self, number: u8, marker: Marker) -> Result<(), BoardError> {
        let pos = Position::try_from(number)?;
        self.mark_at(pos, marker)
    }

    /// Marks the given square.
    ///
    /// Fails with [`BoardError::CellOccupied`] rather than overwrite.
    #[instrument(skip(self))]
    pub fn mark_at(&mut self, pos: Position, marker: Marker) -> Result<(), BoardError> {
        if !self.is_unmarked(pos) {
            return Err(BoardError::CellOccupied(pos));
        }
        self.cells[pos.index()] = Cell::MarkedBy(marker);
        debug!(square = pos.number(), %marker, "Square marked");
        Ok(())
    }

    /// Returns the unmarked squares in ascending order.
    pub fn unmarked_positions(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.is_unmarked(pos))
            .collect()
    }

    /// Checks if every square is marked.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Returns the marker holding a complete line, scanning lines in table order.
    pub fn winning_marker(&self) -> Option<Marker> {
        rules::winning_marker(self)
    }

    /// Checks if any marker holds a complete line.
    pub fn someone_won(&self) -> bool {
        self.winning_marker().is_some()
    }

    /// Clears every square.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; 9];
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = |pos: Position| match self.cell(pos) {
            Cell::Empty => ' ',
            Cell::MarkedBy(marker) => marker.symbol(),
        };

        for (row, squares) in Position::ALL.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "-----+-----+-----")?;
            }
            writeln!(f, "     |     |")?;
            writeln!(
                f,
                "  {}  |  {}  |  {}",
                symbol(squares[0]),
                symbol(squares[1]),
                symbol(squares[2])
            )?;
            writeln!(f, "     |     |")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn x() -> Marker {
        Marker::new('X')
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(board.cells().iter().all(|c| c.is_empty()));
        assert_eq!(board.unmarked_positions(), Position::ALL.to_vec());
    }

    #[test]
    fn test_mark_rejects_out_of_bounds() {
        let mut board = Board::new();
        assert_eq!(board.mark(0, x()), Err(BoardError::InvalidPosition(0)));
        assert_eq!(board.mark(10, x()), Err(BoardError::InvalidPosition(10)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_mark_never_overwrites() {
        let mut board = Board::new();
        board.mark(5, x()).unwrap();
        let err = board.mark(5, Marker::new('O')).unwrap_err();
        assert_eq!(err, BoardError::CellOccupied(Position::Center));
        assert_eq!(board.cell(Position::Center), Cell::MarkedBy(x()));
    }

    #[test]
    fn test_marker_parsing() {
        assert_eq!("X".parse::<Marker>(), Ok(Marker::new('X')));
        assert_eq!("€".parse::<Marker>(), Ok(Marker::new('€')));
        assert_eq!("".parse::<Marker>(), Err(MarkerError::Empty));
        assert_eq!(" ".parse::<Marker>(), Err(MarkerError::Blank));
        assert_eq!(
            "XO".parse::<Marker>(),
            Err(MarkerError::TooLong("XO".to_string()))
        );
    }

    #[test]
    fn test_display_draws_grid() {
        let mut board = Board::new();
        board.mark(1, x()).unwrap();
        board.mark(9, Marker::new('O')).unwrap();

        let drawn = board.to_string();
        let lines: Vec<_> = drawn.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[1], "  X  |     |   ");
        assert_eq!(lines[3], "-----+-----+-----");
        assert_eq!(lines[9], "     |     |  O");
    }
}
