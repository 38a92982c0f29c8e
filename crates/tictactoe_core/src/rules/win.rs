//! Win detection logic for tic-tac-toe.

use super::super::{Board, Marker, Position};
use tracing::instrument;

/// Three squares that win when held by one marker.
pub type Line = [Position; 3];

/// Every winning line, in scan order: rows top to bottom, columns left to
/// right, then the two diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the marker holding the first complete line, if any.
///
/// Lines are scanned in [`LINES`] order, so the result is deterministic
/// even on boards no legal game could produce.
#[instrument(skip(board))]
pub fn winning_marker(board: &Board) -> Option<Marker> {
    LINES.iter().find_map(|&[a, b, c]| {
        let marker = board.cell(a).marker()?;
        (board.cell(b).marker() == Some(marker) && board.cell(c).marker() == Some(marker))
            .then_some(marker)
    })
}

/// Returns the empty square of the first line where `marker` holds the
/// other two.
///
/// This is the square that completes a line for `marker` on its next move.
#[instrument(skip(board))]
pub fn completing_position(board: &Board, marker: Marker) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let held = line
            .iter()
            .filter(|&&pos| board.cell(pos).marker() == Some(marker))
            .count();
        let mut empty = line.iter().copied().filter(|&pos| board.is_unmarked(pos));

        match (held, empty.next(), empty.next()) {
            (2, Some(pos), None) => Some(pos),
            _ => None,
        }
    })
}
