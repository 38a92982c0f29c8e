//! Error types for board mutation and move selection.
//!
//! Every precondition violation surfaces here as a typed failure. Nothing
//! in this crate writes a cell it has rejected.

use super::Position;

/// Error that can occur when marking a square.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The requested square number is outside 1-9.
    #[display("Position {} is out of bounds (must be 1-9)", _0)]
    InvalidPosition(u8),

    /// The square already holds a marker.
    #[display("Square {} is already occupied", _0)]
    CellOccupied(Position),
}

impl std::error::Error for BoardError {}

/// Error returned by the move selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SelectError {
    /// No unmarked square is left to choose from.
    #[display("No unmarked squares left to choose from")]
    BoardFull,
}

impl std::error::Error for SelectError {}

/// Error parsing a marker from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MarkerError {
    /// The input was empty.
    #[display("Marker must not be empty")]
    Empty,

    /// The input held more than one character.
    #[display("Marker must be a single character, got {:?}", _0)]
    TooLong(String),

    /// The input was a whitespace character.
    #[display("Marker must not be blank")]
    Blank,
}

impl std::error::Error for MarkerError {}
