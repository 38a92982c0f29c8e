//! Tic-tac-toe board model and heuristic move selection.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid, marking, win and full detection
//! - **Rules**: the fixed table of winning lines and the pure checks over it
//! - **Selector**: the automated player's four-tier move heuristic
//!
//! Everything here is synchronous and free of I/O. Turn order, prompting
//! and scoring belong to the caller.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{select_move, Board, Marker, Position};
//! use rand::rngs::mock::StepRng;
//!
//! let (x, o) = (Marker::new('X'), Marker::new('O'));
//! let mut board = Board::new();
//! board.mark(1, x)?;
//! board.mark(2, x)?;
//!
//! let mut rng = StepRng::new(0, 0);
//! assert_eq!(select_move(&board, o, x, &mut rng)?, Position::TopRight);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod position;
mod rules;
mod selector;
mod types;

pub use error::{BoardError, MarkerError, SelectError};
pub use position::Position;
pub use rules::{LINES, Line, completing_position, is_full, winning_marker};
pub use selector::{Selection, Tier, choose, select_move};
pub use types::{Board, Cell, Marker};
