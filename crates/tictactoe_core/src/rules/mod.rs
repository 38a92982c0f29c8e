//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). They hold no state and
//! are shared by the board's own queries and by the move selector.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, completing_position, winning_marker};
