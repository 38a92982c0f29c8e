//! Terminal tic-tac-toe against a heuristic computer opponent.
//!
//! # Architecture
//!
//! - **Console**: prompts and re-prompts over any reader/writer pair
//! - **Players**: a name, a marker, tallies, and a [`MoveSource`]
//! - **Game**: round and set loop, scoreboard, results
//! - **Suggest**: one-shot heuristic query for a given board
//!
//! Board rules and move selection live in `tictactoe_core`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
mod config;
mod console;
mod game;
mod players;
mod suggest;

pub use config::{ConfigError, FirstMove, GameConfig};
pub use console::{Console, joinor};
pub use game::{Summary, TicTacToeGame};
pub use players::{MoveSource, Player};
pub use suggest::{Suggestion, parse_board, suggest};
