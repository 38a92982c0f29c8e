//! Fixed-priority move heuristic for the automated player.
//!
//! Tiers are tried in order and the first one that yields a square wins:
//!
//! 1. [`Tier::WinNow`]: complete a line the attacker already holds two of
//! 2. [`Tier::Block`]: take the square completing the defender's line
//! 3. [`Tier::Center`]: take square 5
//! 4. [`Tier::Fallback`]: any unmarked square, drawn from the caller's RNG
//!
//! This is deliberately not a game-tree search.

use super::rules::completing_position;
use super::{Board, Marker, Position, SelectError};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The heuristic tier that produced a move.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Tier {
    /// Completes one of the attacker's lines.
    WinNow,
    /// Occupies the square that would complete the defender's line.
    Block,
    /// Takes the center square.
    Center,
    /// Random unmarked square.
    Fallback,
}

/// A chosen square together with the tier that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Square to mark next.
    pub position: Position,
    /// Tier that produced the square.
    pub tier: Tier,
}

impl Selection {
    fn new(position: Position, tier: Tier) -> Self {
        Self { position, tier }
    }
}

/// Picks the next square for `attacker`, reporting which tier decided.
///
/// The board is only read; applying the move is the caller's job.
/// `rng` is consulted only when the fallback tier is reached.
#[instrument(skip(board, rng))]
pub fn choose<R: Rng + ?Sized>(
    board: &Board,
    attacker: Marker,
    defender: Marker,
    rng: &mut R,
) -> Result<Selection, SelectError> {
    let unmarked = board.unmarked_positions();
    if unmarked.is_empty() {
        return Err(SelectError::BoardFull);
    }

    let selection = if let Some(pos) = completing_position(board, attacker) {
        Selection::new(pos, Tier::WinNow)
    } else if let Some(pos) = completing_position(board, defender) {
        Selection::new(pos, Tier::Block)
    } else if board.is_unmarked(Position::Center) {
        Selection::new(Position::Center, Tier::Center)
    } else {
        let pos = unmarked.choose(rng).copied().ok_or(SelectError::BoardFull)?;
        Selection::new(pos, Tier::Fallback)
    };

    debug!(
        square = selection.position.number(),
        tier = %selection.tier,
        "Heuristic chose square"
    );
    Ok(selection)
}

/// Picks the next square for `attacker` against `defender`.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    attacker: Marker,
    defender: Marker,
    rng: &mut R,
) -> Result<Position, SelectError> {
    choose(board, attacker, defender, rng).map(|selection| selection.position)
}
