//! Players and where their moves come from.

use crate::console::Console;
use anyhow::Result;
use derive_getters::Getters;
use derive_new::new;
use rand::Rng;
use std::io::{BufRead, Write};
use tictactoe_core::{Board, Marker, Position, Tier, choose};
use tracing::{debug, instrument};

/// How a player decides on a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum MoveSource {
    /// Prompted at the terminal.
    Human,
    /// Chosen by the fixed-priority heuristic.
    Heuristic,
}

impl MoveSource {
    /// Gets the next square for a player holding `marker` against `opponent`.
    ///
    /// The board is not changed; the caller applies the returned square.
    #[instrument(skip(self, board, console, rng), fields(source = %self))]
    pub fn next_move<R, W, G>(
        self,
        board: &Board,
        marker: Marker,
        opponent: Marker,
        console: &mut Console<R, W>,
        rng: &mut G,
    ) -> Result<Position>
    where
        R: BufRead,
        W: Write,
        G: Rng + ?Sized,
    {
        match self {
            MoveSource::Human => console.ask_square(board),
            MoveSource::Heuristic => {
                let selection = choose(board, marker, opponent, rng)?;
                if selection.tier == Tier::Fallback {
                    debug!(square = selection.position.number(), "No threat or center, picked at random");
                }
                Ok(selection.position)
            }
        }
    }
}

/// A participant with a name, marker, and running tallies.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct Player {
    /// Display name.
    name: String,
    /// Marker placed on the board.
    marker: Marker,
    /// Where this player's moves come from.
    source: MoveSource,
    /// Rounds won in the current set.
    #[new(default)]
    score: u32,
    /// Sets won this session.
    #[new(default)]
    set_wins: u32,
}

impl Player {
    /// Records a round win.
    pub fn record_round_win(&mut self) {
        self.score += 1;
    }

    /// Records a set win.
    pub fn record_set_win(&mut self) {
        self.set_wins += 1;
    }

    /// Clears the round score at the start of a new set.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use std::io::Cursor;

    #[test]
    fn test_tallies() {
        let mut player = Player::new("Ada".to_string(), Marker::new('X'), MoveSource::Human);
        assert_eq!(*player.score(), 0);
        player.record_round_win();
        player.record_round_win();
        player.record_set_win();
        assert_eq!(*player.score(), 2);
        player.reset_score();
        assert_eq!(*player.score(), 0);
        assert_eq!(*player.set_wins(), 1);
    }

    #[test]
    fn test_heuristic_source_ignores_console() {
        let mut board = Board::new();
        board.mark(1, Marker::new('X')).unwrap();
        board.mark(2, Marker::new('X')).unwrap();

        let mut console = Console::new(Cursor::new(Vec::<u8>::new()), Vec::<u8>::new(), false);
        let pos = MoveSource::Heuristic
            .next_move(
                &board,
                Marker::new('O'),
                Marker::new('X'),
                &mut console,
                &mut StepRng::new(0, 0),
            )
            .unwrap();
        assert_eq!(pos, Position::TopRight);
        assert!(console.into_output().is_empty());
    }

    #[test]
    fn test_human_source_prompts() {
        let mut console = Console::new(Cursor::new(b"7\n".to_vec()), Vec::<u8>::new(), false);
        let pos = MoveSource::Human
            .next_move(
                &Board::new(),
                Marker::new('X'),
                Marker::new('O'),
                &mut console,
                &mut StepRng::new(0, 0),
            )
            .unwrap();
        assert_eq!(pos, Position::BottomLeft);
    }
}
