//! Round and set orchestration between the human and the computer.

use crate::config::{FirstMove, GameConfig};
use crate::console::Console;
use crate::players::{MoveSource, Player};
use anyhow::{Context, Result};
use derive_getters::Getters;
use rand::Rng;
use rand::seq::SliceRandom;
use std::io::{BufRead, Write};
use tictactoe_core::{Board, Marker};
use tracing::{debug, info, instrument};

/// Which participant is about to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Turn {
    Human,
    Computer,
}

impl From<FirstMove> for Turn {
    fn from(first: FirstMove) -> Self {
        match first {
            FirstMove::Human => Turn::Human,
            FirstMove::Computer => Turn::Computer,
        }
    }
}

/// Final tallies of a finished session.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Summary {
    /// The human player with final scores.
    human: Player,
    /// The computer player with final scores.
    computer: Player,
    /// Rounds played across all sets.
    rounds_played: u32,
}

/// A terminal session of tic-tac-toe against the heuristic player.
pub struct TicTacToeGame<R, W, G> {
    board: Board,
    human: Player,
    computer: Player,
    console: Console<R, W>,
    rng: G,
    rounds_to_win: u32,
    first_to_move: Turn,
    current: Turn,
    rounds_played: u32,
}

impl<R: BufRead, W: Write, G: Rng> TicTacToeGame<R, W, G> {
    /// Prompts for names and the human's marker, then draws the computer's marker.
    #[instrument(skip_all)]
    pub fn setup(mut console: Console<R, W>, config: &GameConfig, mut rng: G) -> Result<Self> {
        console.clear()?;
        let human_name = console.ask_name("Please enter your name:")?;
        let human_marker = console.ask_marker()?;
        let computer_name = console.ask_name("Please enter the name of your computer opponent:")?;

        let options: Vec<Marker> = config
            .marker_options()?
            .into_iter()
            .filter(|&m| m != human_marker)
            .collect();
        let computer_marker = *options
            .choose(&mut rng)
            .context("No computer marker differs from the human's")?;
        info!(%human_marker, %computer_marker, "Markers assigned");

        let first_to_move = Turn::from(*config.first_to_move());
        Ok(Self {
            board: Board::new(),
            human: Player::new(human_name, human_marker, MoveSource::Human),
            computer: Player::new(computer_name, computer_marker, MoveSource::Heuristic),
            console,
            rng,
            rounds_to_win: *config.rounds_to_win(),
            first_to_move,
            current: first_to_move,
            rounds_played: 0,
        })
    }

    /// Plays sets until the human declines another.
    #[instrument(skip(self))]
    pub fn play(mut self) -> Result<Summary> {
        self.display_welcome_message()?;
        loop {
            loop {
                self.display_score()?;
                self.display_board()?;
                self.play_round()?;
                self.post_round()?;
                if self.set_decided() {
                    break;
                }
                self.round_reset()?;
            }
            self.post_set()?;
            if !self.console.ask_play_again()? {
                break;
            }
            self.game_reset()?;
        }
        self.console.say(format!(
            "Thanks for playing Tic Tac Toe! Goodbye {}!",
            self.human.name()
        ))?;
        self.console.blank()?;

        Ok(Summary {
            human: self.human,
            computer: self.computer,
            rounds_played: self.rounds_played,
        })
    }

    fn play_round(&mut self) -> Result<()> {
        loop {
            self.current_player_moves()?;
            if self.board.someone_won() || self.board.is_full() {
                break;
            }
            if self.current == Turn::Human {
                self.reset_screen()?;
            }
        }
        self.rounds_played += 1;
        Ok(())
    }

    fn current_player_moves(&mut self) -> Result<()> {
        let (mover, opponent, next) = match self.current {
            Turn::Human => (&self.human, &self.computer, Turn::Computer),
            Turn::Computer => (&self.computer, &self.human, Turn::Human),
        };
        let marker = *mover.marker();
        let pos = mover.source().next_move(
            &self.board,
            marker,
            *opponent.marker(),
            &mut self.console,
            &mut self.rng,
        )?;
        debug!(player = %mover.name(), square = pos.number(), "Move chosen");

        self.board.mark_at(pos, marker)?;
        self.current = next;
        Ok(())
    }

    fn post_round(&mut self) -> Result<()> {
        let winner = self.board.winning_marker();
        if winner == Some(*self.human.marker()) {
            self.human.record_round_win();
        } else if winner == Some(*self.computer.marker()) {
            self.computer.record_round_win();
        }
        info!(
            human = *self.human.score(),
            computer = *self.computer.score(),
            "Round finished"
        );

        self.reset_screen()?;
        let result = match winner {
            Some(m) if m == *self.human.marker() => format!("======> {} won! <======", self.human.name()),
            Some(m) if m == *self.computer.marker() => {
                format!("======> {} won! <======", self.computer.name())
            }
            _ => "======> It's a tie! <======".to_string(),
        };
        self.console.say(result)?;
        self.console.wait_for_enter()
    }

    fn set_decided(&self) -> bool {
        *self.human.score() >= self.rounds_to_win || *self.computer.score() >= self.rounds_to_win
    }

    fn post_set(&mut self) -> Result<()> {
        if *self.human.score() >= self.rounds_to_win {
            self.human.record_set_win();
        } else if *self.computer.score() >= self.rounds_to_win {
            self.computer.record_set_win();
        }
        info!(
            human = *self.human.set_wins(),
            computer = *self.computer.set_wins(),
            "Set finished"
        );

        self.console.blank()?;
        self.console.say("Set Wins:")?;
        let text = format!(
            "{}: {} <> {}: {}",
            self.human.name(),
            self.human.set_wins(),
            self.computer.name(),
            self.computer.set_wins()
        );
        self.console.print_in_box(&text)?;
        self.console.blank()
    }

    fn round_reset(&mut self) -> Result<()> {
        self.board.reset();
        self.current = self.first_to_move;
        self.console.clear()
    }

    fn game_reset(&mut self) -> Result<()> {
        self.human.reset_score();
        self.computer.reset_score();
        self.round_reset()?;
        self.console.say("Let's play again!")?;
        self.console.blank()
    }

    fn reset_screen(&mut self) -> Result<()> {
        self.console.clear()?;
        self.display_score()?;
        self.display_board()
    }

    fn display_welcome_message(&mut self) -> Result<()> {
        self.console.clear()?;
        self.console.say("Welcome to Tic Tac Toe")?;
        self.console.blank()?;
        self.console
            .say(format!("The first to {} wins the set!", self.rounds_to_win))?;
        self.console.blank()
    }

    fn display_score(&mut self) -> Result<()> {
        self.console.blank()?;
        self.console.say("Scoreboard:")?;
        let text = format!(
            "{}: {} <> {}: {}",
            self.human.name(),
            self.human.score(),
            self.computer.name(),
            self.computer.score()
        );
        self.console.print_in_box(&text)?;
        self.console.blank()
    }

    fn display_board(&mut self) -> Result<()> {
        self.console.say(format!(
            "You are a {}. {} is a {}.",
            self.human.marker(),
            self.computer.name(),
            self.computer.marker()
        ))?;
        self.console.blank()?;
        self.console.say(&self.board)?;
        Ok(())
    }
}
