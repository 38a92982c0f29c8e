//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Tic Tac Toe - play a heuristic computer opponent in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Terminal tic-tac-toe against a heuristic opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game
    Play {
        /// Seed for the computer's random choices (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Rounds needed to win a set (overrides config)
        #[arg(long)]
        rounds_to_win: Option<u32>,
    },

    /// Print the square the computer would choose on a board
    Suggest {
        /// Nine squares, row-major; space, '.' or '_' mark an empty square
        #[arg(short, long)]
        board: String,

        /// Marker the computer plays
        #[arg(short, long, default_value = "O")]
        attacker: String,

        /// Marker of the opponent
        #[arg(short, long, default_value = "X")]
        defender: String,

        /// Seed for the fallback tier
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for `suggest`.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable line
    Text,
    /// JSON object
    Json,
}
