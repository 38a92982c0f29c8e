//! Tic Tac Toe - terminal entry point.

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io;
use tictactoe_cli::cli::{Cli, Command, OutputFormat};
use tictactoe_cli::{Console, GameConfig, TicTacToeGame, suggest};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };

    match cli.command {
        Command::Play {
            seed,
            rounds_to_win,
        } => {
            let config = config.with_seed(seed).with_rounds_to_win(rounds_to_win)?;
            run_game(config)
        }
        Command::Suggest {
            board,
            attacker,
            defender,
            seed,
            format,
        } => run_suggest(&board, &attacker, &defender, seed.or(*config.seed()), format),
    }
}

/// Seeded when a seed is configured, otherwise from OS entropy.
fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => {
            debug!(seed, "Using seeded RNG");
            ChaCha8Rng::seed_from_u64(seed)
        }
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Runs an interactive session on stdin/stdout.
#[instrument(skip(config))]
fn run_game(config: GameConfig) -> Result<()> {
    info!(rounds_to_win = *config.rounds_to_win(), "Starting Tic Tac Toe");

    let console = Console::new(io::stdin().lock(), io::stdout().lock(), *config.clear_screen());
    let rng = make_rng(*config.seed());
    let summary = TicTacToeGame::setup(console, &config, rng)?.play()?;

    info!(
        rounds = *summary.rounds_played(),
        human_sets = *summary.human().set_wins(),
        computer_sets = *summary.computer().set_wins(),
        "Session finished"
    );
    Ok(())
}

/// Prints the heuristic's choice for a board.
fn run_suggest(
    board: &str,
    attacker: &str,
    defender: &str,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let mut rng = make_rng(seed);
    let answer = suggest(board, attacker, defender, format, &mut rng)?;
    println!("{}", answer);
    Ok(())
}
