//! One-shot heuristic query over a board given on the command line.

use crate::cli::OutputFormat;
use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;
use tictactoe_core::{Board, Marker, Position, Tier, choose};
use tracing::instrument;

/// Characters that stand for an empty square.
const EMPTY_SYMBOLS: [char; 3] = [' ', '.', '_'];

/// Answer printed by `suggest`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Square number (1-9).
    pub square: u8,
    /// Square label.
    pub label: &'static str,
    /// Heuristic tier that chose the square.
    pub tier: Tier,
}

/// Parses nine row-major squares into a board.
#[instrument]
pub fn parse_board(text: &str) -> Result<Board> {
    let symbols: Vec<char> = text.chars().collect();
    if symbols.len() != 9 {
        anyhow::bail!("Board must have exactly 9 squares, got {}", symbols.len());
    }

    let mut board = Board::new();
    for (pos, symbol) in Position::ALL.into_iter().zip(symbols) {
        if !EMPTY_SYMBOLS.contains(&symbol) {
            board.mark_at(pos, Marker::new(symbol))?;
        }
    }
    Ok(board)
}

/// Runs the selector for `attacker` and renders the answer.
#[instrument(skip(rng))]
pub fn suggest<G: Rng + ?Sized>(
    board: &str,
    attacker: &str,
    defender: &str,
    format: OutputFormat,
    rng: &mut G,
) -> Result<String> {
    let board = parse_board(board)?;
    let attacker: Marker = attacker.parse().context("Invalid attacker marker")?;
    let defender: Marker = defender.parse().context("Invalid defender marker")?;

    let selection = choose(&board, attacker, defender, rng)?;
    let suggestion = Suggestion {
        square: selection.position.number(),
        label: selection.position.label(),
        tier: selection.tier,
    };

    match format {
        OutputFormat::Text => Ok(format!(
            "{} ({}) by {}",
            suggestion.square, suggestion.label, suggestion.tier
        )),
        OutputFormat::Json => {
            serde_json::to_string(&suggestion).context("Failed to encode suggestion")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_parse_board() {
        let board = parse_board("XX._O_  .").unwrap();
        assert_eq!(board.unmarked_positions().len(), 6);
        assert_eq!(
            board.cell(Position::Center).marker(),
            Some(Marker::new('O'))
        );
    }

    #[test]
    fn test_parse_board_wrong_length() {
        assert!(parse_board("XX").is_err());
        assert!(parse_board("XXXXXXXXXX").is_err());
    }

    #[test]
    fn test_suggest_text() {
        let out = suggest("XX.......", "O", "X", OutputFormat::Text, &mut StepRng::new(0, 0)).unwrap();
        assert_eq!(out, "3 (Top-right) by block");
    }

    #[test]
    fn test_suggest_json() {
        let out = suggest("....X....", "O", "X", OutputFormat::Json, &mut StepRng::new(0, 0)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["square"], 1);
        assert_eq!(value["tier"], "fallback");
    }

    #[test]
    fn test_suggest_full_board_fails() {
        let err = suggest("XOXXOOOXX", "O", "X", OutputFormat::Text, &mut StepRng::new(0, 0)).unwrap_err();
        assert!(err.to_string().contains("No unmarked squares"));
    }
}
