//! Line-oriented terminal prompts.
//!
//! Generic over the input and output streams so sessions can be driven
//! by scripted input in tests.

use anyhow::{Context, Result};
use crossterm::{cursor, execute, terminal};
use std::fmt::Display;
use std::io::{BufRead, Write};
use tictactoe_core::{Board, Marker, Position};
use tracing::{debug, instrument};

/// Widest text printed inside a box.
const BOX_TEXT_WIDTH: usize = 76;

/// Prompting console over a reader and a writer.
pub struct Console<R, W> {
    input: R,
    output: W,
    clear_screen: bool,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console; `clear_screen` enables terminal clearing.
    pub fn new(input: R, output: W, clear_screen: bool) -> Self {
        Self {
            input,
            output,
            clear_screen,
        }
    }

    /// Consumes the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Writes one line.
    pub fn say(&mut self, text: impl Display) -> Result<()> {
        writeln!(self.output, "{}", text).context("Failed to write to terminal")
    }

    /// Writes an empty line.
    pub fn blank(&mut self) -> Result<()> {
        self.say("")
    }

    /// Reads one line with the trailing newline removed.
    ///
    /// End of input is an error: every prompt needs an answer.
    pub fn read_line(&mut self) -> Result<String> {
        self.output.flush().context("Failed to flush terminal")?;
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from terminal")?;
        if read == 0 {
            anyhow::bail!("Input closed while waiting for an answer");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Clears the terminal when clearing is enabled.
    pub fn clear(&mut self) -> Result<()> {
        if self.clear_screen {
            execute!(
                self.output,
                terminal::Clear(terminal::ClearType::All),
                cursor::MoveTo(0, 0)
            )
            .context("Failed to clear terminal")?;
        }
        Ok(())
    }

    /// Prompts until a non-blank name is entered.
    #[instrument(skip(self))]
    pub fn ask_name(&mut self, prompt: &str) -> Result<String> {
        self.say(prompt)?;
        loop {
            let name = self.read_line()?;
            if !name.trim().is_empty() {
                return Ok(name);
            }
            self.say("Invalid name, blanks are not allowed")?;
        }
    }

    /// Prompts until a single-character marker is entered.
    #[instrument(skip(self))]
    pub fn ask_marker(&mut self) -> Result<Marker> {
        loop {
            self.say("Enter the marker you want to use: (typically X or O)")?;
            match self.read_line()?.parse::<Marker>() {
                Ok(marker) => return Ok(marker),
                Err(e) => {
                    debug!(error = %e, "Rejected marker");
                    self.say("Invalid choice, choice must be a single character")?;
                }
            }
        }
    }

    /// Prompts until an unmarked square is chosen, by number or label.
    #[instrument(skip(self, board))]
    pub fn ask_square(&mut self, board: &Board) -> Result<Position> {
        let open = board.unmarked_positions();
        self.say(format!("Choose a square: ({})", joinor(&open, ", ", "or")))?;
        loop {
            let answer = self.read_line()?;
            match Position::from_label_or_number(&answer) {
                Some(pos) if board.is_unmarked(pos) => return Ok(pos),
                _ => self.say("Sorry, that's not a valid choice.")?,
            }
        }
    }

    /// Asks whether to play another set.
    #[instrument(skip(self))]
    pub fn ask_play_again(&mut self) -> Result<bool> {
        loop {
            self.say("Would you like to play again? (y/n)")?;
            match self.read_line()?.to_lowercase().as_str() {
                "y" => return Ok(true),
                "n" => return Ok(false),
                _ => self.say("Sorry, must be y or n")?,
            }
        }
    }

    /// Waits for the enter key.
    pub fn wait_for_enter(&mut self) -> Result<()> {
        self.say("Press enter to continue")?;
        self.read_line().map(|_| ())
    }

    /// Prints text framed in a box, truncated to the box width.
    pub fn print_in_box(&mut self, text: &str) -> Result<()> {
        let text: String = text.chars().take(BOX_TEXT_WIDTH).collect();
        let width = text.chars().count() + 2;
        let rule = format!("+{}+", "-".repeat(width));
        let empty = format!("|{}|", " ".repeat(width));

        self.say(&rule)?;
        self.say(&empty)?;
        self.say(format!("| {} |", text))?;
        self.say(&empty)?;
        self.say(&rule)
    }
}

/// Joins items with `delimiter`, putting `word` before the last one.
///
/// Two items are joined by the word alone: `1 or 2`.
pub fn joinor<T: Display>(items: &[T], delimiter: &str, word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{} {} {}", first, word, second),
        [init @ .., last] => {
            let mut parts: Vec<String> = init.iter().map(ToString::to_string).collect();
            parts.push(format!("{} {}", word, last));
            parts.join(delimiter)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
        Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), false)
    }

    fn output(console: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(console.into_output()).unwrap()
    }

    #[test]
    fn test_joinor() {
        assert_eq!(joinor::<u8>(&[], ", ", "or"), "");
        assert_eq!(joinor(&[1], ", ", "or"), "1");
        assert_eq!(joinor(&[1, 2], ", ", "or"), "1 or 2");
        assert_eq!(joinor(&[1, 2, 3], ", ", "or"), "1, 2, or 3");
        assert_eq!(joinor(&[1, 2, 3], "; ", "and"), "1; 2; and 3");
    }

    #[test]
    fn test_ask_name_rejects_blank() {
        let mut c = console("  \nAda\n");
        assert_eq!(c.ask_name("Please enter your name:").unwrap(), "Ada");
        assert!(output(c).contains("Invalid name, blanks are not allowed"));
    }

    #[test]
    fn test_ask_marker_rejects_long_input() {
        let mut c = console("XO\n\n#\n");
        assert_eq!(c.ask_marker().unwrap(), Marker::new('#'));
        let out = output(c);
        assert_eq!(out.matches("Invalid choice").count(), 2);
    }

    #[test]
    fn test_ask_square_reprompts_on_occupied() {
        let mut board = Board::new();
        board.mark(5, Marker::new('O')).unwrap();
        let mut c = console("5\nten\n9\n");
        assert_eq!(c.ask_square(&board).unwrap(), Position::BottomRight);
        let out = output(c);
        assert!(out.contains("Choose a square: (1, 2, 3, 4, 6, 7, 8, or 9)"));
        assert_eq!(out.matches("Sorry, that's not a valid choice.").count(), 2);
    }

    #[test]
    fn test_ask_square_accepts_label() {
        let mut c = console("top right\n");
        assert_eq!(c.ask_square(&Board::new()).unwrap(), Position::TopRight);
    }

    #[test]
    fn test_ask_play_again_is_case_insensitive() {
        let mut c = console("maybe\nY\n");
        assert!(c.ask_play_again().unwrap());
        assert!(output(c).contains("Sorry, must be y or n"));
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut c = console("");
        assert!(c.ask_name("Name?").is_err());
    }

    #[test]
    fn test_print_in_box() {
        let mut c = console("");
        c.print_in_box("Ada: 1 <> Hal: 2").unwrap();
        let out = output(c);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "+------------------+");
        assert_eq!(lines[2], "| Ada: 1 <> Hal: 2 |");
        assert_eq!(lines[1].len(), lines[0].len());
    }

    #[test]
    fn test_print_in_box_truncates() {
        let mut c = console("");
        c.print_in_box(&"a".repeat(100)).unwrap();
        let out = output(c);
        assert_eq!(out.lines().nth(2).unwrap().len(), BOX_TEXT_WIDTH + 4);
    }
}
