//! Interactive console play.
//!
//! A line-oriented front end for two players sharing one terminal. Each line
//! is one of:
//!
//! - `row col` - place a stone for the player to move (e.g. `3 4`)
//! - `pass` - pass the turn
//! - `quit` - leave the game
//!
//! The session owns its [`Board`] and renders it before every prompt. Play
//! ends after two consecutive passes.
//!
//! ## Example
//!
//! ```
//! use go_rules::board::Board;
//! use go_rules::console::{Console, Outcome};
//!
//! let mut console = Console::new(Board::new(5).unwrap());
//! let input = "2 2\npass\npass\n".as_bytes();
//! let mut output = Vec::new();
//! let outcome = console.run(input, &mut output).unwrap();
//! assert_eq!(outcome, Outcome::Finished);
//! ```

use std::io::{self, BufRead, Write};

use tracing::debug;

use crate::board::Board;

const USAGE_INPUT: &str = "Invalid input. Use format: row col";
const USAGE_NUMBERS: &str = "Invalid numbers. Use format: row col";

/// What the session should do after handling one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Nothing to report
    Silent,
    /// Show a message before the next prompt
    Message(String),
    Quit,
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Both players passed
    Finished,
    /// A player typed `quit`
    Quit,
    /// Input ran out before the game ended
    InputClosed,
}

/// Console session state.
pub struct Console {
    board: Board,
}

impl Console {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Run the prompt loop until the game ends, `quit`, or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> io::Result<Outcome> {
        let n = self.board.size();
        writeln!(output, "Welcome to Go!")?;
        writeln!(output, "Enter moves as 'row col' (e.g., '3 4')")?;
        writeln!(output, "Enter 'pass' to pass your turn")?;
        writeln!(output, "Enter 'quit' to exit")?;
        writeln!(output, "Starting with {n}x{n} board...")?;

        // Lines are read as bytes and decoded lossily
        let mut buf = Vec::new();
        while !self.board.is_game_over() {
            writeln!(output, "\n{}", self.board)?;
            write!(output, "Enter move for {}: ", self.board.turn())?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(output)?;
                return Ok(Outcome::InputClosed);
            }

            match self.execute(&String::from_utf8_lossy(&buf)) {
                Response::Silent => {}
                Response::Message(msg) => writeln!(output, "{msg}")?,
                Response::Quit => {
                    writeln!(output, "Thanks for playing!")?;
                    return Ok(Outcome::Quit);
                }
            }
        }

        writeln!(output, "\n{}", self.board)?;
        writeln!(output, "Game over! Both players passed.")?;
        writeln!(output, "Thanks for playing!")?;
        Ok(Outcome::Finished)
    }

    /// Interpret one line of input against the board.
    pub fn execute(&mut self, line: &str) -> Response {
        let input = line.trim();
        match input {
            "" => Response::Silent,
            "quit" => Response::Quit,
            "pass" => {
                let mover = self.board.turn();
                self.board.pass();
                Response::Message(format!("{mover} passes"))
            }
            _ => {
                let parts: Vec<&str> = input.split_whitespace().collect();
                if parts.len() != 2 {
                    return Response::Message(USAGE_INPUT.to_string());
                }

                let (Ok(row), Ok(col)) = (parts[0].parse::<isize>(), parts[1].parse::<isize>())
                else {
                    return Response::Message(USAGE_NUMBERS.to_string());
                };

                match self.board.place_stone(row, col) {
                    Ok(()) => Response::Silent,
                    Err(e) => {
                        debug!(input, %e, "console move rejected");
                        Response::Message(format!("Invalid move: {e}. Try again."))
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Stone;

    fn console(size: usize) -> Console {
        Console::new(Board::new(size).unwrap())
    }

    #[test]
    fn test_place_stone_command() {
        let mut console = console(5);
        assert_eq!(console.execute("2 3"), Response::Silent);
        assert_eq!(console.board().get(2, 3), Some(Stone::Black));
        assert_eq!(console.board().turn(), Stone::White);
    }

    #[test]
    fn test_extra_whitespace_is_accepted() {
        let mut console = console(5);
        assert_eq!(console.execute("  1    4  "), Response::Silent);
        assert_eq!(console.board().get(1, 4), Some(Stone::Black));
    }

    #[test]
    fn test_pass_command() {
        let mut console = console(5);
        assert_eq!(
            console.execute("pass"),
            Response::Message("● passes".to_string())
        );
        assert_eq!(console.board().turn(), Stone::White);
        assert_eq!(console.board().consecutive_passes(), 1);
    }

    #[test]
    fn test_quit_and_blank() {
        let mut console = console(5);
        assert_eq!(console.execute(""), Response::Silent);
        assert_eq!(console.execute("quit"), Response::Quit);
    }

    #[test]
    fn test_malformed_input() {
        let mut console = console(5);
        for line in ["3", "1 2 3"] {
            assert_eq!(
                console.execute(line),
                Response::Message(USAGE_INPUT.to_string())
            );
        }
        for line in ["a b", "1 x"] {
            assert_eq!(
                console.execute(line),
                Response::Message(USAGE_NUMBERS.to_string())
            );
        }
        assert_eq!(console.board().turn(), Stone::Black);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut console = console(5);
        console.execute("0 0");

        let Response::Message(msg) = console.execute("0 0") else {
            panic!("occupied point should produce a message");
        };
        assert!(msg.contains("occupied"), "got: {msg}");

        let Response::Message(msg) = console.execute("-1 2") else {
            panic!("negative row should produce a message");
        };
        assert!(msg.contains("off the board"), "got: {msg}");
        assert_eq!(console.board().turn(), Stone::White);
    }

    #[test]
    fn test_run_until_both_pass() {
        let mut console = console(5);
        let input = "2 2\n1 1\npass\npass\n2 3\n".as_bytes();
        let mut output = Vec::new();

        let outcome = console.run(input, &mut output).unwrap();
        assert_eq!(outcome, Outcome::Finished);

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("Welcome to Go!"));
        assert!(text.contains("Starting with 5x5 board..."));
        assert!(text.contains("○ passes"));
        assert!(text.ends_with("Game over! Both players passed.\nThanks for playing!\n"));
        // Input after the game ended is never read
        assert_eq!(console.board().get(2, 3), None);
    }

    #[test]
    fn test_run_survives_non_utf8_line() {
        let mut console = console(5);
        let mut output = Vec::new();
        let input: &[u8] = b"\xff\xfe\n2 2\npass\npass\n";

        let outcome = console.run(input, &mut output).unwrap();
        assert_eq!(outcome, Outcome::Finished);
        assert_eq!(console.board().get(2, 2), Some(Stone::Black));

        let text = String::from_utf8(output).unwrap();
        assert!(text.contains(USAGE_INPUT), "got: {text}");
    }

    #[test]
    fn test_run_quit() {
        let mut console = console(5);
        let mut output = Vec::new();
        let outcome = console.run("4 4\nquit\n".as_bytes(), &mut output).unwrap();
        assert_eq!(outcome, Outcome::Quit);
        assert_eq!(console.board().get(4, 4), Some(Stone::Black));
    }

    #[test]
    fn test_run_input_closed() {
        let mut console = console(5);
        let mut output = Vec::new();
        let outcome = console.run("pass\n".as_bytes(), &mut output).unwrap();
        assert_eq!(outcome, Outcome::InputClosed);
        assert!(!console.board().is_game_over());
    }
}
