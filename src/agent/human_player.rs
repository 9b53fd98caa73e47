//! Human player implementation that gets moves from terminal input.
//!
//! `HumanPlayer` implements the [`Player`] trait for a person typing
//! coordinates at the terminal. Each turn it prompts, reads one line, and
//! either returns the chosen cell or re-prompts:
//!
//! - **`row col`** (1-based, e.g. `1 3`): play that cell if it is empty
//! - **occupied or out-of-range cell**: explain and ask again
//! - **unparseable input**: explain and ask again
//! - **`q` or end of input**: resign, ending the game
//!
//! Validation happens here so that an occupied cell never reaches
//! [`Board::apply_move`]; invalid input is a conversation with the user,
//! not an error condition.

use crate::agent::player::Player;
use crate::game_repr::{Board, Mark, Move};
use std::io::{self, BufRead, Write};

/// Human player that makes moves by typing `row col` coordinates.
pub struct HumanPlayer {
    /// Display name for prompts and the result line
    name: String,
}

impl HumanPlayer {
    pub fn new(name: String) -> Self {
        Self { name }
    }
}

impl Player for HumanPlayer {
    fn get_move(&mut self, board: &Board, mark: Mark) -> Option<Move> {
        let stdin = io::stdin();
        let mut line = String::new();

        loop {
            print!("{} ({}) - enter row and column, or q to quit: ", self.name, mark);
            let _ = io::stdout().flush();

            line.clear();
            match stdin.lock().read_line(&mut line) {
                Ok(0) => return None, // end of input
                Ok(_) => {}
                Err(_) => return None,
            }

            let input = line.trim();
            if input.eq_ignore_ascii_case("q") {
                return None;
            }

            match parse_coordinates(input) {
                Some((row, col)) if board.is_valid_move(row, col) => {
                    return Some(Move::new(row, col));
                }
                Some(_) => println!("That cell is taken or off the board."),
                None => println!("Please enter two numbers from 1 to 3, e.g. `1 3`."),
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Parse a `row col` pair of 1-based coordinates into 0-based indices.
///
/// Returns `None` if the line does not contain exactly two positive
/// integers. Range checking beyond the 1-based shift is left to
/// [`Board::is_valid_move`].
fn parse_coordinates(input: &str) -> Option<(usize, usize)> {
    let mut parts = input.split_whitespace();
    let row: usize = parts.next()?.parse().ok()?;
    let col: usize = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((row.checked_sub(1)?, col.checked_sub(1)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_one_based_pairs() {
        assert_eq!(parse_coordinates("1 1"), Some((0, 0)));
        assert_eq!(parse_coordinates("3 1"), Some((2, 0)));
        assert_eq!(parse_coordinates("  2   3 "), Some((1, 2)));
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert_eq!(parse_coordinates(""), None);
        assert_eq!(parse_coordinates("1"), None);
        assert_eq!(parse_coordinates("1 2 3"), None);
        assert_eq!(parse_coordinates("a b"), None);
        assert_eq!(parse_coordinates("0 2"), None);
    }

    #[test]
    fn test_out_of_board_values_fail_validation() {
        let board = Board::new();
        let (row, col) = parse_coordinates("4 1").unwrap();
        assert!(!board.is_valid_move(row, col));
    }
}
