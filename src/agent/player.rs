//! Player trait: the uniform interface through which the orchestrator
//! requests moves.
//!
//! A player is any entity that can be asked for the next move: a human
//! reading the board and typing coordinates, or the computer opponent
//! running its search. The orchestrator owns the [`Board`] exclusively and
//! lends it to the player for the duration of a single `get_move` call;
//! players never hold on to board state between turns.
//!
//! # Synchronous Design
//!
//! `get_move` is intentionally blocking. A human player blocks on terminal
//! input; the computer blocks while the search runs (bounded, the 3x3 game
//! tree is tiny). The orchestrator simply calls `get_move` and waits,
//! which keeps the turn loop trivial.

use crate::game_repr::{Board, Mark, Move};

/// Trait for entities that can provide moves.
///
/// # Contract
///
/// - `get_move` is only called while the game is in progress, so at least
///   one empty cell exists.
/// - The returned move is validated by the orchestrator before being
///   applied; a player returning an occupied or out-of-range cell is asked
///   again rather than crashing the game.
/// - Returning `None` means the player quit or resigned and ends the game.
pub trait Player {
    /// Request the next move for `mark` on `board`.
    fn get_move(&mut self, board: &Board, mark: Mark) -> Option<Move>;

    /// Display name for logging and the result line.
    fn name(&self) -> &str {
        "Player"
    }
}
