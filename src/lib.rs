//! Two-player 3x3 grid game with an optional computer opponent.
//!
//! The crate is split the same way the game is: [`game_repr`] holds the
//! board model (state, move validation, terminal detection) and [`agent`]
//! holds the players, including the minimax search engine behind the
//! computer opponent. [`orchestrator`] coordinates a game session between
//! two players over an exclusively owned board.
//!
//! The presentation layer is intentionally thin: the library exposes
//! everything a front end needs (apply a move, query the outcome, ask the
//! computer for its move) without owning any I/O beyond the bundled
//! terminal players.

pub mod agent;
pub mod game_repr;
pub mod orchestrator;

pub use agent::ai::{compute_computer_move, compute_computer_move_with, Difficulty};
pub use game_repr::{Board, GameOutcome, Mark, Move};
pub use orchestrator::{GameMode, Orchestrator, TurnResult};
