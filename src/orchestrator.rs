//! Game lifecycle management and turn coordination.
//!
//! This module contains the [`Orchestrator`] component, the root
//! coordinator of a game session. It owns the [`Board`] exclusively and
//! manages:
//! - Player instantiation from the selected [`GameMode`]
//! - Turn alternation, starting at X
//! - Move validation before application (players never mutate the board)
//! - End detection and board reset for the next game
//!
//! # Example Flow
//!
//! ```text
//! [Select Mode] -> [Create Players] -> [Active Game]
//!   -> [Request Move] -> [Validate] -> [Apply Move]
//!   -> [Check Outcome] -> [Switch Turn] -> [Request Move] ...
//! ```
//!
//! # Ownership
//!
//! The board is a single value owned by the orchestrator. Players receive
//! it as a shared borrow for the duration of one `get_move` call; the
//! search engine clones it for its hypothetical exploration. No component
//! holds board state between turns.

use crate::agent::ai::AiPlayer;
use crate::agent::human_player::HumanPlayer;
use crate::agent::player::Player;
use crate::agent::Difficulty;
use crate::game_repr::{Board, GameOutcome, Mark};
use log::{error, info};

/// Game mode selected before the first move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two human players on the same terminal
    PvP,

    /// Human (X, moves first) against the computer (O)
    PvAI { difficulty: Difficulty },
}

/// Result of a single call to [`Orchestrator::play_turn`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    /// Move applied, game still open; the turn has switched
    Continue,

    /// Move applied and the game reached a terminal state
    Finished(GameOutcome),

    /// The player to move quit or resigned
    Abandoned,
}

/// Root component owning the board and both players.
pub struct Orchestrator {
    /// The game board; exclusively owned, lent to players per call
    board: Board,

    /// Player instances as (X, O); X always moves first
    players: (Box<dyn Player>, Box<dyn Player>),

    /// Whose turn it is
    current_turn: Mark,
}

impl Orchestrator {
    /// Create a session for `mode` with the standard player line-up.
    pub fn new(mode: GameMode) -> Self {
        let players: (Box<dyn Player>, Box<dyn Player>) = match mode {
            GameMode::PvP => (
                Box::new(HumanPlayer::new("Player 1".to_string())),
                Box::new(HumanPlayer::new("Player 2".to_string())),
            ),
            GameMode::PvAI { difficulty } => (
                Box::new(HumanPlayer::new("Player".to_string())),
                Box::new(AiPlayer::with_difficulty(difficulty)),
            ),
        };
        Self::with_players(players.0, players.1)
    }

    /// Create a session from explicit player instances (X first).
    pub fn with_players(x_player: Box<dyn Player>, o_player: Box<dyn Player>) -> Self {
        Self {
            board: Board::new(),
            players: (x_player, o_player),
            current_turn: Mark::X,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Name of the player whose turn it is.
    pub fn current_player_name(&self) -> &str {
        match self.current_turn {
            Mark::X => self.players.0.name(),
            Mark::O => self.players.1.name(),
        }
    }

    /// Outcome derived from the current board contents.
    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    /// Run one turn: request a move, validate, apply, check for the end.
    ///
    /// An invalid move from a player is not applied; the same player is
    /// asked again. The turn only switches after a move has been applied
    /// and the game is still open.
    pub fn play_turn(&mut self) -> TurnResult {
        let mark = self.current_turn;
        let player = match mark {
            Mark::X => &mut self.players.0,
            Mark::O => &mut self.players.1,
        };

        let mv = loop {
            match player.get_move(&self.board, mark) {
                None => {
                    info!("{} left the game", player.name());
                    return TurnResult::Abandoned;
                }
                Some(mv) if self.board.is_valid_move(mv.row(), mv.col()) => break mv,
                Some(mv) => {
                    info!("{} offered invalid move {}, asking again", player.name(), mv);
                }
            }
        };

        if let Err(err) = self.board.apply_move(mv.row(), mv.col(), mark) {
            // Unreachable after the validity check above; a failure here is
            // a board-model bug, so surface it and stop the game
            error!("validated move {} rejected: {}", mv, err);
            return TurnResult::Abandoned;
        }
        info!("{} plays {} as {}", self.current_player_name(), mv, mark);

        match self.board.outcome() {
            GameOutcome::InProgress => {
                self.current_turn = mark.opposite();
                TurnResult::Continue
            }
            outcome => {
                info!("game over: {:?}", outcome);
                TurnResult::Finished(outcome)
            }
        }
    }

    /// Clear the board and restart at X for a new game.
    pub fn reset(&mut self) {
        self.board.reset();
        self.current_turn = Mark::X;
    }
}
