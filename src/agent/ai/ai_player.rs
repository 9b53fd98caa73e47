//! AiPlayer - the computer opponent, at one of three strength levels.
//!
//! `AiPlayer` implements the [`Player`] trait and delegates move selection
//! to the difficulty policy in [`super::search`]. The player owns its RNG so
//! that games can be replayed deterministically from a seed.

use crate::agent::player::Player;
use crate::game_repr::{Board, Mark, Move};
use super::search::compute_computer_move_with;
use log::warn;
use rand::rngs::SmallRng;
use rand::SeedableRng;

/// Strength levels for the computer opponent.
///
/// Unlike a depth-limited engine, every level here searches the full game
/// tree when it searches at all; the levels differ in how the search result
/// is used, not in how far it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Ignores the search entirely and plays a uniformly random empty cell.
    Easy,

    /// Plays the optimal move 90% of the time; otherwise picks uniformly
    /// among the cells tied for the best re-scored value. Near-optimal but
    /// not perfectly deterministic.
    Medium,

    /// Always plays the move from a single top-level search. Deterministic
    /// and unbeatable.
    Hard,
}

impl Difficulty {
    /// Display name for this difficulty level.
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

/// Computer opponent backed by the minimax search and difficulty policy.
pub struct AiPlayer {
    /// Strength level, fixed for the lifetime of the player
    difficulty: Difficulty,

    /// Owned RNG for the randomized difficulty levels
    rng: SmallRng,

    /// Display name, shown in the result line and logs
    name: String,
}

impl AiPlayer {
    /// Create a player with the given difficulty and an entropy-seeded RNG.
    ///
    /// The name is generated as `"AI (<difficulty>)"`.
    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            rng: SmallRng::from_entropy(),
            name: format!("AI ({})", difficulty.name()),
        }
    }

    /// Create a player with an explicit RNG seed, for reproducible games.
    pub fn with_seed(difficulty: Difficulty, seed: u64) -> Self {
        Self {
            difficulty,
            rng: SmallRng::seed_from_u64(seed),
            name: format!("AI ({})", difficulty.name()),
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }
}

impl Player for AiPlayer {
    /// Select the computer's move.
    ///
    /// The search always works from X's perspective internally regardless of
    /// `mark`; the orchestrator applies the returned cell with the
    /// computer's visible mark. The lent board is cloned for the search's
    /// mutate-then-undo exploration, so the caller's board is untouched.
    fn get_move(&mut self, board: &Board, _mark: Mark) -> Option<Move> {
        let mut search_board = board.clone();
        match compute_computer_move_with(&mut search_board, self.difficulty, &mut self.rng) {
            Ok(mv) => Some(mv),
            Err(err) => {
                // The orchestrator checks the outcome before asking for a
                // move, so this branch signals a caller bug
                warn!("{}: asked to move with {}", self.name, err);
                None
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_names() {
        assert_eq!(Difficulty::Easy.name(), "Easy");
        assert_eq!(Difficulty::Medium.name(), "Medium");
        assert_eq!(Difficulty::Hard.name(), "Hard");
    }

    #[test]
    fn test_generated_player_names() {
        assert_eq!(AiPlayer::with_seed(Difficulty::Easy, 1).name(), "AI (Easy)");
        assert_eq!(AiPlayer::with_seed(Difficulty::Hard, 1).name(), "AI (Hard)");
    }

    #[test]
    fn test_get_move_on_fresh_board() {
        let board = Board::new();
        let mut player = AiPlayer::with_seed(Difficulty::Hard, 0);
        let mv = player.get_move(&board, Mark::O).expect("move on open board");
        assert!(board.is_valid_move(mv.row(), mv.col()));
        // The lent board is never mutated
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_get_move_on_finished_game_returns_none() {
        let mut board = Board::new();
        for col in 0..3 {
            board.apply_move(0, col, Mark::X).unwrap();
        }
        let mut player = AiPlayer::with_seed(Difficulty::Easy, 0);
        assert!(player.get_move(&board, Mark::O).is_none());
    }
}
