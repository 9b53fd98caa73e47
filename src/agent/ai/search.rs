// Difficulty policy layered over the raw minimax search.
//
// The raw search is deterministic and unbeatable; the three difficulty
// levels degrade it in different ways:
// - Easy ignores the search and picks a uniformly random empty cell.
// - Medium plays the optimal move 90% of the time; otherwise it re-scores
//   every empty cell and picks uniformly among the top scorers.
// - Hard returns the optimal move as computed.

use super::ai_player::Difficulty;
use super::minimax::minimax;
use crate::game_repr::{Board, GameOutcome, Mark, Move, BOARD_COLS, BOARD_ROWS};
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;
use thiserror::Error;

/// Raised by [`compute_computer_move`] when called on a full or already
/// decided board.
///
/// Like [`InvalidMoveError`](crate::game_repr::InvalidMoveError) this is a
/// caller-contract violation: the orchestrating layer must check
/// [`Board::outcome`] before asking the computer to move.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("no moves available: the board is full or the game is already decided")]
pub struct NoMovesAvailableError;

/// Select the computer's move for `difficulty`, using a thread-local RNG
/// for the randomized levels.
///
/// Must only be called while the game is in progress; a full or decided
/// board yields [`NoMovesAvailableError`].
pub fn compute_computer_move(
    board: &mut Board,
    difficulty: Difficulty,
) -> Result<Move, NoMovesAvailableError> {
    compute_computer_move_with(board, difficulty, &mut rand::thread_rng())
}

/// [`compute_computer_move`] with an explicit RNG, for deterministic tests
/// and seeded play.
///
/// The board is borrowed mutably for the duration of the call only; every
/// hypothetical move the search makes is undone before returning, so the
/// board is left exactly as it was passed in.
pub fn compute_computer_move_with<R: Rng>(
    board: &mut Board,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<Move, NoMovesAvailableError> {
    if board.outcome() != GameOutcome::InProgress {
        return Err(NoMovesAvailableError);
    }

    let mv = match difficulty {
        Difficulty::Easy => random_move(board, rng),
        Difficulty::Medium => blended_move(board, rng),
        Difficulty::Hard => best_move(board),
    };

    let mv = mv.ok_or(NoMovesAvailableError)?;
    debug!("computer ({}) chose {}", difficulty.name(), mv);
    Ok(mv)
}

/// Easy: uniformly random among all empty cells.
fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Option<Move> {
    board.empty_cells().choose(rng).copied()
}

/// Hard: the move from a single top-level minimax call.
fn best_move(board: &mut Board) -> Option<Move> {
    let (score, mv) = minimax(board, 0, true, i32::MIN, i32::MAX);
    debug!("search settled on {:?} with score {}", mv, score);
    mv
}

/// Medium: the optimal move with probability 0.9; otherwise re-score every
/// empty cell and pick uniformly among the cells tied for the best score.
///
/// The secondary pass evaluates each candidate by placing X and calling the
/// minimizing role at depth 0. Its scores sit one depth unit off the scale
/// `best_move` sees; the pass only ranks candidates against each other, so
/// the offset does not change which cells end up tied for the top.
fn blended_move<R: Rng>(board: &mut Board, rng: &mut R) -> Option<Move> {
    if rng.gen::<f64>() < 0.9 {
        return best_move(board);
    }

    let mut top_moves: SmallVec<[Move; 9]> = SmallVec::new();
    let mut max_score = i32::MIN;

    for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLS {
            if !board.is_valid_move(row, col) {
                continue;
            }
            board.place(row, col, Mark::X);
            let (score, _) = minimax(board, 0, false, i32::MIN, i32::MAX);
            board.clear(row, col);

            if score > max_score {
                max_score = score;
                top_moves.clear();
                top_moves.push(Move::new(row, col));
            } else if score == max_score {
                top_moves.push(Move::new(row, col));
            }
        }
    }

    debug!(
        "blended pass: {} candidate(s) at score {}",
        top_moves.len(),
        max_score
    );
    top_moves.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn board_from_rows(rows: [&str; 3]) -> Board {
        let mut board = Board::new();
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                match ch {
                    'X' => board.place(r, c, Mark::X),
                    'O' => board.place(r, c, Mark::O),
                    _ => {}
                }
            }
        }
        board
    }

    #[test]
    fn test_rejects_full_board() {
        let mut board = board_from_rows(["XOX", "XXO", "OXO"]);
        let err = compute_computer_move(&mut board, Difficulty::Hard).unwrap_err();
        assert_eq!(err, NoMovesAvailableError);
    }

    #[test]
    fn test_rejects_decided_board() {
        // X already won; empty cells remain but the game is over
        let board = board_from_rows(["XXX", "OO ", "   "]);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut board = board.clone();
            assert_eq!(
                compute_computer_move(&mut board, difficulty),
                Err(NoMovesAvailableError)
            );
        }
    }

    #[test]
    fn test_hard_is_deterministic() {
        let mut board = board_from_rows(["X  ", " O ", "   "]);
        let first = compute_computer_move(&mut board, Difficulty::Hard).unwrap();
        for _ in 0..10 {
            assert_eq!(
                compute_computer_move(&mut board, Difficulty::Hard).unwrap(),
                first
            );
        }
    }

    #[test]
    fn test_easy_only_picks_empty_cells() {
        let mut board = board_from_rows(["XOX", "OX ", " O "]);
        let mut rng = SmallRng::seed_from_u64(7);
        for _ in 0..50 {
            let mv = compute_computer_move_with(&mut board, Difficulty::Easy, &mut rng).unwrap();
            assert!(board.is_valid_move(mv.row(), mv.col()));
        }
    }

    #[test]
    fn test_board_unchanged_by_every_difficulty() {
        let board = board_from_rows(["X O", " X ", "O  "]);
        let mut rng = SmallRng::seed_from_u64(42);
        for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
            let mut scratch = board.clone();
            compute_computer_move_with(&mut scratch, difficulty, &mut rng).unwrap();
            assert_eq!(scratch, board, "{:?} must not mutate the board", difficulty);
        }
    }

    #[test]
    fn test_medium_takes_the_forced_win() {
        // (0, 2) wins outright; both the 0.9 branch and the re-scoring
        // branch must agree on it, so the move is certain regardless of RNG
        let mut board = board_from_rows(["XX ", "OO ", "   "]);
        for seed in 0..20 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mv = compute_computer_move_with(&mut board, Difficulty::Medium, &mut rng).unwrap();
            assert_eq!(mv, Move::new(0, 2), "seed {} diverged", seed);
        }
    }
}
