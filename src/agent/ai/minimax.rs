// Minimax Search with Alpha-Beta Pruning
//
// Exhaustive adversarial search over the 3x3 board. The maximizing side is
// fixed as X: the computer is always assigned X internally for search
// purposes, regardless of which visible mark it plays on the board.
//
// Scoring, from X's perspective:
// - X has won:  +10 - depth  (faster wins score higher)
// - O has won:  -10 + depth  (faster losses score lower)
// - draw/undecided leaf: 0
//
// Alpha-beta pruning skips siblings that cannot change the result given the
// bounds already established. The game tree is at most 9! leaf paths, so the
// search always runs to completion; there is no depth cutoff and no timing.

use crate::game_repr::{Board, Mark, Move, BOARD_COLS, BOARD_ROWS};

/// Base score of a decided position, before the depth adjustment.
pub const WIN_SCORE: i32 = 10;

/// Recursive minimax evaluation with alpha-beta pruning.
///
/// Explores every empty cell in row-major order: places the mover's mark,
/// recurses with the opposite role, then undoes the mark. The board is
/// always restored before the call returns, so the caller's board is
/// bit-for-bit unchanged afterwards; skipping the undo would corrupt
/// sibling evaluations.
///
/// Ties are broken toward the first candidate in scan order: a later move
/// with an equal score never replaces the best move already found. This
/// makes move selection fully deterministic.
///
/// # Arguments
///
/// * `board` - Position to evaluate (mutated and restored during the call)
/// * `depth` - Plies explored so far; 0 at the top-level call
/// * `maximizing` - true when X is to place, false when O is to place
/// * `alpha` - Best score the maximizer can already guarantee
/// * `beta` - Best score the minimizer can already guarantee
///
/// # Returns
///
/// `(score, best_move)`: the score of the position and the move achieving
/// it, or `None` for a terminal position.
pub fn minimax(
    board: &mut Board,
    depth: i32,
    maximizing: bool,
    mut alpha: i32,
    mut beta: i32,
) -> (i32, Option<Move>) {
    // Terminal positions end the recursion; win checks before fullness.
    if board.is_winner(Mark::X) {
        return (WIN_SCORE - depth, None);
    }
    if board.is_winner(Mark::O) {
        return (-WIN_SCORE + depth, None);
    }
    if board.is_full() {
        return (0, None);
    }

    let mover = if maximizing { Mark::X } else { Mark::O };
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
    let mut best_move = None;

    'scan: for row in 0..BOARD_ROWS {
        for col in 0..BOARD_COLS {
            if !board.is_valid_move(row, col) {
                continue;
            }

            board.place(row, col, mover);
            let (score, _) = minimax(board, depth + 1, !maximizing, alpha, beta);
            board.clear(row, col);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(Move::new(row, col));
                }
                alpha = alpha.max(best_score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(Move::new(row, col));
                }
                beta = beta.min(best_score);
            }

            // Later siblings cannot change the result at this node.
            if beta <= alpha {
                break 'scan;
            }
        }
    }

    (best_score, best_move)
}
