//! Minimax search with alpha-beta pruning

use cozy_chess::{Board, Color, GameStatus, Move};
use rand::seq::SliceRandom;
use rand::thread_rng;

use crate::eval::evaluate;

/// Sentinel bound for alpha/beta. Material tops out well below this even
/// with every piece on a centre square.
const SCORE_INFINITY: i32 = 999_999;

/// Collects the legal moves for the side to move, in generation order.
fn legal_moves(board: &Board) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    board.generate_moves(|ml| {
        for mv in ml {
            moves.push(mv);
        }
        false
    });
    moves
}

/// Picks a legal move uniformly at random, `None` if there are no legal moves.
///
/// This is the whole of the weakest difficulty tier: no evaluation, no
/// lookahead.
pub fn random_move(board: &Board) -> Option<Move> {
    legal_moves(board).choose(&mut thread_rng()).copied()
}

/// Searches the position and returns the best move with its score.
///
/// Runs minimax with alpha-beta pruning to `depth` plies, maximizing for the
/// side to move. Candidate moves are tried in generation order; the first
/// move to achieve a strictly better score is kept, so the result is
/// deterministic for a fixed position and depth.
///
/// # Arguments
/// * `board` - The position to search
/// * `depth` - Search depth in plies, at least 1
/// * `nodes` - Counter for nodes searched (for statistics)
///
/// # Returns
/// The best move and its score, or `None` if the side to move has no legal
/// moves.
pub fn pick_best_move(board: &Board, depth: u8, nodes: &mut u64) -> Option<(Move, i32)> {
    let maximizing_for = board.side_to_move();
    let moves = legal_moves(board);

    let mut best: Option<(Move, i32)> = None;
    let mut alpha = -SCORE_INFINITY;

    for mv in moves {
        let mut child = board.clone();
        child.play(mv);
        *nodes += 1;

        let score = minimax(
            &child,
            depth.saturating_sub(1),
            alpha,
            SCORE_INFINITY,
            false,
            maximizing_for,
            nodes,
        );

        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((mv, score)),
        }
        if score > alpha {
            alpha = score;
        }
    }

    best
}

/// Recursive minimax with alpha-beta pruning.
///
/// Scores are always from `perspective`'s point of view; the maximizing and
/// minimizing roles alternate per ply. Game-over nodes and depth-0 leaves
/// are scored statically by the evaluator, as is a node whose enumeration
/// comes back empty.
fn minimax(
    board: &Board,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    perspective: Color,
    nodes: &mut u64,
) -> i32 {
    if depth == 0 || board.status() != GameStatus::Ongoing {
        return evaluate(board, perspective);
    }

    let moves = legal_moves(board);
    if moves.is_empty() {
        return evaluate(board, perspective);
    }

    if maximizing {
        let mut best = -SCORE_INFINITY;
        for mv in moves {
            let mut child = board.clone();
            child.play(mv);
            *nodes += 1;

            let score = minimax(&child, depth - 1, alpha, beta, false, perspective, nodes);
            if score > best {
                best = score;
            }
            if best > alpha {
                alpha = best;
            }
            if beta <= alpha {
                break; // Beta cutoff
            }
        }
        best
    } else {
        let mut best = SCORE_INFINITY;
        for mv in moves {
            let mut child = board.clone();
            child.play(mv);
            *nodes += 1;

            let score = minimax(&child, depth - 1, alpha, beta, true, perspective, nodes);
            if score < best {
                best = score;
            }
            if best < beta {
                beta = best;
            }
            if beta <= alpha {
                break; // Alpha cutoff
            }
        }
        best
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
