//! Tunable-Difficulty Chess Opponent
//!
//! Minimax search with alpha-beta pruning over a fixed difficulty ladder.
//! Move generation, move application, and game-over detection are delegated
//! to [`cozy_chess`]; this crate only ranks the moves it is handed, so it
//! pairs with any host that can produce a FEN and apply a move.

mod eval;
mod search;

use cozy_chess::{Board, GameStatus, Move};
use serde::{Deserialize, Serialize};


// Re-export for direct use if needed
pub use eval::{evaluate, piece_value};
pub use search::{pick_best_move, random_move};

/// Difficulty ladder, weakest first.
///
/// Each tier maps to a fixed search depth; the mapping is engine policy and
/// is not configurable at runtime beyond picking a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    /// No search at all: a uniformly random legal move.
    Random,
    /// Two-ply minimax.
    Shallow,
    /// Three-ply minimax.
    Deep,
}

impl Difficulty {
    /// Search depth in plies for this tier.
    pub fn depth(self) -> u8 {
        match self {
            Difficulty::Random => 0,
            Difficulty::Shallow => 2,
            Difficulty::Deep => 3,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Random => write!(f, "Random"),
            Difficulty::Shallow => write!(f, "Shallow"),
            Difficulty::Deep => write!(f, "Deep"),
        }
    }
}

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns for the side that moved
    pub score: i32,
    /// Search depth used
    pub depth: u8,
    /// Number of nodes searched (for stats)
    pub nodes: u64,
}

/// Chess opponent using minimax with alpha-beta pruning.
///
/// Holds no state between searches other than a node counter that is reset
/// on every call, so one instance can serve a whole game or a fresh one can
/// be built per request.
#[derive(Debug, Clone, Default)]
pub struct OpponentEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl OpponentEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Searches `board` at the given difficulty and returns the chosen move.
    ///
    /// Returns `best_move: None` when the game is already over or the side
    /// to move has no legal moves; that is the contract's "no move" signal,
    /// never an error. On the `Random` tier no evaluation happens at all.
    pub fn search(&mut self, board: &Board, difficulty: Difficulty) -> SearchResult {
        self.nodes = 0;
        let depth = difficulty.depth();

        if board.status() != GameStatus::Ongoing {
            return SearchResult {
                best_move: None,
                score: 0,
                depth,
                nodes: self.nodes,
            };
        }

        if depth == 0 {
            let best_move = search::random_move(board);
            self.nodes = 1;
            return SearchResult {
                best_move,
                score: 0,
                depth,
                nodes: self.nodes,
            };
        }

        match search::pick_best_move(board, depth, &mut self.nodes) {
            Some((mv, score)) => SearchResult {
                best_move: Some(mv),
                score,
                depth,
                nodes: self.nodes,
            },
            // Zero legal moves at the root: degrade to the random tier.
            None => SearchResult {
                best_move: search::random_move(board),
                score: 0,
                depth,
                nodes: self.nodes,
            },
        }
    }

    /// Returns the engine's name for identification
    pub fn name(&self) -> &str {
        "Minimax v1.0"
    }

    /// Reset internal state for a new game
    pub fn new_game(&mut self) {
        self.nodes = 0;
    }
}
