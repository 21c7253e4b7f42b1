//! Dispatch boundary between an interactive host and the opponent engine.
//!
//! The host packages the current position as a FEN string together with a
//! difficulty tier, hands it to [`compute_move`], and gets back either a
//! chosen move or an explicit "no move", never an error. The search runs on
//! tokio's blocking pool so the host's render/input loop is never stalled by
//! it. Requests are value-only in both directions; the live game state never
//! crosses the boundary.
//!
//! Hosts must not issue a second request for the same game while one is in
//! flight; result attribution is theirs to manage.

use std::time::Instant;

use cozy_chess::{Board, Move, Piece};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use opponent_engine::OpponentEngine;

pub use opponent_engine::Difficulty;

/// A search request: the position to think about and how hard to think.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    /// Position in FEN form, side to move included.
    pub fen: String,
    /// Difficulty tier; fixes the search depth.
    pub difficulty: Difficulty,
}

impl MoveRequest {
    pub fn new(fen: impl Into<String>, difficulty: Difficulty) -> Self {
        Self {
            fen: fen.into(),
            difficulty,
        }
    }
}

/// Promotion piece kinds a move can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromotionKind {
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl From<Piece> for PromotionKind {
    fn from(piece: Piece) -> Self {
        match piece {
            Piece::Knight => PromotionKind::Knight,
            Piece::Bishop => PromotionKind::Bishop,
            Piece::Rook => PromotionKind::Rook,
            _ => PromotionKind::Queen,
        }
    }
}

/// The move the engine settled on, in host-friendly form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChosenMove {
    /// Origin square in algebraic form, e.g. "e2".
    pub from: String,
    /// Destination square in algebraic form, e.g. "e4".
    pub to: String,
    /// Promotion piece, if the move promotes.
    pub promotion: Option<PromotionKind>,
}

impl ChosenMove {
    fn from_move(mv: Move) -> Self {
        Self {
            from: mv.from.to_string(),
            to: mv.to.to_string(),
            promotion: mv.promotion.map(PromotionKind::from),
        }
    }

    /// Promotion piece the host should apply: queen unless the search chose
    /// otherwise.
    pub fn promotion_or_default(&self) -> PromotionKind {
        self.promotion.unwrap_or(PromotionKind::Queen)
    }
}

/// A search reply. `best_move: None` means the position had no legal moves,
/// the game was already over, or the dispatch failed; the host treats all
/// three as "skip this turn".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveReply {
    pub best_move: Option<ChosenMove>,
}

impl MoveReply {
    pub fn none() -> Self {
        Self { best_move: None }
    }
}

/// Failures at the dispatch seam. Absorbed by [`compute_move`]; only
/// [`respond`] surfaces them as values.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("invalid position: {0}")]
    InvalidPosition(String),
    #[error("search task did not complete")]
    TaskFailed,
}

/// Synchronous core of the boundary: parse the position, run the search,
/// wrap the outcome.
///
/// CPU-bound; call it from a worker context, not from an interactive loop.
pub fn respond(request: &MoveRequest) -> Result<MoveReply, DispatchError> {
    let board = Board::from_fen(&request.fen, false)
        .map_err(|err| DispatchError::InvalidPosition(format!("{err:?}")))?;

    let started = Instant::now();
    let mut engine = OpponentEngine::new();
    let result = engine.search(&board, request.difficulty);

    debug!(
        difficulty = %request.difficulty,
        depth = result.depth,
        nodes = result.nodes,
        score = result.score,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "search finished"
    );

    Ok(MoveReply {
        best_move: result.best_move.map(ChosenMove::from_move),
    })
}

/// Runs a request on tokio's blocking pool and returns the reply.
///
/// Every failure (malformed FEN, a worker that dies) is absorbed into a
/// no-move reply after logging; the host only ever sees a value.
pub async fn compute_move(request: MoveRequest) -> MoveReply {
    let outcome = tokio::task::spawn_blocking(move || respond(&request))
        .await
        .map_err(|_| DispatchError::TaskFailed)
        .and_then(|reply| reply);

    match outcome {
        Ok(reply) => reply,
        Err(err) => {
            warn!(error = %err, "search dispatch failed, replying with no move");
            MoveReply::none()
        }
    }
}
