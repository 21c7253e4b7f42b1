//! Material and centre-control evaluation

use cozy_chess::{Board, Color, Piece};

/// Per-square centre bonus, a1 first, h8 last. The four central squares get
/// the largest entry, the ring around them a smaller one, edges nothing.
/// Entries are multiplied by [`CENTER_SCALE`] before joining the material sum.
#[rustfmt::skip]
const CENTER_BONUS: [i32; 64] = [
    0, 0, 0, 0, 0, 0, 0, 0, // rank 1
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 1, 1, 1, 1, 0, 0,
    0, 0, 1, 3, 3, 1, 0, 0,
    0, 0, 1, 3, 3, 1, 0, 0,
    0, 0, 1, 1, 1, 1, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, // rank 8
];

const CENTER_SCALE: i32 = 10;

/// Returns the material value of a piece in centipawns.
#[inline]
pub fn piece_value(piece: Piece) -> i32 {
    match piece {
        Piece::Pawn => 100,
        Piece::Knight => 320,
        Piece::Bishop => 330,
        Piece::Rook => 500,
        Piece::Queen => 900,
        Piece::King => 20000,
    }
}

/// Evaluates the position from `perspective`'s point of view.
///
/// Returns a score in centipawns: positive favors `perspective`, negative
/// favors the opponent. Pure function of the board, no allocation; this is
/// the leaf primitive of the search.
pub fn evaluate(board: &Board, perspective: Color) -> i32 {
    let mut score = 0i32;
    for &color in &[Color::White, Color::Black] {
        let sign = if color == perspective { 1 } else { -1 };
        let side = board.colors(color);
        for &piece in &[
            Piece::Pawn,
            Piece::Knight,
            Piece::Bishop,
            Piece::Rook,
            Piece::Queen,
            Piece::King,
        ] {
            for sq in side & board.pieces(piece) {
                score += sign * (piece_value(piece) + CENTER_BONUS[sq as usize] * CENTER_SCALE);
            }
        }
    }
    score
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
