use super::*;
use cozy_chess::Board;

fn board(fen: &str) -> Board {
    Board::from_fen(fen, false).expect("valid FEN")
}

#[test]
fn start_position_is_balanced() {
    let pos = Board::default();
    assert_eq!(evaluate(&pos, Color::White), 0);
    assert_eq!(evaluate(&pos, Color::Black), 0);
}

#[test]
fn piece_values_match_table() {
    assert_eq!(piece_value(Piece::Pawn), 100);
    assert_eq!(piece_value(Piece::Knight), 320);
    assert_eq!(piece_value(Piece::Bishop), 330);
    assert_eq!(piece_value(Piece::Rook), 500);
    assert_eq!(piece_value(Piece::Queen), 900);
    assert_eq!(piece_value(Piece::King), 20000);
}

#[test]
fn extra_queen_on_a_plain_square_is_worth_900() {
    // Kings cancel; the a1 queen sits on a zero-bonus square.
    let pos = board("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1");
    assert_eq!(evaluate(&pos, Color::White), 900);
    assert_eq!(evaluate(&pos, Color::Black), -900);
}

#[test]
fn centre_pawn_outscores_edge_pawn() {
    let centre = board("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
    let edge = board("4k3/8/8/8/P7/8/8/4K3 w - - 0 1");
    assert_eq!(
        evaluate(&centre, Color::White) - evaluate(&edge, Color::White),
        30
    );
}

#[test]
fn ring_squares_get_the_smaller_bonus() {
    let ring = board("4k3/8/8/8/2P5/8/8/4K3 w - - 0 1"); // c4
    let edge = board("4k3/8/8/8/P7/8/8/4K3 w - - 0 1"); // a4
    assert_eq!(
        evaluate(&ring, Color::White) - evaluate(&edge, Color::White),
        10
    );
}

#[test]
fn perspective_flip_negates_the_score() {
    let pos = board("r3k3/8/8/8/8/8/8/Q3K3 w - - 0 1");
    assert_eq!(
        evaluate(&pos, Color::White),
        -evaluate(&pos, Color::Black)
    );
}

#[test]
fn colour_swapped_mirror_negates_the_score() {
    // White pawn on e4 versus its colour-swapped vertical mirror (black pawn
    // on e5). From a fixed perspective the scores must negate; from the
    // mirrored perspective they must agree.
    let pos = board("4k3/8/8/8/4P3/8/8/4K3 w - - 0 1");
    let mirrored = board("4k3/8/8/4p3/8/8/8/4K3 b - - 0 1");

    assert_eq!(
        evaluate(&pos, Color::White),
        -evaluate(&mirrored, Color::White)
    );
    assert_eq!(
        evaluate(&pos, Color::White),
        evaluate(&mirrored, Color::Black)
    );
}
