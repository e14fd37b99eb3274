//! Boundary behaviors of [`MoveGenerator`] that aren't covered by the raw
//! perft node counts: promotions, en passant, and the various ways castling
//! can be rejected.

use crabcore::{
    defs::{PieceType, Square},
    movegen::{Move, MoveGenerator},
    position::Position,
};

fn setup(fen: &str) -> Position {
    fen.parse().unwrap_or_else(|err| panic!("invalid fen {fen:?}: {err}"))
}

fn legal_moves(position: &mut Position) -> Vec<Move> {
    MoveGenerator::new().generate_legal(position).into_iter().collect()
}

#[test]
fn pawn_on_seventh_rank_promotes_to_all_four_pieces() {
    let mut position = setup("8/P7/8/8/8/8/7k/K7 w - - 0 1");
    let moves = legal_moves(&mut position);

    let promotions: Vec<_> = moves
        .iter()
        .filter(|mv| mv.start() == Square::A7 && mv.end() == Square::A8)
        .collect();

    assert_eq!(promotions.len(), 4);
    for piece in [
        PieceType::QUEEN,
        PieceType::ROOK,
        PieceType::BISHOP,
        PieceType::KNIGHT,
    ] {
        assert!(
            promotions.iter().any(|mv| mv.promotion_piece() == piece),
            "missing promotion to {piece:?}",
            piece = char::from(piece)
        );
    }
}

#[test]
fn en_passant_is_only_available_immediately_after_a_double_push() {
    // white pawn on e5, black pawn just played d7d5: capturing en passant is legal
    let mut after_double_push = setup("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1");
    let moves = legal_moves(&mut after_double_push);
    assert!(moves.iter().any(|mv| mv.is_en_passant()));

    // same piece placement, but no ep square recorded: capture is not offered
    let mut without_ep_square = setup("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1");
    let moves = legal_moves(&mut without_ep_square);
    assert!(!moves.iter().any(Move::is_en_passant));
}

#[test]
fn castling_rejected_while_in_check() {
    let mut position = setup("4k3/8/8/8/8/8/4r3/4K2R w K - 0 1");
    let moves = legal_moves(&mut position);
    assert!(!moves.iter().any(Move::is_castling));
}

#[test]
fn castling_rejected_through_attacked_square() {
    let mut position = setup("4kr2/8/8/8/8/8/8/4K2R w K - 0 1");
    let moves = legal_moves(&mut position);
    assert!(!moves.iter().any(Move::is_castling));
}

#[test]
fn castling_rejected_into_attacked_square() {
    let mut position = setup("4k1r1/8/8/8/8/8/8/4K2R w K - 0 1");
    let moves = legal_moves(&mut position);
    assert!(!moves.iter().any(Move::is_castling));
}

#[test]
fn castling_rejected_when_path_is_blocked() {
    let mut position = setup("4k3/8/8/8/8/8/8/4KN1R w K - 0 1");
    let moves = legal_moves(&mut position);
    assert!(!moves.iter().any(Move::is_castling));
}

#[test]
fn castling_allowed_when_clear_and_safe() {
    let mut position = setup("4k3/8/8/8/8/8/8/4K2R w K - 0 1");
    let moves = legal_moves(&mut position);
    assert!(moves.iter().any(Move::is_castling));
}

#[test]
fn rook_captured_on_home_square_clears_castling_right() {
    // white bishop takes the black rook sitting on a8; black must lose queenside rights
    let mut position = setup("r3k3/8/8/8/8/8/8/B3K3 w q - 0 1");
    position.make(Move::new(Square::A1, Square::A8));
    assert!(!position.castling_rights().can_castle_queenside(crabcore::defs::Color::BLACK));
}
