//! Castling precondition and application tests.

use super::sq;
use crate::board::{BoardBuilder, CastleSide, Color, PieceKind};

fn castle_ready() -> BoardBuilder {
    BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("h1"), Color::White, PieceKind::Rook)
        .piece(sq("e8"), Color::Black, PieceKind::King)
}

#[test]
fn test_both_sides_available() {
    let board = castle_ready().build();
    let moves = board.destinations_from(sq("e1"));
    assert!(moves.contains(&sq("g1")));
    assert!(moves.contains(&sq("c1")));
}

#[test]
fn test_kingside_application_moves_rook() {
    let mut board = castle_ready().build();
    let applied = board.apply(sq("e1"), sq("g1"), None).unwrap();
    assert_eq!(applied.castled, Some(CastleSide::King));
    assert!(!applied.is_capture());

    assert_eq!(board.piece_at(sq("g1")).map(|p| p.kind), Some(PieceKind::King));
    assert_eq!(board.piece_at(sq("f1")).map(|p| p.kind), Some(PieceKind::Rook));
    assert!(board.is_empty_square(sq("e1")));
    assert!(board.is_empty_square(sq("h1")));
    assert!(board.piece_at(sq("g1")).unwrap().has_moved);
    assert!(board.piece_at(sq("f1")).unwrap().has_moved);
}

#[test]
fn test_queenside_application_moves_rook() {
    let mut board = castle_ready().build();
    let applied = board.apply(sq("e1"), sq("c1"), None).unwrap();
    assert_eq!(applied.castled, Some(CastleSide::Queen));

    assert_eq!(board.piece_at(sq("c1")).map(|p| p.kind), Some(PieceKind::King));
    assert_eq!(board.piece_at(sq("d1")).map(|p| p.kind), Some(PieceKind::Rook));
    assert!(board.is_empty_square(sq("a1")));
    assert!(board.is_empty_square(sq("e1")));
}

#[test]
fn test_blocked_by_piece_between() {
    let board = castle_ready()
        .piece(sq("f1"), Color::White, PieceKind::Bishop)
        .piece(sq("b1"), Color::White, PieceKind::Knight)
        .build();
    let moves = board.destinations_from(sq("e1"));
    assert!(!moves.contains(&sq("g1")), "bishop blocks kingside");
    assert!(!moves.contains(&sq("c1")), "knight blocks queenside");
}

#[test]
fn test_no_castling_while_in_check() {
    let board = castle_ready()
        .piece(sq("e5"), Color::Black, PieceKind::Rook)
        .build();
    let moves = board.destinations_from(sq("e1"));
    assert!(!moves.contains(&sq("g1")));
    assert!(!moves.contains(&sq("c1")));
}

#[test]
fn test_no_castling_through_attacked_square() {
    // Rook on f8 covers f1, the kingside transit square.
    let board = castle_ready()
        .piece(sq("f8"), Color::Black, PieceKind::Rook)
        .build();
    let moves = board.destinations_from(sq("e1"));
    assert!(!moves.contains(&sq("g1")));
    assert!(moves.contains(&sq("c1")), "queenside span is unaffected");
}

#[test]
fn test_no_castling_into_attacked_square() {
    let board = castle_ready()
        .piece(sq("g8"), Color::Black, PieceKind::Rook)
        .build();
    let moves = board.destinations_from(sq("e1"));
    assert!(!moves.contains(&sq("g1")));
}

#[test]
fn test_no_castling_after_rook_moved() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .moved_piece(sq("h1"), Color::White, PieceKind::Rook)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .build();
    assert!(!board.destinations_from(sq("e1")).contains(&sq("g1")));
}

#[test]
fn test_no_castling_after_king_moved() {
    let board = BoardBuilder::new()
        .moved_piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("a1"), Color::White, PieceKind::Rook)
        .piece(sq("h1"), Color::White, PieceKind::Rook)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .build();
    let moves = board.destinations_from(sq("e1"));
    assert!(!moves.contains(&sq("g1")));
    assert!(!moves.contains(&sq("c1")));
}

#[test]
fn test_no_castling_with_wrong_corner_piece() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceKind::King)
        .piece(sq("h1"), Color::White, PieceKind::Knight)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .build();
    assert!(!board.destinations_from(sq("e1")).contains(&sq("g1")));
}

#[test]
fn test_no_castling_from_off_home_square() {
    // Constructed position: an unmoved king beside the corner rook would
    // otherwise hop onto it.
    let board = BoardBuilder::new()
        .piece(sq("f1"), Color::White, PieceKind::King)
        .piece(sq("h1"), Color::White, PieceKind::Rook)
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .build();
    assert!(!board.destinations_from(sq("f1")).contains(&sq("h1")));
}

#[test]
fn test_black_castles_too() {
    let board = BoardBuilder::new()
        .piece(sq("e8"), Color::Black, PieceKind::King)
        .piece(sq("h8"), Color::Black, PieceKind::Rook)
        .piece(sq("e1"), Color::White, PieceKind::King)
        .build();
    let mut b = board;
    let applied = b.apply(sq("e8"), sq("g8"), None).unwrap();
    assert_eq!(applied.castled, Some(CastleSide::King));
    assert_eq!(b.piece_at(sq("f8")).map(|p| p.kind), Some(PieceKind::Rook));
}
