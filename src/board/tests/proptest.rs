//! Property-based tests using proptest.

use proptest::prelude::*;

use crate::board::{Board, BoardBuilder, Color, PieceKind, Square};
use crate::game::{Clock, Game};

const NON_KING: [PieceKind; 5] = [
    PieceKind::Pawn,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];

fn arb_kind() -> impl Strategy<Value = PieceKind> {
    (0..NON_KING.len()).prop_map(|i| NON_KING[i])
}

fn arb_color() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::White), Just(Color::Black)]
}

/// Random position with both kings plus up to a dozen other pieces.
/// Pawns are kept off the back rows so the position is reachable-looking.
fn arb_board() -> impl Strategy<Value = Board> {
    (
        0..64usize,
        0..64usize,
        prop::collection::vec((0..64usize, arb_color(), arb_kind()), 0..12),
    )
        .prop_filter("kings must differ", |(wk, bk, _)| wk != bk)
        .prop_map(|(wk, bk, pieces)| {
            let mut builder = BoardBuilder::new();
            for (idx, color, kind) in pieces {
                let sq = Square(idx / 8, idx % 8);
                if idx == wk || idx == bk {
                    continue;
                }
                if kind == PieceKind::Pawn && (sq.row() == 0 || sq.row() == 7) {
                    continue;
                }
                builder = builder.piece(sq, color, kind);
            }
            builder
                .piece(Square(wk / 8, wk % 8), Color::White, PieceKind::King)
                .piece(Square(bk / 8, bk % 8), Color::Black, PieceKind::King)
                .build()
        })
}

fn path_between_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let dr = (to.row() as isize - from.row() as isize).signum();
    let dc = (to.col() as isize - from.col() as isize).signum();
    let mut cursor = from;
    loop {
        cursor = match cursor.offset(dr, dc) {
            Some(sq) => sq,
            None => return true,
        };
        if cursor == to {
            return true;
        }
        if !board.is_empty_square(cursor) {
            return false;
        }
    }
}

proptest! {
    /// Notation parsing never panics, and valid notation round-trips
    #[test]
    fn prop_notation_parse_total(s in "\\PC*") {
        if let Ok(square) = s.parse::<Square>() {
            prop_assert_eq!(square.to_string(), s);
        }
    }

    /// Round-trip for every in-bounds coordinate pair
    #[test]
    fn prop_notation_round_trip(row in 0..8usize, col in 0..8usize) {
        let sq = Square(row, col);
        prop_assert_eq!(sq.to_string().parse::<Square>().unwrap(), sq);
    }

    /// Destinations never include a square occupied by a same-color piece
    #[test]
    fn prop_no_self_capture(board in arb_board()) {
        for (from, piece) in board.occupied().collect::<Vec<_>>() {
            for to in board.destinations_from(from) {
                prop_assert!(
                    !board.is_color_at(to, piece.color),
                    "{} -> {} lands on own piece", from, to
                );
            }
        }
    }

    /// Slider destinations always have a clear path strictly between
    /// origin and destination: rays stop at the first occupied square
    #[test]
    fn prop_rays_stop_at_first_blocker(board in arb_board()) {
        for (from, piece) in board.occupied().collect::<Vec<_>>() {
            let slides = matches!(
                piece.kind,
                PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen
            );
            if !slides {
                continue;
            }
            for to in board.destinations_from(from) {
                prop_assert!(
                    path_between_is_clear(&board, from, to),
                    "{} -> {} passes through a blocker", from, to
                );
            }
        }
    }

    /// Attack scan is idempotent for a fixed board
    #[test]
    fn prop_attack_scan_idempotent(board in arb_board(), idx in 0..64usize, by in arb_color()) {
        let target = Square(idx / 8, idx % 8);
        let first = board.is_square_attacked(target, by);
        let second = board.is_square_attacked(target, by);
        prop_assert_eq!(first, second);
    }

    /// Random legal play: the mover's king is never left attacked, both
    /// kings survive, and the en-passant window is one half-move wide
    #[test]
    fn prop_random_play_invariants(seed in any::<u64>()) {
        use rand::prelude::*;

        let mut game = Game::new(Clock::default());
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..40 {
            if game.result().is_some() {
                break;
            }
            let mover = game.turn();
            let legal: Vec<(Square, Square)> = game
                .board()
                .occupied()
                .filter(|(_, p)| p.color == mover)
                .flat_map(|(from, _)| {
                    game.possible_moves(from)
                        .unwrap_or_default()
                        .into_iter()
                        .map(move |to| (from, to))
                })
                .collect();
            prop_assert!(!legal.is_empty(), "no legal moves but game not over");

            let (from, to) = legal[rng.gen_range(0..legal.len())];
            game.try_move(from, to).unwrap();

            prop_assert!(!game.board().is_in_check(mover), "mover left own king attacked");
            prop_assert!(game.board().find_king(Color::White).is_some());
            prop_assert!(game.board().find_king(Color::Black).is_some());

            // Only the side that just moved may own a flagged pawn.
            let flagged: Vec<_> = game
                .board()
                .occupied()
                .filter(|(_, p)| p.en_passant_capturable)
                .collect();
            prop_assert!(flagged.len() <= 1);
            for (_, pawn) in flagged {
                prop_assert_eq!(pawn.color, mover);
            }
        }
    }
}
