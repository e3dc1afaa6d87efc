//! Attack and check detection tests.

use crate::board::{Axis, Board, BoardBuilder, Color, Direction, PieceKind, Square};

#[test]
fn directions_classify_into_axes() {
    let diagonals: Vec<Direction> = Direction::ALL
        .into_iter()
        .filter(|d| d.axis() == Axis::Diagonal)
        .collect();
    assert_eq!(
        diagonals,
        vec![Direction::NW, Direction::NE, Direction::SW, Direction::SE]
    );
    assert_eq!(Direction::N.axis(), Axis::Orthogonal);
}

#[test]
fn direction_between_colinear_squares() {
    assert_eq!(
        Direction::between(Square(7, 0), Square(0, 7)),
        Some(Direction::NE)
    );
    assert_eq!(
        Direction::between(Square(4, 4), Square(4, 0)),
        Some(Direction::W)
    );
    // Knight offsets are not colinear, and a square is not colinear with
    // itself.
    assert_eq!(Direction::between(Square(4, 4), Square(2, 3)), None);
    assert_eq!(Direction::between(Square(4, 4), Square(4, 4)), None);
}

#[test]
fn empty_board_has_no_attacks() {
    let board = Board::empty();
    for row in 0..8 {
        for col in 0..8 {
            let sq = Square(row, col);
            assert!(!board.is_square_attacked(sq, Color::White));
            assert!(!board.is_square_attacked(sq, Color::Black));
        }
    }
}

#[test]
fn rook_attacks_along_open_rank() {
    let board = BoardBuilder::new()
        .piece(Square(0, 0), Color::Black, PieceKind::Rook)
        .build();
    assert!(board.is_square_attacked(Square(0, 7), Color::Black));
}

#[test]
fn rook_attack_is_cut_by_any_blocker() {
    let board = BoardBuilder::new()
        .piece(Square(0, 0), Color::Black, PieceKind::Rook)
        .piece(Square(0, 4), Color::White, PieceKind::Pawn)
        .build();
    assert!(!board.is_square_attacked(Square(0, 7), Color::Black));
    // The blocker itself is attacked.
    assert!(board.is_square_attacked(Square(0, 4), Color::Black));
}

#[test]
fn knight_attacks_by_jump_offset() {
    let board = BoardBuilder::new()
        .piece(Square(2, 1), Color::Black, PieceKind::Knight)
        .build();
    assert!(board.is_square_attacked(Square(0, 0), Color::Black));
}

#[test]
fn only_a_knight_attacks_from_a_knight_offset() {
    for kind in PieceKind::ALL {
        let board = BoardBuilder::new()
            .piece(Square(2, 1), Color::Black, kind)
            .build();
        assert_eq!(
            board.is_square_attacked(Square(0, 0), Color::Black),
            kind == PieceKind::Knight,
            "{} at c6 vs a8",
            kind.name()
        );
    }
}

#[test]
fn white_pawn_attacks_diagonally_forward_only() {
    // White advances toward row 0, so a white pawn on d4 covers c5 and e5.
    let board = BoardBuilder::new()
        .piece(Square(4, 3), Color::White, PieceKind::Pawn)
        .build();
    assert!(board.is_square_attacked(Square(3, 2), Color::White));
    assert!(board.is_square_attacked(Square(3, 4), Color::White));
    // Not straight ahead, not its own square, not backward.
    assert!(!board.is_square_attacked(Square(3, 3), Color::White));
    assert!(!board.is_square_attacked(Square(5, 2), Color::White));
    assert!(!board.is_square_attacked(Square(5, 4), Color::White));
}

#[test]
fn black_pawn_attacks_toward_white_home() {
    let board = BoardBuilder::new()
        .piece(Square(4, 3), Color::Black, PieceKind::Pawn)
        .build();
    assert!(board.is_square_attacked(Square(5, 2), Color::Black));
    assert!(board.is_square_attacked(Square(5, 4), Color::Black));
    assert!(!board.is_square_attacked(Square(3, 2), Color::Black));
}

#[test]
fn king_attacks_all_eight_neighbors() {
    let board = BoardBuilder::new()
        .piece(Square(4, 4), Color::White, PieceKind::King)
        .build();
    for dr in -1..=1isize {
        for dc in -1..=1isize {
            if dr == 0 && dc == 0 {
                continue;
            }
            let sq = Square(4, 4).offset(dr, dc).unwrap();
            assert!(board.is_square_attacked(sq, Color::White), "king vs {sq}");
        }
    }
}

#[test]
fn king_does_not_attack_at_distance_two() {
    // The ray search still finds the king two squares away along an empty
    // corridor; the adjacency guard must reject it.
    let board = BoardBuilder::new()
        .piece(Square(4, 4), Color::White, PieceKind::King)
        .build();
    for dir in Direction::ALL {
        let sq = Square(4, 4).offset(dir.dr * 2, dir.dc * 2).unwrap();
        assert!(!board.is_square_attacked(sq, Color::White), "king vs {sq}");
    }
}

#[test]
fn bishop_attacks_diagonals_only() {
    let board = BoardBuilder::new()
        .piece(Square(4, 4), Color::Black, PieceKind::Bishop)
        .build();
    assert!(board.is_square_attacked(Square(1, 1), Color::Black));
    assert!(board.is_square_attacked(Square(7, 7), Color::Black));
    assert!(!board.is_square_attacked(Square(4, 0), Color::Black));
    assert!(!board.is_square_attacked(Square(0, 4), Color::Black));
}

#[test]
fn queen_attacks_all_eight_directions() {
    let board = BoardBuilder::new()
        .piece(Square(4, 4), Color::Black, PieceKind::Queen)
        .build();
    assert!(board.is_square_attacked(Square(4, 0), Color::Black));
    assert!(board.is_square_attacked(Square(0, 4), Color::Black));
    assert!(board.is_square_attacked(Square(1, 1), Color::Black));
    assert!(board.is_square_attacked(Square(7, 1), Color::Black));
}

#[test]
fn attacker_color_is_respected() {
    let board = BoardBuilder::new()
        .piece(Square(0, 0), Color::White, PieceKind::Rook)
        .build();
    assert!(board.is_square_attacked(Square(0, 7), Color::White));
    assert!(!board.is_square_attacked(Square(0, 7), Color::Black));
}

#[test]
fn enumeration_collects_every_attacker_in_order() {
    // Knight, pawn, and rook all hit e4; knights come first, then pawns,
    // then ray pieces.
    let board = BoardBuilder::new()
        .piece(Square(2, 3), Color::Black, PieceKind::Knight)
        .piece(Square(3, 3), Color::Black, PieceKind::Pawn)
        .piece(Square(4, 0), Color::Black, PieceKind::Rook)
        .build();
    let target = Square(4, 4);

    let attackers = board.find_attacking_pieces(target, Color::Black);
    let kinds: Vec<PieceKind> = attackers.iter().map(|p| p.kind()).collect();
    assert_eq!(
        kinds,
        vec![PieceKind::Knight, PieceKind::Pawn, PieceKind::Rook]
    );
}

#[test]
fn quick_check_result_is_prefix_of_full_enumeration() {
    let board = BoardBuilder::new()
        .piece(Square(2, 3), Color::Black, PieceKind::Knight)
        .piece(Square(3, 3), Color::Black, PieceKind::Pawn)
        .piece(Square(4, 0), Color::Black, PieceKind::Rook)
        .build();
    let target = Square(4, 4);

    let first = board.attackers(target, Color::Black).next().unwrap();
    let full = board.find_attacking_pieces(target, Color::Black);
    assert_eq!(first.square(), full[0].square());
    assert_eq!(first.kind(), PieceKind::Knight);
}

#[test]
fn find_nearest_piece_stops_at_first_occupied_cell() {
    let board = BoardBuilder::new()
        .piece(Square(4, 2), Color::White, PieceKind::Pawn)
        .piece(Square(4, 0), Color::Black, PieceKind::Rook)
        .build();
    let found = board.find_nearest_piece(Square(4, 6), Direction::W).unwrap();
    assert_eq!(found.kind(), PieceKind::Pawn);
    assert_eq!(found.square(), Square(4, 2));
}

#[test]
fn find_nearest_piece_returns_none_on_empty_ray() {
    let board = Board::empty();
    for dir in Direction::ALL {
        assert!(board.find_nearest_piece(Square(4, 4), dir).is_none());
    }
}

#[test]
fn adjacent_squares_are_never_blocked() {
    let board = Board::new();
    for dr in -1..=1isize {
        for dc in -1..=1isize {
            if let Some(to) = Square(4, 4).offset(dr, dc) {
                assert!(!board.is_blocked_path(Square(4, 4), to));
            }
        }
    }
}

#[test]
fn blocked_path_sees_intermediate_pieces_only() {
    let board = BoardBuilder::new()
        .piece(Square(0, 4), Color::White, PieceKind::Pawn)
        .build();
    // Endpoints are excluded; the occupant of either end never blocks.
    assert!(board.is_blocked_path(Square(0, 0), Square(0, 7)));
    assert!(!board.is_blocked_path(Square(0, 0), Square(0, 4)));
    assert!(!board.is_blocked_path(Square(0, 4), Square(0, 7)));
}

#[test]
fn king_in_check_from_back_rank_rook() {
    let board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, PieceKind::King)
        .piece(Square(0, 4), Color::Black, PieceKind::Rook)
        .build();
    assert!(board.is_in_check(Color::White));
    assert!(!board.is_in_check(Color::Black));
}

#[test]
fn interposed_piece_breaks_check() {
    let board = BoardBuilder::new()
        .piece(Square(7, 4), Color::White, PieceKind::King)
        .piece(Square(4, 4), Color::White, PieceKind::Bishop)
        .piece(Square(0, 4), Color::Black, PieceKind::Rook)
        .build();
    assert!(!board.is_in_check(Color::White));
}

#[test]
fn start_position_has_no_checks_or_central_attacks() {
    let board = Board::new();
    assert!(!board.is_in_check(Color::White));
    assert!(!board.is_in_check(Color::Black));
    assert!(!board.is_square_attacked(Square(4, 4), Color::White));
    assert!(!board.is_square_attacked(Square(4, 4), Color::Black));
}

#[test]
fn fen_position_fools_mate_is_check() {
    // 1. f3 e5 2. g4 Qh4# - the black queen delivers mate along the
    // h4-e1 diagonal.
    let board =
        Board::try_from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR").unwrap();
    assert!(board.is_in_check(Color::White));
    let attackers = board.find_attacking_pieces(board.find_king(Color::White).unwrap(), Color::Black);
    assert_eq!(attackers.len(), 1);
    assert_eq!(attackers[0].kind(), PieceKind::Queen);
}
