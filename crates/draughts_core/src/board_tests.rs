use super::*;

const START_SNAPSHOT: &str = "--------------------000000000011111111111111111111";

#[test]
fn test_startpos_layout() {
    let board = Board::startpos();
    assert_eq!(board.count(Color::White), 20);
    assert_eq!(board.count(Color::Brown), 20);
    assert_eq!(board.empty_count(), 10);
    for sq in 1..=20 {
        assert_eq!(board.occupant_at(sq), Some(Piece::man(Color::Brown)));
    }
    for sq in 21..=30 {
        assert!(board.is_empty(sq));
    }
    for sq in 31..=50 {
        assert_eq!(board.occupant_at(sq), Some(Piece::man(Color::White)));
    }
    board.validate().unwrap();
}

#[test]
fn test_startpos_collection_order() {
    let board = Board::startpos();
    let white: Vec<Square> = board.squares_of(Color::White).to_vec();
    assert_eq!(white.first(), Some(&50));
    assert_eq!(white.last(), Some(&31));
    let brown: Vec<Square> = board.squares_of(Color::Brown).to_vec();
    assert_eq!(brown.first(), Some(&1));
    assert_eq!(brown.last(), Some(&20));
}

#[test]
fn test_snapshot_of_startpos() {
    let board = Board::startpos();
    assert_eq!(board.snapshot(), START_SNAPSHOT);
    assert_eq!(Board::from_snapshot(&board.snapshot()).unwrap(), board_from_parts(&board));
}

// Snapshot parsing rebuilds collections in square order, so compare
// occupants rather than collection order.
fn board_from_parts(board: &Board) -> Board {
    let mut rebuilt = Board::empty();
    for sq in 1..=50u8 {
        if let Some(piece) = board.occupant_at(sq) {
            rebuilt.place(sq, piece).unwrap();
        }
    }
    rebuilt
}

#[test]
fn test_snapshot_symbols() {
    let mut board = Board::empty();
    board.place(1, Piece::king(Color::White)).unwrap();
    board.place(2, Piece::man(Color::White)).unwrap();
    board.place(3, Piece::man(Color::Brown)).unwrap();
    board.place(50, Piece::king(Color::Brown)).unwrap();
    let snap = board.snapshot();
    assert!(snap.starts_with("21-0"));
    assert!(snap.ends_with("0="));

    let parsed = Board::from_snapshot(&format!("{snap}#")).unwrap();
    assert_eq!(parsed, board);
}

#[test]
fn test_snapshot_rejects_bad_tokens() {
    assert!(matches!(
        Board::from_snapshot("000"),
        Err(RulesError::InvalidSnapshot(_))
    ));
    let bad: String = std::iter::repeat('x').take(50).collect();
    assert!(matches!(
        Board::from_snapshot(&bad),
        Err(RulesError::InvalidSnapshot(_))
    ));
}

#[test]
fn test_place_and_remove() {
    let mut board = Board::empty();
    board.place(23, Piece::man(Color::White)).unwrap();
    assert_eq!(board.place(23, Piece::man(Color::Brown)), Err(RulesError::Occupied(23)));
    assert_eq!(board.place(0, Piece::man(Color::Brown)), Err(RulesError::InvalidSquare(0)));
    assert_eq!(board.place(51, Piece::man(Color::Brown)), Err(RulesError::InvalidSquare(51)));

    assert_eq!(board.remove(23), Ok(Piece::man(Color::White)));
    assert_eq!(board.remove(23), Err(RulesError::EmptySquare(23)));
    assert_eq!(board.count(Color::White), 0);
    board.validate().unwrap();
}

#[test]
fn test_move_piece_keeps_collection_slot() {
    let mut board = Board::startpos();
    let slot = board
        .squares_of(Color::White)
        .iter()
        .position(|&s| s == 32)
        .unwrap();
    board.move_piece(32, 28).unwrap();
    assert_eq!(board.squares_of(Color::White)[slot], 28);
    assert!(board.is_empty(32));
    assert_eq!(board.occupant_at(28), Some(Piece::man(Color::White)));
    board.validate().unwrap();

    assert_eq!(board.move_piece(28, 1), Err(RulesError::Occupied(1)));
    assert_eq!(board.move_piece(27, 22), Err(RulesError::EmptySquare(27)));
}

#[test]
fn test_promotion_only_on_far_row() {
    let mut board = Board::empty();
    board.place(3, Piece::man(Color::White)).unwrap();
    board.place(48, Piece::man(Color::Brown)).unwrap();
    board.place(30, Piece::man(Color::White)).unwrap();

    assert!(board.promote_if_on_far_row(3).unwrap());
    assert!(board.promote_if_on_far_row(48).unwrap());
    assert!(!board.promote_if_on_far_row(30).unwrap());
    assert_eq!(board.occupant_at(3), Some(Piece::king(Color::White)));
    assert_eq!(board.occupant_at(48), Some(Piece::king(Color::Brown)));
    // A king is not crowned twice.
    assert!(!board.promote(3).unwrap());
}

#[test]
fn test_apply_capture_removes_pieces() {
    let mut board = Board::empty();
    board.place(39, Piece::man(Color::White)).unwrap();
    board.place(34, Piece::man(Color::Brown)).unwrap();
    board.place(24, Piece::man(Color::Brown)).unwrap();

    let mv = Move::capture(39, vec![30, 19], vec![34, 24]);
    let effect = board.apply(&mv).unwrap();
    assert_eq!(effect.captured.len(), 2);
    assert!(!effect.promoted);
    assert_eq!(board.count(Color::Brown), 0);
    assert_eq!(board.occupant_at(19), Some(Piece::man(Color::White)));
    board.validate().unwrap();
}

#[test]
fn test_apply_promotes_at_end_of_move() {
    let mut board = Board::empty();
    board.place(7, Piece::man(Color::White)).unwrap();
    let effect = board.apply(&Move::simple(7, 1)).unwrap();
    assert!(effect.promoted);
    assert_eq!(board.occupant_at(1), Some(Piece::king(Color::White)));
}

#[test]
fn test_apply_rejects_own_piece_capture() {
    let mut board = Board::empty();
    board.place(32, Piece::man(Color::White)).unwrap();
    board.place(28, Piece::man(Color::White)).unwrap();
    let mv = Move::capture(32, vec![23], vec![28]);
    assert!(matches!(board.apply(&mv), Err(RulesError::IllegalMove(_))));
}

#[test]
fn test_off_board_moves_are_errors() {
    let board = Board::startpos();
    assert!(matches!(board.play(&Move::simple(0, 1)), Err(RulesError::InvalidSquare(0))));
    assert!(matches!(board.play(&Move::simple(32, 0)), Err(RulesError::InvalidSquare(0))));
    assert!(matches!(board.play(&Move::simple(51, 46)), Err(RulesError::InvalidSquare(51))));

    let mut copy = board.clone();
    assert_eq!(copy.promote_if_on_far_row(0), Err(RulesError::InvalidSquare(0)));
    assert_eq!(copy, board);
}

#[test]
fn test_play_leaves_original_untouched() {
    let board = Board::startpos();
    let next = board.play(&Move::simple(32, 28)).unwrap();
    assert_eq!(board, Board::startpos());
    assert!(next.is_empty(32));
}

#[test]
fn test_validate_detects_corruption() {
    let mut board = Board::startpos();
    board.squares[20] = Some(Piece::man(Color::White));
    assert!(matches!(
        board.validate(),
        Err(RulesError::InvariantViolation(_))
    ));

    let mut board = Board::startpos();
    board.pieces[Color::Brown.idx()].push(1);
    assert!(matches!(
        board.validate(),
        Err(RulesError::InvariantViolation(_))
    ));

    let mut board = Board::startpos();
    board.pieces[Color::White.idx()][0] = 25;
    assert!(matches!(
        board.validate(),
        Err(RulesError::InvariantViolation(_))
    ));
}

#[test]
fn test_display_grid() {
    let text = Board::startpos().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 10);
    assert!(lines[0].starts_with("  b   b"));
    assert_eq!(lines[0].matches('b').count(), 5);
    assert!(lines[9].starts_with("w   w"));
    assert_eq!(lines[4].matches('.').count(), 5);
    assert!(lines[0].ends_with(" 1- 5"));
}
