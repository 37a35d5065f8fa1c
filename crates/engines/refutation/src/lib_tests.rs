use super::*;
use draughts_core::{legal_moves, Move, Piece};

fn two_men(brown: u8, white: u8) -> Board {
    let mut board = Board::empty();
    board.place(brown, Piece::man(Color::Brown)).unwrap();
    board.place(white, Piece::man(Color::White)).unwrap();
    board
}

#[test]
fn refutation_engine_returns_legal_move() {
    let mut engine = RefutationEngine::with_seed(7);
    let board = Board::startpos();

    let result = engine.search(&board, Color::White).unwrap();

    let mv = result.best_move.expect("start position has moves");
    assert!(legal_moves(&board, Color::White).unwrap().contains(&mv));
    assert_eq!(result.candidates, 9);
    assert_eq!(result.refuted, 0);
    assert_eq!(result.nodes, 9);
}

#[test]
fn refutation_engine_avoids_hanging_a_piece() {
    // 18-23 lets 29 take on 23; 18-22 is safe.
    let board = two_men(18, 29);
    for seed in 0..16 {
        let mut engine = RefutationEngine::with_seed(seed);
        let result = engine.search(&board, Color::Brown).unwrap();
        assert_eq!(result.best_move, Some(Move::simple(18, 22)), "seed {seed}");
        assert_eq!(result.refuted, 1);
        assert_eq!(result.reply_capture, 0);
    }
}

#[test]
fn refutation_engine_accepts_least_bad_when_all_refuted() {
    let board = two_men(18, 28);
    let mut nodes = 0;
    let candidates = evaluate_candidates(&board, Color::Brown, &mut nodes).unwrap();
    assert_eq!(candidates.len(), 2);
    assert!(candidates.iter().all(|c| c.reply == Some(1)));

    let mut engine = RefutationEngine::with_seed(3);
    let result = engine.search(&board, Color::Brown).unwrap();
    assert!(result.best_move.is_some());
    assert_eq!(result.refuted, 2);
    assert_eq!(result.reply_capture, 1);
}

#[test]
fn select_prefers_unrefuted_then_shortest_reply() {
    let cand = |to: u8, reply: Option<usize>| Candidate {
        mv: Move::simple(18, to),
        reply,
    };

    let mixed = vec![cand(22, Some(1)), cand(23, None)];
    let kept = select_candidates(&mixed);
    assert_eq!(kept, vec![&mixed[1]]);

    let all_refuted = vec![cand(22, Some(3)), cand(23, Some(1)), cand(24, Some(1))];
    let kept = select_candidates(&all_refuted);
    assert_eq!(kept, vec![&all_refuted[1], &all_refuted[2]]);

    assert!(select_candidates(&[]).is_empty());
}

#[test]
fn refutation_engine_takes_mandatory_capture() {
    let mut board = two_men(23, 28);
    board.place(1, Piece::man(Color::Brown)).unwrap();
    let mut engine = RefutationEngine::with_seed(11);
    let result = engine.search(&board, Color::White).unwrap();
    assert_eq!(result.best_move, Some(Move::capture(28, vec![19], vec![23])));
}

#[test]
fn refutation_engine_reports_no_move_when_blocked() {
    let mut board = Board::empty();
    board.place(46, Piece::man(Color::White)).unwrap();
    board.place(41, Piece::man(Color::Brown)).unwrap();
    board.place(37, Piece::man(Color::Brown)).unwrap();
    let mut engine = RefutationEngine::with_seed(0);
    let result = engine.search(&board, Color::White).unwrap();
    assert!(result.best_move.is_none());
    assert_eq!(result.candidates, 0);
}

#[test]
fn seeded_engines_agree() {
    let board = Board::startpos();
    let a = RefutationEngine::with_seed(42).search(&board, Color::White).unwrap();
    let b = RefutationEngine::with_seed(42).search(&board, Color::White).unwrap();
    assert_eq!(a.best_move, b.best_move);
}
