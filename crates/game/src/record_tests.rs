use super::*;
use draughts_core::Move;

fn entry(mover: Color, from_token: &str, is_capture: bool, dests: &[Square]) -> MoveLogEntry {
    MoveLogEntry {
        mover,
        from_token: from_token.to_string(),
        is_capture,
        promoted: false,
        destinations: dests.to_vec(),
    }
}

#[test]
fn test_entry_notation() {
    assert_eq!(entry(Color::White, "32", false, &[28]).notation(), "32-28");
    assert_eq!(entry(Color::Brown, "19(D)", true, &[30, 44]).notation(), "19(D)x30x44");
    let mut promo = entry(Color::White, "14", true, &[5]);
    promo.promoted = true;
    assert_eq!(promo.notation(), "14x5=D");
}

#[test]
fn test_terminal_signal_perspective() {
    let won = TerminalSignal::new(Some(Color::White), Color::White);
    assert_eq!(won.result, GameResult::Win);
    assert_eq!(won.winner, Some(Color::White));

    let lost = TerminalSignal::new(Some(Color::Brown), Color::White);
    assert_eq!(lost.result, GameResult::Loss);

    let draw = TerminalSignal::new(None, Color::Brown);
    assert_eq!(draw.result, GameResult::Draw);
    assert_eq!(draw.winner, None);
}

#[test]
fn test_record_accumulates_per_side() {
    let start = Board::startpos();
    let mut record = GameRecord::new(&start, Color::White);
    let after_white = start.play(&Move::simple(32, 28)).unwrap();
    record.push(entry(Color::White, "32", false, &[28]), &after_white);
    let after_brown = after_white.play(&Move::simple(19, 23)).unwrap();
    record.push(entry(Color::Brown, "19", false, &[23]), &after_brown);

    assert_eq!(record.white_moves, "32-28#");
    assert_eq!(record.brown_moves, "19-23#");
    assert_eq!(record.board_states.matches('#').count(), 3);
    assert!(record.board_states.starts_with(&start.snapshot()));

    let boards = record.boards().unwrap();
    assert_eq!(boards.len(), 3);
    assert_eq!(boards[2].snapshot(), after_brown.snapshot());
}

#[test]
fn test_record_json_file() {
    let mut record = GameRecord::new(&Board::startpos(), Color::Brown);
    record.result = Some(TerminalSignal::new(None, Color::Brown));
    let path = std::env::temp_dir().join(format!("draughts-record-{}.json", std::process::id()));
    record.save(&path).unwrap();
    let loaded = GameRecord::load(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, record);
}
