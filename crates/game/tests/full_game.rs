//! Whole games driven through the click interface.

use draughts_core::{Board, Color, Engine, NUM_SQUARES};
use draughts_game::{
    ClickOutcome, Game, GameError, GameRecord, GameStats, Phase, RecordWriter, StatsObserver,
};
use refutation_engine::RefutationEngine;

const MAX_PLIES: usize = 2000;

/// Plays the human side by clicking the squares of a move chosen by `pilot`.
fn human_turn(game: &mut Game<RefutationEngine>, pilot: &mut RefutationEngine) -> Result<bool, GameError> {
    let side = game.turn().side_to_move;
    let result = pilot.search(game.board(), side)?;
    let Some(mv) = result.best_move else {
        return Err(GameError::NoLegalMoves(side));
    };

    match game.click(mv.from)? {
        ClickOutcome::Selected { destinations, .. } => {
            assert!(destinations.contains(&mv.path[0]), "{mv} not offered: {destinations:?}")
        }
        other => panic!("selecting {} gave {other:?}", mv.from),
    }
    for (i, &sq) in mv.path.iter().enumerate() {
        let last = i + 1 == mv.path.len();
        match game.click(sq)? {
            ClickOutcome::Committed(c) => {
                assert!(last, "{mv} committed early");
                assert_eq!(c.mv, mv);
                return Ok(c.terminal.is_some());
            }
            ClickOutcome::Stepped { destinations, .. } => {
                assert!(!last);
                assert!(destinations.contains(&mv.path[i + 1]));
            }
            other => panic!("clicking {sq} during {mv} gave {other:?}"),
        }
    }
    unreachable!("move {mv} never committed")
}

fn play_out(game: &mut Game<RefutationEngine>, pilot: &mut RefutationEngine) -> usize {
    for ply in 0..MAX_PLIES {
        let board_before: Board = game.board().clone();
        let step = if matches!(game.phase(), Phase::ComputerTurn) {
            game.computer_turn().map(|c| c.terminal.is_some())
        } else {
            human_turn(game, pilot)
        };

        let board = game.board();
        assert_eq!(
            board.count(Color::White) + board.count(Color::Brown) + board.empty_count(),
            NUM_SQUARES
        );
        match step {
            Ok(true) => return ply + 1,
            Ok(false) => assert_ne!(&board_before, board),
            Err(GameError::NoLegalMoves(_)) => return ply,
            Err(e) => panic!("ply {ply}: {e}"),
        }
    }
    MAX_PLIES
}

#[test]
fn engine_games_through_clicks() {
    for seed in 0..6 {
        let human = if seed % 2 == 0 { Color::White } else { Color::Brown };
        let mut game = Game::new(human, RefutationEngine::with_seed(seed));
        let mut pilot = RefutationEngine::with_seed(seed + 100);

        let plies = play_out(&mut game, &mut pilot);
        let record: &GameRecord = game.record();
        assert_eq!(record.entries.len(), plies, "seed {seed}");
        assert_eq!(record.board_states.matches('#').count(), plies + 1);
        assert_eq!(
            record.white_moves.matches('#').count() + record.brown_moves.matches('#').count(),
            plies
        );

        let boards = record.boards().unwrap();
        assert_eq!(boards.last().map(Board::snapshot), Some(game.board().snapshot()));

        if let Some(signal) = game.terminal() {
            assert_eq!(record.result, Some(signal));
            assert!(matches!(game.computer_turn(), Err(GameError::GameOver)));
        }
    }
}

#[test]
fn finished_game_updates_stats_and_writes_record() {
    let dir = std::env::temp_dir().join(format!("draughts-full-game-{}", std::process::id()));
    let stats_path = dir.join("stats.json");
    std::fs::create_dir_all(&dir).unwrap();

    let mut finished = 0;
    for seed in 0..4 {
        let mut game = Game::new(Color::White, RefutationEngine::with_seed(seed));
        game.add_observer(Box::new(RecordWriter::new(dir.join("records"))));
        game.add_observer(Box::new(StatsObserver::new(&stats_path)));
        let mut pilot = RefutationEngine::with_seed(seed + 7);
        play_out(&mut game, &mut pilot);
        if game.is_over() {
            finished += 1;
        }
    }

    let stats = GameStats::load_or_default(&stats_path).unwrap();
    assert_eq!(stats.played, finished);
    assert_eq!(stats.won + stats.drawn + stats.lost, finished);

    let records = std::fs::read_dir(dir.join("records"))
        .map(|entries| entries.count())
        .unwrap_or(0);
    assert_eq!(records as u32, finished);

    std::fs::remove_dir_all(&dir).ok();
}
