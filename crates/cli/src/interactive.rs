//! Line-based play against the computer.
//!
//! Each input line is either a square number (one click), a move in notation
//! (`32-28`, `39x30x19`, `39x19`), or a command.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use draughts_core::{parse_move, parse_squares, Engine};
use draughts_game::{ClickOutcome, Committed, Game, GameError, Phase};

const HELP: &str = "\
Enter a square (e.g. 32) to select or move, or a whole move (32-28, 39x30x19).
Commands: board, moves, help, quit";

pub fn run<E: Engine>(game: &mut Game<E>) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("{HELP}");
    println!("You play {}.", game.human());
    if !computer_moves(game)? {
        return Ok(());
    }
    print!("{}", game.board());
    prompt(&mut stdout)?;

    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        match input {
            "" => {}
            "quit" | "exit" => break,
            "help" => println!("{HELP}"),
            "board" => print!("{}", game.board()),
            "moves" => {
                let moves: Vec<String> = game.legal_moves()?.iter().map(|m| m.to_string()).collect();
                println!("{}", moves.join("  "));
            }
            _ => {
                enter(game, input)?;
                if !computer_moves(game)? {
                    break;
                }
                if !matches!(game.phase(), Phase::ContinuingCapture { .. }) {
                    print!("{}", game.board());
                }
            }
        }

        if let Some(signal) = game.terminal() {
            println!("Game over: {:?}", signal.result);
            break;
        }
        if matches!(game.phase(), Phase::AwaitingSelection) && game.legal_moves()?.is_empty() {
            println!("You have no legal move.");
            break;
        }
        prompt(&mut stdout)?;
    }
    Ok(())
}

/// A whole move at selection time is matched against the legal moves, so a
/// capture may be given by its first and last squares. Anything else is fed
/// in as clicks.
fn enter<E: Engine>(game: &mut Game<E>, input: &str) -> Result<()> {
    let squares = match parse_squares(input) {
        Ok(squares) => squares,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    if squares.len() > 1 && matches!(game.phase(), Phase::AwaitingSelection) {
        match parse_move(game.board(), game.turn().side_to_move, input)? {
            Some(mv) => match game.play(&mv) {
                Ok(c) => print_committed(&c),
                Err(e) => println!("{e}"),
            },
            None => println!("{input} is not a legal move"),
        }
        return Ok(());
    }

    for sq in squares {
        match game.click(sq) {
            Ok(outcome) => report(outcome),
            Err(GameError::Rules(e)) => println!("{e}"),
            Err(e) => {
                println!("{e}");
                break;
            }
        }
    }
    Ok(())
}

fn prompt(stdout: &mut io::Stdout) -> io::Result<()> {
    write!(stdout, "> ")?;
    stdout.flush()
}

fn report(outcome: ClickOutcome) {
    match outcome {
        ClickOutcome::Selected {
            square,
            destinations,
            requires_continuation,
        } => {
            if destinations.is_empty() {
                println!("{square} cannot move");
            } else {
                let more = if requires_continuation { " (capture continues)" } else { "" };
                println!("{square} -> {destinations:?}{more}");
            }
        }
        ClickOutcome::Stepped { to, destinations } => println!("at {to}, next: {destinations:?}"),
        ClickOutcome::Committed(c) => print_committed(&c),
        ClickOutcome::Ignored => {}
    }
}

fn print_committed(c: &Committed) {
    println!("{}: {}", c.entry.mover, c.entry.notation());
}

/// Plays computer moves until it is the human's turn or the game ends.
/// Returns `false` if the computer is blocked.
fn computer_moves<E: Engine>(game: &mut Game<E>) -> Result<bool> {
    while matches!(game.phase(), Phase::ComputerTurn) {
        match game.computer_turn() {
            Ok(c) => print_committed(&c),
            Err(GameError::NoLegalMoves(side)) => {
                println!("{side} has no legal move.");
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(true)
}
