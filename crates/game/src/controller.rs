//! The game controller: turns square clicks and engine moves into committed
//! moves, and decides when the game ends.

use draughts_core::{
    check_square, destinations_for, from_token, legal_moves, next_capture_steps, Board,
    CaptureObligation, Color, Engine, Move, RulesError, Square,
};
use tracing::{debug, info};

use crate::error::GameError;
use crate::observer::GameObserver;
use crate::record::{GameRecord, MoveLogEntry, TerminalSignal};
use crate::turn::{Phase, TurnState};

/// Response to a click on a square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A piece was selected. Empty `destinations` means the selection was
    /// refused and nothing changed.
    Selected {
        square: Square,
        destinations: Vec<Square>,
        /// The capture this piece must make takes more than one step.
        requires_continuation: bool,
    },
    /// An intermediate capture landing was accepted.
    Stepped { to: Square, destinations: Vec<Square> },
    Committed(Committed),
    /// The click meant nothing in the current phase.
    Ignored,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed {
    pub mv: Move,
    pub entry: MoveLogEntry,
    /// Set when this move ended the game.
    pub terminal: Option<TerminalSignal>,
}

pub struct Game<E: Engine> {
    board: Board,
    turn: TurnState,
    human: Color,
    engine: E,
    record: GameRecord,
    observers: Vec<Box<dyn GameObserver>>,
}

impl<E: Engine> Game<E> {
    /// A new game from the start position. White moves first.
    pub fn new(human: Color, mut engine: E) -> Self {
        let board = Board::startpos();
        let record = GameRecord::new(&board, human);
        engine.new_game();
        info!(%human, engine = engine.name(), "new game");
        Self {
            board,
            turn: TurnState::new(Color::White, 0, human),
            human,
            engine,
            record,
            observers: Vec::new(),
        }
    }

    /// A game resumed from an arbitrary position. A position that is already
    /// decided (a side without pieces, or the draw counter at its limit) is
    /// refused with [`GameError::GameOver`].
    pub fn from_position(
        board: Board,
        side_to_move: Color,
        draw_counter: u32,
        human: Color,
        mut engine: E,
    ) -> Result<Self, GameError> {
        board.validate()?;
        let turn = TurnState::new(side_to_move, draw_counter, human);
        if turn.is_draw() || Color::ALL.iter().any(|&c| board.count(c) == 0) {
            return Err(GameError::GameOver);
        }
        engine.new_game();
        let record = GameRecord::new(&board, human);
        Ok(Self {
            board,
            turn,
            human,
            engine,
            record,
            observers: Vec::new(),
        })
    }

    pub fn add_observer(&mut self, observer: Box<dyn GameObserver>) {
        self.observers.push(observer);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn phase(&self) -> &Phase {
        &self.turn.phase
    }

    pub fn human(&self) -> Color {
        self.human
    }

    pub fn record(&self) -> &GameRecord {
        &self.record
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn terminal(&self) -> Option<TerminalSignal> {
        match self.turn.phase {
            Phase::GameOver(signal) => Some(signal),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.turn.is_over()
    }

    /// Legal moves of the side to move.
    pub fn legal_moves(&self) -> Result<Vec<Move>, GameError> {
        Ok(legal_moves(&self.board, self.turn.side_to_move)?)
    }

    /// Handles a click on the raw square identifier `raw`.
    pub fn click(&mut self, raw: u8) -> Result<ClickOutcome, GameError> {
        let sq = check_square(raw)?;
        match self.turn.phase.clone() {
            Phase::GameOver(_) => Err(GameError::GameOver),
            Phase::ComputerTurn => Err(GameError::NotHumanTurn),
            Phase::AwaitingSelection => self.select(sq),
            Phase::AwaitingDestination { from, destinations } => {
                if destinations.contains(&sq) {
                    self.step(from, Vec::new(), sq)
                } else if self.is_own_piece(sq) {
                    self.select(sq)
                } else {
                    Ok(ClickOutcome::Ignored)
                }
            }
            Phase::ContinuingCapture {
                from,
                taken,
                destinations,
            } => {
                if destinations.contains(&sq) {
                    self.step(from, taken, sq)
                } else {
                    Ok(ClickOutcome::Ignored)
                }
            }
        }
    }

    /// Plays a complete move for the human side.
    pub fn play(&mut self, mv: &Move) -> Result<Committed, GameError> {
        self.ensure_human_turn()?;
        if !self.legal_moves()?.contains(mv) {
            return Err(RulesError::IllegalMove(mv.to_string()).into());
        }
        self.commit(mv.clone())
    }

    /// Lets the engine move for the computer side.
    pub fn computer_turn(&mut self) -> Result<Committed, GameError> {
        match self.turn.phase {
            Phase::GameOver(_) => return Err(GameError::GameOver),
            Phase::ComputerTurn => {}
            _ => return Err(GameError::NotComputerTurn),
        }
        let side = self.turn.side_to_move;
        let result = self.engine.search(&self.board, side)?;
        debug!(
            candidates = result.candidates,
            refuted = result.refuted,
            nodes = result.nodes,
            "engine searched"
        );
        let mv = result.best_move.ok_or(GameError::NoLegalMoves(side))?;
        self.commit(mv)
    }

    fn ensure_human_turn(&self) -> Result<(), GameError> {
        match self.turn.phase {
            Phase::GameOver(_) => Err(GameError::GameOver),
            Phase::ComputerTurn => Err(GameError::NotHumanTurn),
            _ => Ok(()),
        }
    }

    fn is_own_piece(&self, sq: Square) -> bool {
        self.board
            .occupant_at(sq)
            .is_some_and(|p| p.color == self.turn.side_to_move)
    }

    fn select(&mut self, sq: Square) -> Result<ClickOutcome, GameError> {
        let obligation = CaptureObligation::analyze(&self.board, self.turn.side_to_move)?;
        let destinations = destinations_for(&obligation, &self.board, sq)?;
        let requires_continuation = !destinations.is_empty() && obligation.longest > 1;
        if !destinations.is_empty() {
            self.turn.phase = Phase::AwaitingDestination {
                from: sq,
                destinations: destinations.clone(),
            };
        }
        Ok(ClickOutcome::Selected {
            square: sq,
            destinations,
            requires_continuation,
        })
    }

    fn step(&mut self, from: Square, taken: Vec<Square>, to: Square) -> Result<ClickOutcome, GameError> {
        let obligation = CaptureObligation::analyze(&self.board, self.turn.side_to_move)?;
        if !obligation.is_mandatory() {
            return Ok(ClickOutcome::Committed(self.commit(Move::simple(from, to))?));
        }

        let tree = obligation.tree_for(from).ok_or_else(|| {
            RulesError::InvariantViolation(format!("no capture tree for selected square {from}"))
        })?;
        let mut taken = taken;
        taken.push(to);

        let next = next_capture_steps(&tree.branches, &taken);
        if !next.is_empty() {
            self.turn.phase = Phase::ContinuingCapture {
                from,
                taken,
                destinations: next.clone(),
            };
            return Ok(ClickOutcome::Stepped {
                to,
                destinations: next,
            });
        }

        let branch = tree
            .branches
            .iter()
            .find(|b| b.landings == taken)
            .ok_or_else(|| {
                RulesError::InvariantViolation(format!("no branch from {from} ends with {taken:?}"))
            })?;
        let mv = branch.to_move(from);
        Ok(ClickOutcome::Committed(self.commit(mv)?))
    }

    fn commit(&mut self, mv: Move) -> Result<Committed, GameError> {
        let mover = self.turn.side_to_move;
        let mut next = self.board.clone();
        let effect = next.apply(&mv)?;
        next.validate()?;
        self.board = next;

        let entry = MoveLogEntry {
            mover,
            from_token: from_token(mv.from, effect.moved),
            is_capture: mv.is_capture(),
            promoted: effect.promoted,
            destinations: mv.path.clone(),
        };
        info!(%mover, notation = %entry.notation(), "move committed");

        self.record.push(entry.clone(), &self.board);
        for observer in &mut self.observers {
            observer.on_move(&entry, &self.board);
        }

        self.turn = self
            .turn
            .after_commit(mv.is_capture(), effect.moved.is_king(), self.human);
        if let Some(left) = self.turn.moves_to_draw() {
            info!(moves_to_draw = left, "draw approaching");
        }

        let terminal = self.check_terminal(mover);
        if let Some(signal) = terminal {
            self.turn.phase = Phase::GameOver(signal);
            self.record.result = Some(signal);
            info!(result = ?signal.result, winner = ?signal.winner, "game over");
            for observer in &mut self.observers {
                observer.on_game_over(&self.record);
            }
        }

        Ok(Committed {
            mv,
            entry,
            terminal,
        })
    }

    fn check_terminal(&self, mover: Color) -> Option<TerminalSignal> {
        let winner = if self.board.count(mover.other()) == 0 {
            Some(mover)
        } else if self.board.count(mover) == 0 {
            Some(mover.other())
        } else if self.turn.is_draw() {
            None
        } else {
            return None;
        };
        Some(TerminalSignal::new(winner, self.human))
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
