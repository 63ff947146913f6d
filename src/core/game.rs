//! Maze navigation and halt-cell state machine.
//!
//! `MazeGame` is immutable once built; every transition takes a `GameState`
//! and returns the next one together with a `GameEvent`.
use std::collections::HashMap;

use log::{debug, info};

use crate::core::halt::HaltCell;
use crate::core::maze::{Direction, Grid, Position};

/// Snapshot of the player's progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    pub position: Position,
    /// Key of the halt cell currently blocking movement.
    pub pending: Option<Position>,
    pub game_over: bool,
    pub escaped: bool,
}

impl GameState {
    pub fn is_finished(&self) -> bool {
        self.game_over || self.escaped
    }
}

/// What a single transition did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// Game finished, or input didn't apply in the current phase.
    Ignored,
    Bumped,
    Moved,
    Halted,
    Answered,
    Failed,
    Escaped,
}

impl GameEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            GameEvent::Ignored => "ignored",
            GameEvent::Bumped => "bumped",
            GameEvent::Moved => "moved",
            GameEvent::Halted => "halted",
            GameEvent::Answered => "answered",
            GameEvent::Failed => "failed",
            GameEvent::Escaped => "escaped",
        }
    }
}

#[derive(Clone, Debug)]
pub struct MazeGame {
    grid: Grid,
    start: Position,
    end: Position,
    halts: HashMap<Position, HaltCell>,
}

impl MazeGame {
    /// Assumes a validated level; see `Level::build`.
    pub(crate) fn from_parts(grid: Grid, start: Position, end: Position, halts: HashMap<Position, HaltCell>) -> Self {
        Self { grid, start, end, halts }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn halt_cell(&self, pos: Position) -> Option<&HaltCell> {
        self.halts.get(&pos)
    }

    pub fn halt_cells(&self) -> impl Iterator<Item = &HaltCell> {
        self.halts.values()
    }

    /// The question blocking `state`, if any.
    pub fn pending_question(&self, state: &GameState) -> Option<&HaltCell> {
        state.pending.and_then(|p| self.halts.get(&p))
    }

    pub fn initial_state(&self) -> GameState {
        GameState {
            position: self.start,
            pending: None,
            game_over: false,
            escaped: false,
        }
    }

    pub fn attempt_move(&self, state: &GameState, dir: Direction) -> (GameState, GameEvent) {
        if state.is_finished() || state.pending.is_some() {
            return (*state, GameEvent::Ignored);
        }

        let Some(target) = self.grid.step(state.position, dir) else {
            debug!("bump {} at {}", dir.as_str(), state.position);
            return (*state, GameEvent::Bumped);
        };

        if self.halts.contains_key(&target) {
            info!("halted at {} on the way {}", target, dir.as_str());
            let next = GameState { pending: Some(target), ..*state };
            return (next, GameEvent::Halted);
        }

        debug!("move {} -> {}", dir.as_str(), target);
        self.arrive(state, target, GameEvent::Moved)
    }

    pub fn answer_question(&self, state: &GameState, option: usize) -> (GameState, GameEvent) {
        if state.is_finished() {
            return (*state, GameEvent::Ignored);
        }
        let Some(halt) = self.pending_question(state) else {
            return (*state, GameEvent::Ignored);
        };

        if !halt.is_correct(option) {
            info!("wrong answer {} at {}", option, halt.position());
            let next = GameState { pending: None, game_over: true, ..*state };
            return (next, GameEvent::Failed);
        }

        info!("correct answer at {}", halt.position());
        // Validation guarantees the jump lands on an open cell.
        let target = halt
            .advance(state.position)
            .filter(|&p| self.grid.is_path(p))
            .unwrap_or(state.position);
        let cleared = GameState { pending: None, ..*state };
        self.arrive(&cleared, target, GameEvent::Answered)
    }

    fn arrive(&self, state: &GameState, target: Position, event: GameEvent) -> (GameState, GameEvent) {
        let mut next = GameState { position: target, pending: None, ..*state };
        if target == self.end {
            info!("escaped at {}", target);
            next.escaped = true;
            return (next, GameEvent::Escaped);
        }
        (next, event)
    }
}
