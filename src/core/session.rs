//! Owns the single mutable game state for a frontend.
use log::{debug, info};

use crate::core::game::{GameEvent, GameState, MazeGame};
use crate::core::halt::HaltCell;
use crate::core::input::Command;

pub struct Session {
    game: MazeGame,
    state: GameState,
    moves: u32,
}

impl Session {
    pub fn new(game: MazeGame) -> Self {
        let state = game.initial_state();
        Self { game, state, moves: 0 }
    }

    pub fn game(&self) -> &MazeGame {
        &self.game
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn pending_question(&self) -> Option<&HaltCell> {
        self.game.pending_question(&self.state)
    }

    /// Accepted moves since the last restart.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn restart(&mut self) {
        info!("restart after {} moves", self.moves);
        self.state = self.game.initial_state();
        self.moves = 0;
    }

    /// Applies one command. `Quit` is left to the frontend and reports `Ignored`.
    pub fn apply(&mut self, cmd: Command) -> GameEvent {
        let (next, event) = match cmd {
            Command::Move(dir) => self.game.attempt_move(&self.state, dir),
            Command::Answer(i) => self.game.answer_question(&self.state, i),
            Command::Restart => {
                self.restart();
                return GameEvent::Ignored;
            }
            Command::Quit => return GameEvent::Ignored,
        };
        if matches!(event, GameEvent::Moved | GameEvent::Escaped) {
            self.moves += 1;
        }
        debug!("{:?} -> {} at {}", cmd, event.as_str(), next.position);
        self.state = next;
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::level::Level;
    use crate::core::maze::{Direction, Position};

    fn session() -> Session {
        let level = Level::from_json_str(
            r#"{"maze": ["S...E"], "halt_cells": [
                {"row": 0, "col": 2, "question": "q", "options": ["no", "yes"], "answer": 1, "col_offset": 1}
            ]}"#,
        )
        .unwrap();
        Session::new(level.build().unwrap())
    }

    #[test]
    fn commands_drive_the_game() {
        let mut s = session();
        assert_eq!(s.apply(Command::Move(Direction::Right)), GameEvent::Moved);
        assert_eq!(s.apply(Command::Move(Direction::Right)), GameEvent::Halted);
        assert_eq!(s.pending_question().map(|h| h.question.as_str()), Some("q"));
        assert_eq!(s.apply(Command::Answer(1)), GameEvent::Answered);
        assert_eq!(s.state().position, Position::new(0, 2));
        assert_eq!(s.apply(Command::Move(Direction::Right)), GameEvent::Moved);
        assert_eq!(s.apply(Command::Move(Direction::Right)), GameEvent::Escaped);
        assert_eq!(s.moves(), 3);
    }

    #[test]
    fn restart_resets_state_and_counter() {
        let mut s = session();
        s.apply(Command::Move(Direction::Right));
        s.apply(Command::Move(Direction::Right));
        s.apply(Command::Answer(0));
        assert!(s.state().game_over);
        assert_eq!(s.apply(Command::Restart), GameEvent::Ignored);
        assert_eq!(*s.state(), s.game().initial_state());
        assert_eq!(s.moves(), 0);
    }

    #[test]
    fn quit_does_not_touch_state() {
        let mut s = session();
        let before = *s.state();
        assert_eq!(s.apply(Command::Quit), GameEvent::Ignored);
        assert_eq!(*s.state(), before);
    }
}
