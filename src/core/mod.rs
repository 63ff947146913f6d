//! Core game types and logic (maze, halt cells, state machine, input).
//!
//! Re-exports:
//! - `maze`: Grid, positions, directions, row parsing
//! - `halt`: Trivia checkpoints and their validation
//! - `level`: Level files and the bundled levels
//! - `game`: `MazeGame` transitions over `GameState`
//! - `input`: Raw keys to commands
//! - `session`: Mutable state owner used by frontends

pub mod error;
pub mod game;
pub mod halt;
pub mod input;
pub mod level;
pub mod maze;
pub mod session;

pub use error::LevelError;
pub use game::{GameEvent, GameState, MazeGame};
pub use halt::HaltCell;
pub use input::{Command, Key};
pub use level::Level;
pub use maze::{Cell, Direction, Grid, Position};
pub use session::Session;
