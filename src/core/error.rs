//! Level loading errors.
use thiserror::Error;

use crate::core::maze::Position;

#[derive(Debug, Error)]
pub enum LevelError {
    #[error("could not read level file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed level JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("maze has no cells")]
    EmptyMaze,

    #[error("maze row {row} has {found} cells, expected {expected}")]
    RaggedRow { row: usize, expected: usize, found: usize },

    #[error("unknown maze character {ch:?} at ({row}, {col})")]
    UnknownCell { row: usize, col: usize, ch: char },

    #[error("maze marks more than one {0} cell")]
    DuplicateMarker(&'static str),

    #[error("level has no {0} cell")]
    MissingMarker(&'static str),

    #[error("{what} cell {pos} is outside the grid or on a wall")]
    BlockedMarker { what: &'static str, pos: Position },

    #[error("halt cell {0} is outside the grid")]
    HaltOutOfBounds(Position),

    #[error("halt cell {0} is defined twice")]
    DuplicateHalt(Position),

    #[error("halt cell {0} has no answer options")]
    NoOptions(Position),

    #[error("halt cell {pos} has {options} options, at most {max} can be selected")]
    TooManyOptions { pos: Position, options: usize, max: usize },

    #[error("halt cell {pos}: answer index {answer} out of range for {options} options")]
    AnswerOutOfRange { pos: Position, answer: usize, options: usize },

    #[error("halt cell {pos}: offset ({d_row}, {d_col}) from {from} leaves the open maze")]
    BadOffset { pos: Position, from: Position, d_row: isize, d_col: isize },
}
