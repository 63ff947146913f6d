//! Trivia checkpoints that gate movement.
use serde::Deserialize;

use crate::core::error::LevelError;
use crate::core::maze::{Grid, Position};

/// Answers are picked with the keys `1`..`9`.
pub const MAX_OPTIONS: usize = 9;

/// A path cell that stops the player until its question is answered.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HaltCell {
    pub row: usize,
    pub col: usize,
    pub question: String,
    pub options: Vec<String>,
    /// Index into `options`.
    pub answer: usize,
    #[serde(default, alias = "rowOffset")]
    pub row_offset: isize,
    #[serde(default, alias = "colOffset")]
    pub col_offset: isize,
}

impl HaltCell {
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    pub fn is_correct(&self, option: usize) -> bool {
        option == self.answer
    }

    /// Where a correct answer sends a player who halted at `from`.
    pub fn advance(&self, from: Position) -> Option<Position> {
        from.offset(self.row_offset, self.col_offset)
    }

    /// Checks this cell against `grid`. `Ok(false)` means the cell sits on a
    /// wall and can never be entered.
    pub fn validate(&self, grid: &Grid) -> Result<bool, LevelError> {
        let pos = self.position();
        if !grid.in_bounds(pos) {
            return Err(LevelError::HaltOutOfBounds(pos));
        }
        if self.options.is_empty() {
            return Err(LevelError::NoOptions(pos));
        }
        if self.options.len() > MAX_OPTIONS {
            return Err(LevelError::TooManyOptions {
                pos,
                options: self.options.len(),
                max: MAX_OPTIONS,
            });
        }
        if self.answer >= self.options.len() {
            return Err(LevelError::AnswerOutOfRange {
                pos,
                answer: self.answer,
                options: self.options.len(),
            });
        }
        if !grid.is_path(pos) {
            return Ok(false);
        }
        // A player only ever halts from an open neighbour.
        for from in grid.open_neighbours(pos) {
            let lands_open = self.advance(from).is_some_and(|p| grid.is_path(p));
            if !lands_open {
                return Err(LevelError::BadOffset {
                    pos,
                    from,
                    d_row: self.row_offset,
                    d_col: self.col_offset,
                });
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: usize, col: usize, answer: usize) -> HaltCell {
        HaltCell {
            row,
            col,
            question: "What is 2 + 2?".into(),
            options: vec!["3".into(), "4".into()],
            answer,
            row_offset: 0,
            col_offset: 0,
        }
    }

    fn grid() -> Grid {
        Grid::parse(&["...", ".#.", "..."]).unwrap().0
    }

    #[test]
    fn offsets_default_to_zero() {
        let json = r#"{"row":1,"col":2,"question":"q","options":["a","b"],"answer":1}"#;
        let h: HaltCell = serde_json::from_str(json).unwrap();
        assert_eq!((h.row_offset, h.col_offset), (0, 0));
        assert_eq!(h.advance(Position::new(0, 2)), Some(Position::new(0, 2)));
    }

    #[test]
    fn validate_accepts_open_cell() {
        assert!(cell(0, 1, 1).validate(&grid()).unwrap());
    }

    #[test]
    fn validate_reports_wall_cell_as_unreachable() {
        assert!(!cell(1, 1, 1).validate(&grid()).unwrap());
    }

    #[test]
    fn validate_rejects_answer_out_of_range() {
        let err = cell(0, 1, 2).validate(&grid()).unwrap_err();
        assert!(matches!(err, LevelError::AnswerOutOfRange { answer: 2, options: 2, .. }));
    }

    #[test]
    fn validate_rejects_empty_options_and_bounds() {
        let mut h = cell(0, 1, 0);
        h.options.clear();
        assert!(matches!(h.validate(&grid()), Err(LevelError::NoOptions(_))));
        assert!(matches!(cell(3, 0, 0).validate(&grid()), Err(LevelError::HaltOutOfBounds(_))));
    }

    #[test]
    fn validate_rejects_options_beyond_digit_keys() {
        let mut h = cell(0, 1, 8);
        h.options = (1..=MAX_OPTIONS).map(|i| i.to_string()).collect();
        assert!(h.validate(&grid()).unwrap());

        h.options.push("10".into());
        h.answer = 9;
        let err = h.validate(&grid()).unwrap_err();
        assert!(matches!(err, LevelError::TooManyOptions { options: 10, max: 9, .. }));
    }

    #[test]
    fn validate_rejects_offset_into_wall_or_off_grid() {
        // From (0,0) a (+1,+1) jump lands on the centre wall.
        let mut h = cell(0, 1, 1);
        h.row_offset = 1;
        h.col_offset = 1;
        assert!(matches!(h.validate(&grid()), Err(LevelError::BadOffset { .. })));

        let mut h = cell(0, 1, 1);
        h.row_offset = -1;
        assert!(matches!(h.validate(&grid()), Err(LevelError::BadOffset { .. })));
    }
}
