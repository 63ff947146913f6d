//! Maze grid, positions and directions.
use serde::{Deserialize, Serialize};

use crate::core::error::LevelError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Cell {
    Wall,
    Path,
}

/// Grid coordinate as (row, col).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Shifts by a signed offset, `None` on underflow.
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Position> {
        Some(Position {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }
}

impl From<[usize; 2]> for Position {
    fn from([row, col]: [usize; 2]) -> Self {
        Position { row, col }
    }
}

impl From<Position> for [usize; 2] {
    fn from(p: Position) -> Self {
        [p.row, p.col]
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// (Δrow, Δcol)
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Start/end markers found while parsing maze rows.
#[derive(Debug, Default)]
pub struct Markers {
    pub start: Option<Position>,
    pub end: Option<Position>,
}

/// Immutable R×C grid of walls and paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Parses maze rows. `#`/`1` are walls; ` `, `.`, `0` are paths;
    /// `S`/`E` are paths that also mark start/end.
    pub fn parse<S: AsRef<str>>(lines: &[S]) -> Result<(Grid, Markers), LevelError> {
        if lines.is_empty() {
            return Err(LevelError::EmptyMaze);
        }
        let cols = lines[0].as_ref().chars().count();
        if cols == 0 {
            return Err(LevelError::EmptyMaze);
        }

        let mut cells = Vec::with_capacity(lines.len() * cols);
        let mut markers = Markers::default();
        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let width = line.chars().count();
            if width != cols {
                return Err(LevelError::RaggedRow { row, expected: cols, found: width });
            }
            for (col, ch) in line.chars().enumerate() {
                let cell = match ch {
                    '#' | '1' => Cell::Wall,
                    ' ' | '.' | '0' => Cell::Path,
                    'S' => {
                        if markers.start.replace(Position::new(row, col)).is_some() {
                            return Err(LevelError::DuplicateMarker("start"));
                        }
                        Cell::Path
                    }
                    'E' => {
                        if markers.end.replace(Position::new(row, col)).is_some() {
                            return Err(LevelError::DuplicateMarker("end"));
                        }
                        Cell::Path
                    }
                    other => return Err(LevelError::UnknownCell { row, col, ch: other }),
                };
                cells.push(cell);
            }
        }

        Ok((Grid { rows: lines.len(), cols, cells }, markers))
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Out-of-bounds reads as `None`.
    pub fn cell(&self, pos: Position) -> Option<Cell> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some(self.cells[pos.row * self.cols + pos.col])
    }

    pub fn is_path(&self, pos: Position) -> bool {
        self.cell(pos) == Some(Cell::Path)
    }

    /// Neighbour in `dir` if it is inside the grid and open.
    pub fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        let (dr, dc) = dir.delta();
        pos.offset(dr, dc).filter(|&p| self.is_path(p))
    }

    /// Open orthogonal neighbours of `pos`.
    pub fn open_neighbours(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        Direction::ALL.into_iter().filter_map(move |d| self.step(pos, d))
    }

    /// Row-major iteration, for renderers.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &c)| (Position::new(i / self.cols, i % self.cols), c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Grid {
        Grid::parse(&["S.#", "#..", "..E"]).unwrap().0
    }

    #[test]
    fn parse_reads_cells_and_markers() {
        let (grid, markers) = Grid::parse(&["S.#", "#..", "..E"]).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (3, 3));
        assert_eq!(grid.cell(Position::new(0, 2)), Some(Cell::Wall));
        assert_eq!(grid.cell(Position::new(1, 1)), Some(Cell::Path));
        assert_eq!(markers.start, Some(Position::new(0, 0)));
        assert_eq!(markers.end, Some(Position::new(2, 2)));
    }

    #[test]
    fn parse_accepts_numeric_rows() {
        let (grid, _) = Grid::parse(&["10", "01"]).unwrap();
        assert!(!grid.is_path(Position::new(0, 0)));
        assert!(grid.is_path(Position::new(0, 1)));
    }

    #[test]
    fn parse_rejects_bad_input() {
        let empty: [&str; 0] = [];
        assert!(matches!(Grid::parse(&empty), Err(LevelError::EmptyMaze)));
        assert!(matches!(Grid::parse(&[""]), Err(LevelError::EmptyMaze)));
        assert!(matches!(
            Grid::parse(&["..", "."]),
            Err(LevelError::RaggedRow { row: 1, expected: 2, found: 1 })
        ));
        assert!(matches!(
            Grid::parse(&[".x"]),
            Err(LevelError::UnknownCell { row: 0, col: 1, ch: 'x' })
        ));
    }

    #[test]
    fn parse_rejects_repeated_markers() {
        assert!(matches!(Grid::parse(&["S.S", "..E"]), Err(LevelError::DuplicateMarker("start"))));
        assert!(matches!(Grid::parse(&["S.E", "E.."]), Err(LevelError::DuplicateMarker("end"))));
    }

    #[test]
    fn step_stops_at_walls_and_edges() {
        let grid = small();
        let origin = Position::new(0, 0);
        assert_eq!(grid.step(origin, Direction::Right), Some(Position::new(0, 1)));
        assert_eq!(grid.step(origin, Direction::Up), None);
        assert_eq!(grid.step(origin, Direction::Left), None);
        assert_eq!(grid.step(origin, Direction::Down), None);
        assert_eq!(grid.step(Position::new(2, 2), Direction::Down), None);
        assert_eq!(grid.step(Position::new(2, 2), Direction::Right), None);
    }

    #[test]
    fn open_neighbours_skips_walls() {
        let grid = small();
        let mut n: Vec<_> = grid.open_neighbours(Position::new(1, 1)).collect();
        n.sort();
        assert_eq!(n, vec![Position::new(0, 1), Position::new(1, 2), Position::new(2, 1)]);
    }

    #[test]
    fn position_serializes_as_pair() {
        let p: Position = serde_json::from_str("[9, 0]").unwrap();
        assert_eq!(p, Position::new(9, 0));
        assert_eq!(serde_json::to_string(&p).unwrap(), "[9,0]");
    }
}
