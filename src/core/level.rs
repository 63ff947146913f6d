//! Level files: maze rows, start/end and the halt-cell table.
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;

use crate::core::error::LevelError;
use crate::core::game::MazeGame;
use crate::core::halt::HaltCell;
use crate::core::maze::{Grid, Position};

const CLASSIC: &str = include_str!("../../levels/classic.json");

#[derive(Clone, Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Level {
    #[serde(default)]
    pub name: String,
    pub maze: Vec<String>,
    /// Falls back to the `S` marker in `maze`.
    #[serde(default)]
    pub start: Option<Position>,
    /// Falls back to the `E` marker in `maze`.
    #[serde(default)]
    pub end: Option<Position>,
    #[serde(default)]
    pub halt_cells: Vec<HaltCell>,
}

impl Level {
    /// The 10×10 trivia maze: start bottom-left, exit top-right.
    pub fn classic() -> Result<Level, LevelError> {
        Level::from_json_str(CLASSIC)
    }

    pub fn from_json_str(s: &str) -> Result<Level, LevelError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Level, LevelError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let level = Level::from_json_str(&text)?;
        info!("loaded level {:?} from {}", level.name, path.display());
        Ok(level)
    }

    /// Validates the level and freezes it into a game.
    pub fn build(&self) -> Result<MazeGame, LevelError> {
        let (grid, markers) = Grid::parse(self.maze.as_slice())?;

        let start = self.start.or(markers.start).ok_or(LevelError::MissingMarker("start"))?;
        let end = self.end.or(markers.end).ok_or(LevelError::MissingMarker("end"))?;
        for (what, pos) in [("start", start), ("end", end)] {
            if !grid.is_path(pos) {
                return Err(LevelError::BlockedMarker { what, pos });
            }
        }

        let mut halts = HashMap::with_capacity(self.halt_cells.len());
        let mut seen = HashSet::new();
        for halt in &self.halt_cells {
            let pos = halt.position();
            if !seen.insert(pos) {
                return Err(LevelError::DuplicateHalt(pos));
            }
            if !halt.validate(&grid)? {
                warn!("halt cell {} sits on a wall and can never trigger; dropped", pos);
                continue;
            }
            halts.insert(pos, halt.clone());
        }

        info!(
            "level {:?}: {}x{} grid, {} halt cells, start {}, end {}",
            self.name,
            grid.rows(),
            grid.cols(),
            halts.len(),
            start,
            end
        );
        Ok(MazeGame::from_parts(grid, start, end, halts))
    }
}
