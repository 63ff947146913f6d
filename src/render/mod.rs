//! Raylib drawing for the maze window.
//!
//! Re-exports:
//! - `board`: Grid cells, halt markers, exit and player
//! - `overlay`: HUD, question popup and end-of-game banners

pub mod board;
pub mod overlay;

/// Pixel size of one maze cell.
pub const CELL: i32 = 56;
/// Space below the board for the HUD line.
pub const HUD_HEIGHT: i32 = 40;

/// Window size that fits a `rows`×`cols` board plus the HUD.
pub fn window_size(rows: usize, cols: usize) -> (i32, i32) {
    let w = (cols as i32 * CELL).max(480);
    let h = rows as i32 * CELL + HUD_HEIGHT;
    (w, h)
}
