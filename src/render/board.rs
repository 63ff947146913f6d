use raylib::prelude::*;

use crate::core::{Cell, GameState, MazeGame, Position};
use crate::render::CELL;

const WALL: Color = Color::new(40, 40, 70, 255);
const PATH: Color = Color::new(225, 225, 215, 255);
const HALT: Color = Color::new(240, 190, 60, 255);
const EXIT: Color = Color::new(90, 200, 120, 255);
const PLAYER: Color = Color::new(220, 60, 60, 255);

fn cell_origin(pos: Position) -> (i32, i32) {
    (pos.col as i32 * CELL, pos.row as i32 * CELL)
}

fn draw_cell<D: RaylibDraw>(d: &mut D, pos: Position, color: Color) {
    let (xo, yo) = cell_origin(pos);
    d.draw_rectangle(xo, yo, CELL, CELL, color);
}

pub fn render_board<D: RaylibDraw>(d: &mut D, game: &MazeGame, state: &GameState) {
    for (pos, cell) in game.grid().iter() {
        let color = match cell {
            Cell::Wall => WALL,
            Cell::Path => PATH,
        };
        draw_cell(d, pos, color);
    }

    draw_cell(d, game.end(), EXIT);

    for halt in game.halt_cells() {
        let pos = halt.position();
        let (xo, yo) = cell_origin(pos);
        let inset = CELL / 6;
        // The cell currently asking is drawn in the player colour.
        let color = if state.pending == Some(pos) { PLAYER } else { HALT };
        d.draw_rectangle(xo + inset, yo + inset, CELL - 2 * inset, CELL - 2 * inset, color);
        d.draw_text("?", xo + CELL / 2 - 6, yo + CELL / 2 - 12, 24, Color::BLACK);
    }

    let (xo, yo) = cell_origin(state.position);
    d.draw_circle(xo + CELL / 2, yo + CELL / 2, CELL as f32 * 0.32, PLAYER);
}
