use raylib::prelude::*;

use crate::core::{GameState, HaltCell};
use crate::render::{CELL, HUD_HEIGHT};

const SHADE: Color = Color::new(0, 0, 0, 170);

pub fn render_hud<D: RaylibDraw>(d: &mut D, rows: usize, moves: u32, width: i32) {
    let y = rows as i32 * CELL;
    d.draw_rectangle(0, y, width, HUD_HEIGHT, Color::BLACK);
    d.draw_text(
        &format!("Moves: {}   WASD/arrows move, 1-9 answer, R restart", moves),
        10,
        y + 10,
        20,
        Color::LIGHTGRAY,
    );
}

pub fn render_question<D: RaylibDraw>(d: &mut D, halt: &HaltCell, width: i32, height: i32) {
    d.draw_rectangle(0, 0, width, height, SHADE);

    let pad = 24;
    let line = 32;
    let box_h = pad * 2 + line * (halt.options.len() as i32 + 1);
    let box_w = width - 2 * pad;
    let top = (height - box_h) / 2;
    d.draw_rectangle(pad, top, box_w, box_h, Color::RAYWHITE);
    d.draw_rectangle_lines(pad, top, box_w, box_h, Color::DARKGRAY);

    let x = pad * 2;
    let mut y = top + pad;
    d.draw_text(&halt.question, x, y, 24, Color::BLACK);
    for (i, option) in halt.options.iter().enumerate() {
        y += line;
        d.draw_text(&format!("{}. {}", i + 1, option), x, y, 22, Color::DARKBLUE);
    }
}

/// Game-over or escape banner; nothing while the game is live.
pub fn render_banner<D: RaylibDraw>(d: &mut D, state: &GameState, width: i32, height: i32) {
    let (text, color) = if state.game_over {
        ("Game Over", Color::MAROON)
    } else if state.escaped {
        ("You escaped!", Color::DARKGREEN)
    } else {
        return;
    };
    let band = 90;
    let top = (height - band) / 2;
    d.draw_rectangle(0, 0, width, height, SHADE);
    d.draw_rectangle(0, top, width, band, Color::RAYWHITE);
    d.draw_text(text, 30, top + 14, 40, color);
    d.draw_text("Press R to play again", 30, top + 60, 20, Color::DARKGRAY);
}
