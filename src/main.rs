// main.rs
use raylib::prelude::*;

use trivia_maze::core::input::command_for_key;
use trivia_maze::core::{Command, Key, Session};
use trivia_maze::level_from_args;
use trivia_maze::render::board::render_board;
use trivia_maze::render::overlay::{render_banner, render_hud, render_question};
use trivia_maze::render::window_size;

#[cfg(feature = "audio")]
use trivia_maze::audio::AudioManager;

const KEYMAP: &[(KeyboardKey, Key)] = &[
    (KeyboardKey::KEY_W, Key::Char('w')),
    (KeyboardKey::KEY_A, Key::Char('a')),
    (KeyboardKey::KEY_S, Key::Char('s')),
    (KeyboardKey::KEY_D, Key::Char('d')),
    (KeyboardKey::KEY_UP, Key::ArrowUp),
    (KeyboardKey::KEY_DOWN, Key::ArrowDown),
    (KeyboardKey::KEY_LEFT, Key::ArrowLeft),
    (KeyboardKey::KEY_RIGHT, Key::ArrowRight),
    (KeyboardKey::KEY_ONE, Key::Char('1')),
    (KeyboardKey::KEY_TWO, Key::Char('2')),
    (KeyboardKey::KEY_THREE, Key::Char('3')),
    (KeyboardKey::KEY_FOUR, Key::Char('4')),
    (KeyboardKey::KEY_FIVE, Key::Char('5')),
    (KeyboardKey::KEY_SIX, Key::Char('6')),
    (KeyboardKey::KEY_SEVEN, Key::Char('7')),
    (KeyboardKey::KEY_EIGHT, Key::Char('8')),
    (KeyboardKey::KEY_NINE, Key::Char('9')),
    (KeyboardKey::KEY_R, Key::Char('r')),
    (KeyboardKey::KEY_Q, Key::Char('q')),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let level = level_from_args(&args)?;
    let mut session = Session::new(level.build()?);

    let grid = session.game().grid();
    let rows = grid.rows();
    let (width, height) = window_size(rows, grid.cols());

    let (mut window, raylib_thread) = raylib::init()
        .size(width, height)
        .title("Trivia Maze")
        .build();
    // Esc quits through the input adapter instead.
    window.set_exit_key(None);
    window.set_target_fps(60);

    #[cfg(feature = "audio")]
    let audio = AudioManager::new();

    'frames: while !window.window_should_close() {
        let mut pressed: Vec<Key> = KEYMAP
            .iter()
            .filter(|(rk, _)| window.is_key_pressed(*rk))
            .map(|&(_, k)| k)
            .collect();
        if window.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            pressed.push(Key::Escape);
        }

        for key in pressed {
            let Some(cmd) = command_for_key(key) else { continue };
            if cmd == Command::Quit {
                break 'frames;
            }
            let _event = session.apply(cmd);
            #[cfg(feature = "audio")]
            if let Some(a) = &audio {
                a.play_event(_event);
            }
        }

        let mut d = window.begin_drawing(&raylib_thread);
        d.clear_background(Color::BLACK);
        render_board(&mut d, session.game(), session.state());
        render_hud(&mut d, rows, session.moves(), width);
        if let Some(halt) = session.pending_question() {
            render_question(&mut d, halt, width, height);
        }
        render_banner(&mut d, session.state(), width, height);
    }

    Ok(())
}
