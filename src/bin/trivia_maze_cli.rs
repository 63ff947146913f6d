//! Terminal frontend for the trivia maze.
//!
//! Usage: trivia-maze-cli [--level path/to/level.json]
//!
//! Type moves as letters (`wasd`, several per line) or words (`up`, `left`),
//! digits `1`-`9` to answer a question, `r` to restart and `q` to quit.

use std::io::{self, BufRead, Write};

use trivia_maze::core::input::commands_for_line;
use trivia_maze::core::{Cell, Command, GameEvent, Position, Session};
use trivia_maze::level_from_args;

fn draw(session: &Session) -> String {
    let game = session.game();
    let state = session.state();
    let mut out = String::new();
    for row in 0..game.grid().rows() {
        for col in 0..game.grid().cols() {
            let pos = Position::new(row, col);
            let ch = if pos == state.position {
                '@'
            } else if pos == game.end() {
                'E'
            } else if game.halt_cell(pos).is_some() {
                '?'
            } else {
                match game.grid().cell(pos) {
                    Some(Cell::Wall) => '#',
                    _ => '.',
                }
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

fn status(session: &Session) -> String {
    let state = session.state();
    if state.game_over {
        return "Game Over. Press r to play again.".to_string();
    }
    if state.escaped {
        return format!("You escaped in {} moves! Press r to play again.", session.moves());
    }
    if let Some(halt) = session.pending_question() {
        let mut s = halt.question.clone();
        for (i, option) in halt.options.iter().enumerate() {
            s.push_str(&format!("\n  {}. {}", i + 1, option));
        }
        return s;
    }
    format!("Moves: {}", session.moves())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Log lines share the terminal with the board.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let level = level_from_args(&args)?;
    let mut session = Session::new(level.build()?);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "{}{}\n> ", draw(&session), status(&session))?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        for cmd in commands_for_line(&line) {
            if cmd == Command::Quit {
                return Ok(());
            }
            if session.apply(cmd) == GameEvent::Bumped {
                writeln!(stdout, "Bump!")?;
            }
        }
        write!(stdout, "{}{}\n> ", draw(&session), status(&session))?;
        stdout.flush()?;
    }
    Ok(())
}
