//! Input handling: raw keys to game commands.
use crate::core::maze::Direction;

/// Frontend-neutral key. Each frontend translates its own key events into this.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Escape,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    /// Zero-based option index.
    Answer(usize),
    Restart,
    Quit,
}

/// WASD/arrows move, `1`..`9` answer, `r` restarts, `q`/Esc quits.
pub fn command_for_key(key: Key) -> Option<Command> {
    let cmd = match key {
        Key::ArrowUp => Command::Move(Direction::Up),
        Key::ArrowDown => Command::Move(Direction::Down),
        Key::ArrowLeft => Command::Move(Direction::Left),
        Key::ArrowRight => Command::Move(Direction::Right),
        Key::Escape => Command::Quit,
        Key::Char(c) => match c.to_ascii_lowercase() {
            'w' => Command::Move(Direction::Up),
            'a' => Command::Move(Direction::Left),
            's' => Command::Move(Direction::Down),
            'd' => Command::Move(Direction::Right),
            'r' => Command::Restart,
            'q' => Command::Quit,
            d @ '1'..='9' => Command::Answer(d as usize - '1' as usize),
            _ => return None,
        },
    };
    Some(cmd)
}

/// Parses a line of typed keys, e.g. `"dddwww"` or `"3"`.
/// Words `up`/`down`/`left`/`right` are accepted as single moves.
pub fn commands_for_line(line: &str) -> Vec<Command> {
    let mut out = Vec::new();
    for word in line.split_whitespace() {
        let named = match word.to_ascii_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        };
        if let Some(dir) = named {
            out.push(Command::Move(dir));
            continue;
        }
        out.extend(word.chars().filter_map(|c| command_for_key(Key::Char(c))));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_and_arrows_map_to_moves() {
        assert_eq!(command_for_key(Key::Char('w')), Some(Command::Move(Direction::Up)));
        assert_eq!(command_for_key(Key::Char('A')), Some(Command::Move(Direction::Left)));
        assert_eq!(command_for_key(Key::Char('s')), Some(Command::Move(Direction::Down)));
        assert_eq!(command_for_key(Key::ArrowRight), Some(Command::Move(Direction::Right)));
    }

    #[test]
    fn digits_are_zero_based_answers() {
        assert_eq!(command_for_key(Key::Char('1')), Some(Command::Answer(0)));
        assert_eq!(command_for_key(Key::Char('3')), Some(Command::Answer(2)));
        assert_eq!(command_for_key(Key::Char('0')), None);
    }

    #[test]
    fn unmapped_keys_are_dropped() {
        assert_eq!(command_for_key(Key::Char('x')), None);
        assert_eq!(command_for_key(Key::Escape), Some(Command::Quit));
    }

    #[test]
    fn lines_expand_to_command_sequences() {
        let cmds = commands_for_line("dd up 3");
        assert_eq!(
            cmds,
            vec![
                Command::Move(Direction::Right),
                Command::Move(Direction::Right),
                Command::Move(Direction::Up),
                Command::Answer(2),
            ]
        );
    }
}
