//! Key mapping from terminal events to game keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One of the four directional game keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Map a key to a directional game key (arrows, WASD or hjkl).
pub fn key_direction(key: KeyEvent) -> Option<Direction> {
    match key.code {
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(Direction::Up),
        KeyCode::Down
        | KeyCode::Char('s')
        | KeyCode::Char('S')
        | KeyCode::Char('j')
        | KeyCode::Char('J') => Some(Direction::Down),
        KeyCode::Left
        | KeyCode::Char('a')
        | KeyCode::Char('A')
        | KeyCode::Char('h')
        | KeyCode::Char('H') => Some(Direction::Left),
        KeyCode::Right
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(Direction::Right),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Answer to the play-again prompt: `Some(true)` for yes, `Some(false)` for no.
pub fn prompt_answer(key: KeyEvent) -> Option<bool> {
    if should_quit(key) {
        return Some(false);
    }
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(true),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_direction_keys() {
        assert_eq!(key_direction(KeyEvent::from(KeyCode::Up)), Some(Direction::Up));
        assert_eq!(key_direction(KeyEvent::from(KeyCode::Down)), Some(Direction::Down));
        assert_eq!(key_direction(KeyEvent::from(KeyCode::Left)), Some(Direction::Left));
        assert_eq!(key_direction(KeyEvent::from(KeyCode::Right)), Some(Direction::Right));

        assert_eq!(key_direction(KeyEvent::from(KeyCode::Char('W'))), Some(Direction::Up));
        assert_eq!(key_direction(KeyEvent::from(KeyCode::Char('j'))), Some(Direction::Down));
        assert_eq!(key_direction(KeyEvent::from(KeyCode::Char('a'))), Some(Direction::Left));
        assert_eq!(key_direction(KeyEvent::from(KeyCode::Char('L'))), Some(Direction::Right));
        assert_eq!(key_direction(KeyEvent::from(KeyCode::Char('x'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_prompt_answers() {
        assert_eq!(prompt_answer(KeyEvent::from(KeyCode::Char('y'))), Some(true));
        assert_eq!(prompt_answer(KeyEvent::from(KeyCode::Char('Y'))), Some(true));
        assert_eq!(prompt_answer(KeyEvent::from(KeyCode::Char('N'))), Some(false));
        assert_eq!(prompt_answer(KeyEvent::from(KeyCode::Char('q'))), Some(false));
        assert_eq!(prompt_answer(KeyEvent::from(KeyCode::Left)), None);
    }
}
