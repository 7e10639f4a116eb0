use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use keyladder::config::Config;
use keyladder::engine::level_table::LevelTable;
use keyladder::session::{ControlKey, Key, KeyOutcome, ProgressionEngine};

use crate::ui::theme::Theme;

pub struct App {
    pub engine: ProgressionEngine,
    pub theme: Theme,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, table: LevelTable, theme: Theme) -> Self {
        let engine = ProgressionEngine::new(table, config.letters_per_round, config.start_level);
        Self {
            engine,
            theme,
            should_quit: false,
        }
    }

    /// Forward a key to the engine. Returns true when the round just finished
    /// and a reset must be scheduled for the next turn.
    pub fn type_key(&mut self, key: Key) -> bool {
        matches!(
            self.engine.handle_key_press(key),
            KeyOutcome::Correct { completed: true }
        )
    }

    pub fn finish_round(&mut self) {
        self.engine.maybe_reset();
    }
}

/// Translate a terminal key event into the engine's key model.
pub fn key_from_event(key: &KeyEvent) -> Key {
    let modified = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);

    match key.code {
        KeyCode::Char(ch) if modified => {
            if key.modifiers.contains(KeyModifiers::CONTROL) && ch.eq_ignore_ascii_case(&'a') {
                Key::Control(ControlKey::SelectAll)
            } else {
                Key::Modified(ch)
            }
        }
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(ch) => Key::Char(ch),
        KeyCode::Left => Key::Control(ControlKey::Left),
        KeyCode::Right => Key::Control(ControlKey::Right),
        KeyCode::Up => Key::Control(ControlKey::Up),
        KeyCode::Down => Key::Control(ControlKey::Down),
        KeyCode::Home => Key::Control(ControlKey::Home),
        KeyCode::End => Key::Control(ControlKey::End),
        KeyCode::Tab | KeyCode::BackTab => Key::Control(ControlKey::Tab),
        KeyCode::Backspace => Key::Control(ControlKey::Backspace),
        KeyCode::Delete => Key::Control(ControlKey::Delete),
        KeyCode::Enter => Key::Control(ControlKey::Enter),
        _ => Key::Control(ControlKey::Other),
    }
}
