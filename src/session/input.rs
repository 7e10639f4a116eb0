use crate::session::round::RoundState;

/// Named keys the host may forward. None of them is a letter attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKey {
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Tab,
    Backspace,
    Delete,
    SelectAll,
    Enter,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Space,
    Control(ControlKey),
    /// Any combination held with Ctrl, Alt or Super.
    Modified(char),
}

impl Key {
    /// Printable, non-space characters are the only keys judged against the target.
    pub fn letter(self) -> Option<char> {
        match self {
            Key::Char(ch) if !ch.is_control() && !ch.is_whitespace() => Some(ch),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Round already complete, or the key is not a letter attempt.
    Ignored,
    Correct { completed: bool },
    Incorrect { position: usize },
}

pub fn matches_target(pressed: char, target: char) -> bool {
    pressed.to_uppercase().eq(target.to_uppercase())
}

/// Judge one key press against the round at its cursor.
pub fn process_key(round: &mut RoundState, key: Key) -> KeyOutcome {
    if round.is_complete() {
        return KeyOutcome::Ignored;
    }
    let Some(pressed) = key.letter() else {
        return KeyOutcome::Ignored;
    };

    let position = round.cursor();
    let expected = round.target[position];

    if matches_target(pressed, expected) {
        round.input.push(expected);
        if round.input.len() < round.target.len() && round.target[position + 1] == ' ' {
            round.input.push(' ');
        }
        KeyOutcome::Correct {
            completed: round.is_complete(),
        }
    } else {
        round.error_indices.insert(position);
        KeyOutcome::Incorrect { position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_classification() {
        assert_eq!(Key::Char('a').letter(), Some('a'));
        assert_eq!(Key::Char('ש').letter(), Some('ש'));
        assert_eq!(Key::Char(' ').letter(), None);
        assert_eq!(Key::Char('\t').letter(), None);
        assert_eq!(Key::Space.letter(), None);
        assert_eq!(Key::Control(ControlKey::Backspace).letter(), None);
        assert_eq!(Key::Modified('a').letter(), None);
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(matches_target('A', 'a'));
        assert!(matches_target('a', 'A'));
        assert!(matches_target('כ', 'כ'));
        assert!(!matches_target('a', 'b'));
    }

    #[test]
    fn test_correct_letter_auto_inserts_separator() {
        let mut round = RoundState::new("a b c");
        let outcome = process_key(&mut round, Key::Char('a'));
        assert_eq!(outcome, KeyOutcome::Correct { completed: false });
        assert_eq!(round.input_value(), "a ");
        process_key(&mut round, Key::Char('b'));
        assert_eq!(round.input_value(), "a b ");
    }

    #[test]
    fn test_uppercase_press_appends_target_char() {
        let mut round = RoundState::new("ab");
        process_key(&mut round, Key::Char('A'));
        assert_eq!(round.input_value(), "a");
    }

    #[test]
    fn test_last_letter_completes_without_trailing_space() {
        let mut round = RoundState::new("a b");
        process_key(&mut round, Key::Char('a'));
        let outcome = process_key(&mut round, Key::Char('b'));
        assert_eq!(outcome, KeyOutcome::Correct { completed: true });
        assert_eq!(round.input_value(), "a b");
    }

    #[test]
    fn test_wrong_letter_flags_position_once() {
        let mut round = RoundState::new("a b");
        assert_eq!(
            process_key(&mut round, Key::Char('z')),
            KeyOutcome::Incorrect { position: 0 }
        );
        process_key(&mut round, Key::Char('y'));
        assert_eq!(round.error_positions(), vec![0]);
        assert_eq!(round.input_value(), "");
    }

    #[test]
    fn test_flag_survives_later_correct_press() {
        let mut round = RoundState::new("a b");
        process_key(&mut round, Key::Char('z'));
        process_key(&mut round, Key::Char('a'));
        assert_eq!(round.input_value(), "a ");
        assert_eq!(round.error_positions(), vec![0]);
    }

    #[test]
    fn test_space_and_controls_are_swallowed() {
        let mut round = RoundState::new("a b");
        for key in [
            Key::Space,
            Key::Char(' '),
            Key::Control(ControlKey::Backspace),
            Key::Control(ControlKey::Delete),
            Key::Control(ControlKey::Left),
            Key::Control(ControlKey::Tab),
            Key::Control(ControlKey::SelectAll),
            Key::Modified('a'),
        ] {
            assert_eq!(process_key(&mut round, key), KeyOutcome::Ignored);
        }
        assert_eq!(round.input_value(), "");
        assert!(round.error_positions().is_empty());
    }

    #[test]
    fn test_complete_round_ignores_input() {
        let mut round = RoundState::new("a");
        process_key(&mut round, Key::Char('a'));
        assert_eq!(process_key(&mut round, Key::Char('a')), KeyOutcome::Ignored);
        assert_eq!(process_key(&mut round, Key::Char('z')), KeyOutcome::Ignored);
        assert_eq!(round.input_value(), "a");
        assert!(round.error_positions().is_empty());
    }
}
