//! Terminal-independent key events
//!
//! The TUI converts crossterm events into [`InputKey`] at its boundary so that
//! the orchestrator and its handlers never depend on a terminal library.

/// A single key press as seen by the key handlers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character (letters, digits, symbols, space)
    Char(char),
    /// Character with Ctrl held (Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,

    /// Function key (F1-F12)
    F(u8),
}

impl InputKey {
    /// The character this key would insert into a text field, if any.
    pub fn text_char(self) -> Option<char> {
        match self {
            InputKey::Char(c) if !c.is_control() => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_char_only_for_plain_chars() {
        assert_eq!(InputKey::Char('a').text_char(), Some('a'));
        assert_eq!(InputKey::Char(' ').text_char(), Some(' '));
        assert_eq!(InputKey::CharCtrl('a').text_char(), None);
        assert_eq!(InputKey::Enter.text_char(), None);
    }

    #[test]
    fn test_ctrl_and_plain_differ() {
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }
}
