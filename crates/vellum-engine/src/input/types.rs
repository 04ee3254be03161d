use std::fmt;

/// Keyboard key.
///
/// Letters are case-folded: `q` and `Q` are both [`Key::Q`]. Keys without a
/// variant arrive as `Unknown` with the platform key code.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,
    Delete,

    Insert,
    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    Unknown(u32),
}

#[rustfmt::skip]
const LETTERS: [Key; 26] = [
    Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
    Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
    Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
];

#[rustfmt::skip]
const DIGITS: [Key; 10] = [
    Key::Digit0, Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4,
    Key::Digit5, Key::Digit6, Key::Digit7, Key::Digit8, Key::Digit9,
];

/// `FUNCTION_KEYS[i]` is `F{i+1}`.
#[rustfmt::skip]
const FUNCTION_KEYS: [Key; 12] = [
    Key::F1, Key::F2, Key::F3, Key::F4, Key::F5, Key::F6,
    Key::F7, Key::F8, Key::F9, Key::F10, Key::F11, Key::F12,
];

impl Key {
    /// The key that types `c`, for ASCII letters, digits and the whitespace
    /// and control characters that have a variant.
    pub fn from_char(c: char) -> Option<Key> {
        let key = match c {
            'a'..='z' => LETTERS[(c as u8 - b'a') as usize],
            'A'..='Z' => LETTERS[(c as u8 - b'A') as usize],
            '0'..='9' => DIGITS[(c as u8 - b'0') as usize],
            ' ' => Key::Space,
            '\t' => Key::Tab,
            '\r' | '\n' => Key::Enter,
            '\u{8}' => Key::Backspace,
            '\u{1b}' => Key::Escape,
            '\u{7f}' => Key::Delete,
            _ => return None,
        };
        Some(key)
    }

    /// Keys that do not type a character: arrows, function keys, the
    /// navigation block and modifiers.
    pub fn is_special(self) -> bool {
        matches!(
            self,
            Key::ArrowUp
                | Key::ArrowDown
                | Key::ArrowLeft
                | Key::ArrowRight
                | Key::Insert
                | Key::Home
                | Key::End
                | Key::PageUp
                | Key::PageDown
                | Key::Shift
                | Key::Control
                | Key::Alt
                | Key::Meta
        ) || self.function_number().is_some()
    }

    /// `0`–`9` for the digit keys.
    pub fn digit(self) -> Option<usize> {
        DIGITS.iter().position(|&k| k == self)
    }

    /// `1`–`12` for `F1`–`F12`.
    pub fn function_number(self) -> Option<usize> {
        FUNCTION_KEYS.iter().position(|&k| k == self).map(|i| i + 1)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Unknown(code) => write!(f, "key#{code}"),
            other => write!(f, "{other:?}"),
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MouseButtonState {
    Pressed,
    Released,
}

/// Logical pixels, origin top-left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerMoveEvent {
    pub x: f32,
    pub y: f32,
}

/// `x`/`y` are where the pointer was last seen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointerButtonEvent {
    pub button: MouseButton,
    pub state: MouseButtonState,
    pub x: f32,
    pub y: f32,
}

/// Window input, already detached from the platform layer.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// Physical key code; identifies the key independent of layout.
        code: u32,
        /// OS auto-repeat.
        repeat: bool,
    },
    PointerMoved(PointerMoveEvent),
    PointerButton(PointerButtonEvent),
    PointerEntered,
    PointerLeft,
    Focused(bool),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_fold_case() {
        assert_eq!(Key::from_char('q'), Some(Key::Q));
        assert_eq!(Key::from_char('Q'), Some(Key::Q));
        assert_eq!(Key::from_char('7'), Some(Key::Digit7));
        assert_eq!(Key::from_char(' '), Some(Key::Space));
        assert_eq!(Key::from_char('\u{1b}'), Some(Key::Escape));
        assert_eq!(Key::from_char('%'), None);
        assert_eq!(Key::from_char('é'), None);
    }

    #[test]
    fn arrows_and_function_keys_are_special() {
        assert!(Key::ArrowLeft.is_special());
        assert!(Key::F12.is_special());
        assert!(Key::PageUp.is_special());
    }

    #[test]
    fn letters_digits_and_controls_are_not_special() {
        for key in [Key::H, Key::Digit5, Key::Space, Key::Tab, Key::Backspace, Key::Escape, Key::Delete] {
            assert!(!key.is_special(), "{key} should be an ordinary keystroke");
        }
    }

    #[test]
    fn digit_and_function_numbers() {
        assert_eq!(Key::Digit0.digit(), Some(0));
        assert_eq!(Key::Digit9.digit(), Some(9));
        assert_eq!(Key::A.digit(), None);
        assert_eq!(Key::F1.function_number(), Some(1));
        assert_eq!(Key::F12.function_number(), Some(12));
        assert_eq!(Key::Digit1.function_number(), None);
    }

    #[test]
    fn unknown_keys_show_their_code() {
        assert_eq!(Key::Unknown(42).to_string(), "key#42");
        assert_eq!(Key::ArrowUp.to_string(), "ArrowUp");
    }
}
