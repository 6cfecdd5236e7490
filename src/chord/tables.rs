//! Lookup tables between token space and native event vocabulary
//!
//! Forward lookups index straight into `KEY_TABLE`; reverse lookups go
//! through maps built on first use and never written again.

use std::collections::HashMap;
use std::sync::LazyLock;

use super::types::{Key, Modifier, MouseButton};

/// `(key, KeyboardEvent.key, KeyboardEvent.code)`, ordered by key index
const KEY_TABLE: [(Key, &str, &str); 80] = [
    (Key::Backspace, "Backspace", "Backspace"),
    (Key::Tab, "Tab", "Tab"),
    (Key::Clear, "Clear", "NumpadClear"),
    (Key::Enter, "Enter", "Enter"),
    (Key::Pause, "Pause", "Pause"),
    (Key::CapsLock, "CapsLock", "CapsLock"),
    (Key::Escape, "Escape", "Escape"),
    (Key::Space, " ", "Space"),
    (Key::PageUp, "PageUp", "PageUp"),
    (Key::PageDown, "PageDown", "PageDown"),
    (Key::End, "End", "End"),
    (Key::Home, "Home", "Home"),
    (Key::ArrowLeft, "ArrowLeft", "ArrowLeft"),
    (Key::ArrowUp, "ArrowUp", "ArrowUp"),
    (Key::ArrowRight, "ArrowRight", "ArrowRight"),
    (Key::ArrowDown, "ArrowDown", "ArrowDown"),
    (Key::Insert, "Insert", "Insert"),
    (Key::Delete, "Delete", "Delete"),
    (Key::Help, "Help", "Help"),
    (Key::Number0, "0", "Digit0"),
    (Key::Number1, "1", "Digit1"),
    (Key::Number2, "2", "Digit2"),
    (Key::Number3, "3", "Digit3"),
    (Key::Number4, "4", "Digit4"),
    (Key::Number5, "5", "Digit5"),
    (Key::Number6, "6", "Digit6"),
    (Key::Number7, "7", "Digit7"),
    (Key::Number8, "8", "Digit8"),
    (Key::Number9, "9", "Digit9"),
    (Key::LetterA, "A", "KeyA"),
    (Key::LetterB, "B", "KeyB"),
    (Key::LetterC, "C", "KeyC"),
    (Key::LetterD, "D", "KeyD"),
    (Key::LetterE, "E", "KeyE"),
    (Key::LetterF, "F", "KeyF"),
    (Key::LetterG, "G", "KeyG"),
    (Key::LetterH, "H", "KeyH"),
    (Key::LetterI, "I", "KeyI"),
    (Key::LetterJ, "J", "KeyJ"),
    (Key::LetterK, "K", "KeyK"),
    (Key::LetterL, "L", "KeyL"),
    (Key::LetterM, "M", "KeyM"),
    (Key::LetterN, "N", "KeyN"),
    (Key::LetterO, "O", "KeyO"),
    (Key::LetterP, "P", "KeyP"),
    (Key::LetterQ, "Q", "KeyQ"),
    (Key::LetterR, "R", "KeyR"),
    (Key::LetterS, "S", "KeyS"),
    (Key::LetterT, "T", "KeyT"),
    (Key::LetterU, "U", "KeyU"),
    (Key::LetterV, "V", "KeyV"),
    (Key::LetterW, "W", "KeyW"),
    (Key::LetterX, "X", "KeyX"),
    (Key::LetterY, "Y", "KeyY"),
    (Key::LetterZ, "Z", "KeyZ"),
    (Key::F1, "F1", "F1"),
    (Key::F2, "F2", "F2"),
    (Key::F3, "F3", "F3"),
    (Key::F4, "F4", "F4"),
    (Key::F5, "F5", "F5"),
    (Key::F6, "F6", "F6"),
    (Key::F7, "F7", "F7"),
    (Key::F8, "F8", "F8"),
    (Key::F9, "F9", "F9"),
    (Key::F10, "F10", "F10"),
    (Key::F11, "F11", "F11"),
    (Key::F12, "F12", "F12"),
    (Key::NumLock, "NumLock", "NumLock"),
    (Key::ScrollLock, "ScrollLock", "ScrollLock"),
    (Key::Semicolon, ";", "Semicolon"),
    (Key::Equal, "=", "Equal"),
    (Key::Comma, ",", "Comma"),
    (Key::Minus, "-", "Minus"),
    (Key::Period, ".", "Period"),
    (Key::ForwardSlash, "/", "Slash"),
    (Key::Backquote, "`", "Backquote"),
    (Key::BracketLeft, "[", "BracketLeft"),
    (Key::Backslash, "\\", "Backslash"),
    (Key::BracketRight, "]", "BracketRight"),
    (Key::Quote, "'", "Quote"),
];

static KEY_BY_EVENT_KEY: LazyLock<HashMap<&'static str, Key>> =
    LazyLock::new(|| KEY_TABLE.iter().map(|&(key, name, _)| (name, key)).collect());

static KEY_BY_CODE: LazyLock<HashMap<&'static str, Key>> =
    LazyLock::new(|| KEY_TABLE.iter().map(|&(key, _, code)| (code, key)).collect());

impl Key {
    /// Canonical `KeyboardEvent.key` value (letters upper-case)
    pub fn event_key(self) -> &'static str {
        KEY_TABLE[(self.bits() - 1) as usize].1
    }

    /// Physical `KeyboardEvent.code` value
    pub fn code(self) -> &'static str {
        KEY_TABLE[(self.bits() - 1) as usize].2
    }

    /// Look up a key by an already-normalized event key
    pub fn from_event_key(key: &str) -> Option<Key> {
        KEY_BY_EVENT_KEY.get(key).copied()
    }

    /// Look up a key by its physical code
    pub fn from_code(code: &str) -> Option<Key> {
        KEY_BY_CODE.get(code).copied()
    }

    /// Display override for keys whose event key reads poorly in a menu
    pub fn glyph(self) -> Option<&'static str> {
        match self {
            Key::ArrowDown => Some("▼"),
            Key::ArrowLeft => Some("◀"),
            Key::ArrowRight => Some("▶"),
            Key::ArrowUp => Some("▲"),
            Key::Backslash => Some("\\"),
            Key::BracketLeft => Some("["),
            Key::BracketRight => Some("]"),
            Key::Comma => Some(","),
            Key::Equal => Some("+"),
            Key::Escape => Some("Esc"),
            Key::Minus => Some("-"),
            Key::ForwardSlash => Some("/"),
            Key::Space => Some("Space"),
            _ => None,
        }
    }
}

impl MouseButton {
    /// Native `MouseEvent.buttons` value for this button
    pub const fn native(self) -> u16 {
        match self {
            MouseButton::None => 0,
            MouseButton::Left => 1,
            MouseButton::Right => 2,
            MouseButton::Auxiliary => 4,
            MouseButton::BrowserBack => 8,
            MouseButton::BrowserForward => 16,
        }
    }

    /// Map a native `buttons` value to a token. Zero and multi-bit masks
    /// have no single button and return `None`.
    pub const fn from_native(buttons: u16) -> Option<MouseButton> {
        match buttons {
            1 => Some(MouseButton::Left),
            2 => Some(MouseButton::Right),
            4 => Some(MouseButton::Auxiliary),
            8 => Some(MouseButton::BrowserBack),
            16 => Some(MouseButton::BrowserForward),
            _ => None,
        }
    }

    pub const fn label(self) -> Option<&'static str> {
        match self {
            MouseButton::None => None,
            MouseButton::Left => Some("Left Click"),
            MouseButton::Right => Some("Right Click"),
            MouseButton::Auxiliary => Some("Middle Click"),
            MouseButton::BrowserBack => Some("Back Click"),
            MouseButton::BrowserForward => Some("Forward Click"),
        }
    }
}

impl Modifier {
    /// Platform-dependent display glyph
    pub const fn glyph(self, is_mac: bool) -> &'static str {
        match self {
            Modifier::Alt => {
                if is_mac {
                    "⌥"
                } else {
                    "Alt"
                }
            }
            Modifier::Cmd => {
                if is_mac {
                    "⌘"
                } else {
                    "Meta"
                }
            }
            Modifier::Ctrl => {
                if is_mac {
                    "⌃"
                } else {
                    "Ctrl"
                }
            }
            Modifier::CmdOrCtrl => {
                if is_mac {
                    "⌘"
                } else {
                    "Ctrl"
                }
            }
            Modifier::Shift => "Shift",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_key_index() {
        for (i, &(key, _, _)) in KEY_TABLE.iter().enumerate() {
            assert_eq!(key.bits() as usize, i + 1, "{:?} out of order", key);
        }
    }

    #[test]
    fn test_event_key_bidirectional() {
        for key in Key::ALL {
            assert_eq!(Key::from_event_key(key.event_key()), Some(key));
            assert_eq!(Key::from_code(key.code()), Some(key));
        }
    }

    #[test]
    fn test_event_key_values() {
        assert_eq!(Key::LetterC.event_key(), "C");
        assert_eq!(Key::Space.event_key(), " ");
        assert_eq!(Key::Number7.event_key(), "7");
        assert_eq!(Key::ArrowDown.event_key(), "ArrowDown");
        assert_eq!(Key::from_event_key("c"), None);
        assert_eq!(Key::from_event_key("Unidentified"), None);
    }

    #[test]
    fn test_codes() {
        assert_eq!(Key::LetterA.code(), "KeyA");
        assert_eq!(Key::Number1.code(), "Digit1");
        assert_eq!(Key::ForwardSlash.code(), "Slash");
        assert_eq!(Key::from_code("KeyZ"), Some(Key::LetterZ));
    }

    #[test]
    fn test_native_buttons_bidirectional() {
        for button in MouseButton::ALL {
            assert_eq!(MouseButton::from_native(button.native()), Some(button));
        }
        assert_eq!(MouseButton::from_native(0), None);
        assert_eq!(MouseButton::from_native(3), None);
    }

    #[test]
    fn test_modifier_glyphs() {
        assert_eq!(Modifier::Alt.glyph(true), "⌥");
        assert_eq!(Modifier::Alt.glyph(false), "Alt");
        assert_eq!(Modifier::CmdOrCtrl.glyph(true), "⌘");
        assert_eq!(Modifier::CmdOrCtrl.glyph(false), "Ctrl");
        assert_eq!(Modifier::Shift.glyph(true), Modifier::Shift.glyph(false));
    }
}
