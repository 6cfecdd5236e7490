//! Human-readable rendering of chords and events
//!
//! Chords are decomposed in a fixed order (modifiers, then mouse buttons,
//! then the key) so the same chord always renders the same string:
//!
//! ```text
//! Alt | Shift | LetterC   →  "⌥ + Shift + C"   (mac)
//!                         →  "Alt + Shift + C" (elsewhere)
//! ```

use std::fmt;

use super::config::ChordError;
use super::event::{extract_tokens, normalize_event_key, ChordedEvent};
use super::platform::{HostPlatform, PlatformQuery};
use super::types::{Chord, Key, Modifier, MouseButton, Token};

/// Separator used when none is given
pub const DEFAULT_JOIN_SYMBOL: &str = " + ";

/// Renders chords and events for one resolved platform
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChordDisplay {
    is_mac: bool,
}

impl ChordDisplay {
    pub fn new(platform: impl PlatformQuery) -> Self {
        Self {
            is_mac: platform.is_mac_platform(),
        }
    }

    pub fn host() -> Self {
        Self::new(HostPlatform)
    }

    /// Render a chord
    ///
    /// Fails only when the bits left after stripping modifiers and buttons
    /// do not name a known key, since there is nothing sensible to show.
    pub fn display_chord(&self, chord: Chord, join_symbol: &str) -> Result<String, ChordError> {
        let (tokens, leftover) = decompose_chord(chord);

        let mut parts: Vec<&str> = tokens
            .iter()
            .filter_map(|&token| self.non_key_display(token))
            .collect();

        if !leftover.is_empty() {
            let key = Key::from_index(leftover.bits())
                .ok_or(ChordError::UnknownToken(leftover.bits()))?;
            parts.push(key.glyph().unwrap_or_else(|| key.event_key()));
        }

        Ok(parts.join(join_symbol))
    }

    /// Render the tokens an event asserts. Keys without a glyph override
    /// show the event's raw key string, or the canonical key name when the
    /// key was only recovered from its physical code.
    pub fn display_event(&self, event: &ChordedEvent, join_symbol: &str) -> String {
        let tokens = extract_tokens(event);

        let parts: Vec<&str> = tokens
            .iter()
            .filter_map(|token| match token {
                Token::Key(key) => {
                    Some(key.glyph().unwrap_or_else(|| raw_key_label(event, key)))
                }
                other => self.non_key_display(other),
            })
            .collect();

        parts.join(join_symbol)
    }

    fn non_key_display(&self, token: Token) -> Option<&'static str> {
        match token {
            Token::MouseButton(button) => button.label(),
            Token::Modifier(modifier) => Some(modifier.glyph(self.is_mac)),
            Token::Key(_) => None,
        }
    }
}

/// The event's own key string when it names `key`, else the key's event name
fn raw_key_label(event: &ChordedEvent, key: Key) -> &str {
    match event.key() {
        Some(raw) if Key::from_event_key(&normalize_event_key(raw)) == Some(key) => raw,
        _ => key.event_key(),
    }
}

/// Strip every known non-key token in display order. Returns the tokens
/// found and whatever bits are left over.
fn decompose_chord(chord: Chord) -> (Vec<Token>, Chord) {
    let non_key_tokens = Modifier::ALL
        .iter()
        .map(|&m| Token::Modifier(m))
        .chain(MouseButton::ALL.iter().map(|&b| Token::MouseButton(b)));

    let mut remaining = chord;
    let mut found = Vec::new();
    for token in non_key_tokens {
        let bits = Chord::from(token);
        if remaining.contains(bits) {
            remaining = remaining.remove(bits);
            found.push(token);
        }
    }
    (found, remaining)
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match ChordDisplay::host().display_chord(*self, DEFAULT_JOIN_SYMBOL) {
            Ok(s) => write!(f, "{}", s),
            Err(_) => write!(f, "Unknown({:#x})", self.bits()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::platform::Platform;

    fn mac() -> ChordDisplay {
        ChordDisplay::new(Platform::Mac)
    }

    fn other() -> ChordDisplay {
        ChordDisplay::new(Platform::Other)
    }

    #[test]
    fn test_display_chord_mac() {
        let chord = Modifier::Alt | Modifier::Shift | Key::LetterC;
        assert_eq!(
            mac().display_chord(chord, DEFAULT_JOIN_SYMBOL).unwrap(),
            "⌥ + Shift + C"
        );
    }

    #[test]
    fn test_display_chord_other() {
        let chord = Modifier::Alt | Modifier::Shift | Key::LetterC;
        assert_eq!(
            other().display_chord(chord, DEFAULT_JOIN_SYMBOL).unwrap(),
            "Alt + Shift + C"
        );
    }

    #[test]
    fn test_display_mouse_chord() {
        let chord = Modifier::Alt | MouseButton::Left;
        assert_eq!(
            mac().display_chord(chord, DEFAULT_JOIN_SYMBOL).unwrap(),
            "⌥ + Left Click"
        );
    }

    #[test]
    fn test_display_mixed_chord_order() {
        let chord = Modifier::Alt | Modifier::Shift | Key::LetterC | MouseButton::Left;
        assert_eq!(
            mac().display_chord(chord, DEFAULT_JOIN_SYMBOL).unwrap(),
            "⌥ + Shift + Left Click + C"
        );
    }

    #[test]
    fn test_display_cmd_or_ctrl() {
        let chord = Modifier::CmdOrCtrl | Key::LetterS;
        assert_eq!(mac().display_chord(chord, "+").unwrap(), "⌘+S");
        assert_eq!(other().display_chord(chord, "+").unwrap(), "Ctrl+S");
    }

    #[test]
    fn test_display_empty_and_single() {
        assert_eq!(mac().display_chord(Chord::EMPTY, " + ").unwrap(), "");
        assert_eq!(mac().display_chord(Key::F5.into(), " + ").unwrap(), "F5");
        assert_eq!(
            mac().display_chord(Key::ArrowUp.into(), " + ").unwrap(),
            "▲"
        );
    }

    #[test]
    fn test_display_unknown_key_bits() {
        let chord = Modifier::Alt | Chord::from_bits(0x7F);
        assert!(matches!(
            mac().display_chord(chord, " + "),
            Err(ChordError::UnknownToken(0x7F))
        ));
    }

    #[test]
    fn test_display_keyboard_event() {
        let event = ChordedEvent::keyboard("ArrowDown").alt();
        assert_eq!(mac().display_event(&event, DEFAULT_JOIN_SYMBOL), "⌥ + ▼");
    }

    #[test]
    fn test_display_mouse_event() {
        let event = ChordedEvent::mouse(MouseButton::Left.native())
            .alt()
            .ctrl()
            .meta()
            .shift();
        assert_eq!(
            mac().display_event(&event, DEFAULT_JOIN_SYMBOL),
            "⌥ + ⌃ + ⌘ + Shift + Left Click"
        );
        assert_eq!(
            other().display_event(&event, DEFAULT_JOIN_SYMBOL),
            "Alt + Ctrl + Meta + Shift + Left Click"
        );
    }

    #[test]
    fn test_display_event_uses_raw_key() {
        let event = ChordedEvent::keyboard("a").ctrl();
        assert_eq!(other().display_event(&event, "-"), "Ctrl-a");
    }

    #[test]
    fn test_display_event_code_fallback_uses_key_name() {
        let event = ChordedEvent::keyboard("Unidentified").with_code("KeyA").ctrl();
        assert_eq!(other().display_event(&event, " + "), "Ctrl + A");
    }

    #[test]
    fn test_display_event_drops_unknown_key() {
        let event = ChordedEvent::keyboard("MediaPlayPause");
        assert_eq!(mac().display_event(&event, " + "), "");
    }
}
