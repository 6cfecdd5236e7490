//! Adapter to convert winit key and mouse events to `ChordedEvent`

use winit::event::MouseButton as WinitMouseButton;
use winit::keyboard::{Key as WinitKey, KeyCode as WinitKeyCode, ModifiersState, NamedKey, PhysicalKey};

use super::event::{ChordedEvent, EventSource};
use super::types::{Key, MouseButton};

/// Convert winit keyboard event data to a `ChordedEvent`
///
/// The logical key becomes the event's key identifier; the physical key
/// becomes its code, so layouts that produce no recognizable character
/// still match by position.
pub fn event_from_winit_key(
    logical_key: &WinitKey,
    physical_key: PhysicalKey,
    modifiers: ModifiersState,
) -> ChordedEvent {
    let key = match logical_key {
        WinitKey::Named(named) => key_from_named(*named)
            .map(|key| key.event_key().to_string())
            .unwrap_or_else(|| "Unidentified".to_string()),
        WinitKey::Character(s) => s.to_string(),
        _ => "Unidentified".to_string(),
    };

    let code = match physical_key {
        PhysicalKey::Code(code) => key_from_physical(code).map(|key| key.code().to_string()),
        PhysicalKey::Unidentified(_) => None,
    };

    with_modifiers(
        ChordedEvent {
            source: EventSource::Keyboard { key, code },
            ..ChordedEvent::default()
        },
        modifiers,
    )
}

/// Convert a winit mouse button press to a `ChordedEvent`
///
/// Buttons with no chord token produce a mouse event with no buttons held.
pub fn event_from_winit_mouse(button: WinitMouseButton, modifiers: ModifiersState) -> ChordedEvent {
    let button = match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Auxiliary,
        WinitMouseButton::Back => MouseButton::BrowserBack,
        WinitMouseButton::Forward => MouseButton::BrowserForward,
        WinitMouseButton::Other(_) => MouseButton::None,
    };

    with_modifiers(ChordedEvent::mouse(button.native()), modifiers)
}

fn with_modifiers(event: ChordedEvent, modifiers: ModifiersState) -> ChordedEvent {
    // super = meta = cmd on macOS
    event.with_modifiers(
        modifiers.alt_key(),
        modifiers.control_key(),
        modifiers.super_key(),
        modifiers.shift_key(),
    )
}

fn key_from_named(named: NamedKey) -> Option<Key> {
    let key = match named {
        NamedKey::Backspace => Key::Backspace,
        NamedKey::Tab => Key::Tab,
        NamedKey::Clear => Key::Clear,
        NamedKey::Enter => Key::Enter,
        NamedKey::Pause => Key::Pause,
        NamedKey::CapsLock => Key::CapsLock,
        NamedKey::Escape => Key::Escape,
        NamedKey::Space => Key::Space,
        NamedKey::PageUp => Key::PageUp,
        NamedKey::PageDown => Key::PageDown,
        NamedKey::End => Key::End,
        NamedKey::Home => Key::Home,
        NamedKey::ArrowLeft => Key::ArrowLeft,
        NamedKey::ArrowUp => Key::ArrowUp,
        NamedKey::ArrowRight => Key::ArrowRight,
        NamedKey::ArrowDown => Key::ArrowDown,
        NamedKey::Insert => Key::Insert,
        NamedKey::Delete => Key::Delete,
        NamedKey::Help => Key::Help,
        NamedKey::NumLock => Key::NumLock,
        NamedKey::ScrollLock => Key::ScrollLock,

        // Function keys
        NamedKey::F1 => Key::F1,
        NamedKey::F2 => Key::F2,
        NamedKey::F3 => Key::F3,
        NamedKey::F4 => Key::F4,
        NamedKey::F5 => Key::F5,
        NamedKey::F6 => Key::F6,
        NamedKey::F7 => Key::F7,
        NamedKey::F8 => Key::F8,
        NamedKey::F9 => Key::F9,
        NamedKey::F10 => Key::F10,
        NamedKey::F11 => Key::F11,
        NamedKey::F12 => Key::F12,

        _ => return None,
    };
    Some(key)
}

fn key_from_physical(code: WinitKeyCode) -> Option<Key> {
    let key = match code {
        WinitKeyCode::KeyA => Key::LetterA,
        WinitKeyCode::KeyB => Key::LetterB,
        WinitKeyCode::KeyC => Key::LetterC,
        WinitKeyCode::KeyD => Key::LetterD,
        WinitKeyCode::KeyE => Key::LetterE,
        WinitKeyCode::KeyF => Key::LetterF,
        WinitKeyCode::KeyG => Key::LetterG,
        WinitKeyCode::KeyH => Key::LetterH,
        WinitKeyCode::KeyI => Key::LetterI,
        WinitKeyCode::KeyJ => Key::LetterJ,
        WinitKeyCode::KeyK => Key::LetterK,
        WinitKeyCode::KeyL => Key::LetterL,
        WinitKeyCode::KeyM => Key::LetterM,
        WinitKeyCode::KeyN => Key::LetterN,
        WinitKeyCode::KeyO => Key::LetterO,
        WinitKeyCode::KeyP => Key::LetterP,
        WinitKeyCode::KeyQ => Key::LetterQ,
        WinitKeyCode::KeyR => Key::LetterR,
        WinitKeyCode::KeyS => Key::LetterS,
        WinitKeyCode::KeyT => Key::LetterT,
        WinitKeyCode::KeyU => Key::LetterU,
        WinitKeyCode::KeyV => Key::LetterV,
        WinitKeyCode::KeyW => Key::LetterW,
        WinitKeyCode::KeyX => Key::LetterX,
        WinitKeyCode::KeyY => Key::LetterY,
        WinitKeyCode::KeyZ => Key::LetterZ,

        WinitKeyCode::Digit0 => Key::Number0,
        WinitKeyCode::Digit1 => Key::Number1,
        WinitKeyCode::Digit2 => Key::Number2,
        WinitKeyCode::Digit3 => Key::Number3,
        WinitKeyCode::Digit4 => Key::Number4,
        WinitKeyCode::Digit5 => Key::Number5,
        WinitKeyCode::Digit6 => Key::Number6,
        WinitKeyCode::Digit7 => Key::Number7,
        WinitKeyCode::Digit8 => Key::Number8,
        WinitKeyCode::Digit9 => Key::Number9,

        WinitKeyCode::Semicolon => Key::Semicolon,
        WinitKeyCode::Equal => Key::Equal,
        WinitKeyCode::Comma => Key::Comma,
        WinitKeyCode::Minus => Key::Minus,
        WinitKeyCode::Period => Key::Period,
        WinitKeyCode::Slash => Key::ForwardSlash,
        WinitKeyCode::Backquote => Key::Backquote,
        WinitKeyCode::BracketLeft => Key::BracketLeft,
        WinitKeyCode::Backslash => Key::Backslash,
        WinitKeyCode::BracketRight => Key::BracketRight,
        WinitKeyCode::Quote => Key::Quote,

        WinitKeyCode::Backspace => Key::Backspace,
        WinitKeyCode::Tab => Key::Tab,
        WinitKeyCode::Enter => Key::Enter,
        WinitKeyCode::Pause => Key::Pause,
        WinitKeyCode::CapsLock => Key::CapsLock,
        WinitKeyCode::Escape => Key::Escape,
        WinitKeyCode::Space => Key::Space,
        WinitKeyCode::PageUp => Key::PageUp,
        WinitKeyCode::PageDown => Key::PageDown,
        WinitKeyCode::End => Key::End,
        WinitKeyCode::Home => Key::Home,
        WinitKeyCode::ArrowLeft => Key::ArrowLeft,
        WinitKeyCode::ArrowUp => Key::ArrowUp,
        WinitKeyCode::ArrowRight => Key::ArrowRight,
        WinitKeyCode::ArrowDown => Key::ArrowDown,
        WinitKeyCode::Insert => Key::Insert,
        WinitKeyCode::Delete => Key::Delete,
        WinitKeyCode::Help => Key::Help,
        WinitKeyCode::NumLock => Key::NumLock,
        WinitKeyCode::ScrollLock => Key::ScrollLock,

        WinitKeyCode::F1 => Key::F1,
        WinitKeyCode::F2 => Key::F2,
        WinitKeyCode::F3 => Key::F3,
        WinitKeyCode::F4 => Key::F4,
        WinitKeyCode::F5 => Key::F5,
        WinitKeyCode::F6 => Key::F6,
        WinitKeyCode::F7 => Key::F7,
        WinitKeyCode::F8 => Key::F8,
        WinitKeyCode::F9 => Key::F9,
        WinitKeyCode::F10 => Key::F10,
        WinitKeyCode::F11 => Key::F11,
        WinitKeyCode::F12 => Key::F12,

        _ => return None,
    };
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::matcher::ChordMatcher;
    use crate::chord::platform::Platform;
    use crate::chord::types::Modifier;

    #[test]
    fn test_character_key() {
        let event = event_from_winit_key(
            &WinitKey::Character("s".into()),
            PhysicalKey::Code(WinitKeyCode::KeyS),
            ModifiersState::CONTROL,
        );

        assert_eq!(event.key(), Some("s"));
        assert_eq!(event.code(), Some("KeyS"));
        assert!(event.ctrl_key);
        assert!(!event.shift_key);
    }

    #[test]
    fn test_named_key() {
        let event = event_from_winit_key(
            &WinitKey::Named(NamedKey::ArrowLeft),
            PhysicalKey::Code(WinitKeyCode::ArrowLeft),
            ModifiersState::SHIFT | ModifiersState::ALT,
        );

        assert_eq!(event.key(), Some("ArrowLeft"));
        assert!(event.shift_key);
        assert!(event.alt_key);
        assert!(!event.ctrl_key);
    }

    #[test]
    fn test_space_uses_event_key() {
        let event = event_from_winit_key(
            &WinitKey::Named(NamedKey::Space),
            PhysicalKey::Code(WinitKeyCode::Space),
            ModifiersState::empty(),
        );
        assert_eq!(event.key(), Some(" "));
    }

    #[test]
    fn test_unmapped_named_key() {
        let event = event_from_winit_key(
            &WinitKey::Named(NamedKey::F24),
            PhysicalKey::Code(WinitKeyCode::F24),
            ModifiersState::empty(),
        );
        assert_eq!(event.key(), Some("Unidentified"));
        assert_eq!(event.code(), None);
    }

    #[test]
    fn test_function_keys() {
        let keys = [
            (NamedKey::F1, "F1"),
            (NamedKey::F5, "F5"),
            (NamedKey::F12, "F12"),
        ];
        for (named, expected) in keys {
            let event = event_from_winit_key(
                &WinitKey::Named(named),
                PhysicalKey::Code(WinitKeyCode::F1), // doesn't matter
                ModifiersState::empty(),
            );
            assert_eq!(event.key(), Some(expected));
        }
    }

    #[test]
    fn test_non_latin_layout_matches_by_code() {
        // Cyrillic layout: logical key is "ы", physical key is KeyS
        let event = event_from_winit_key(
            &WinitKey::Character("ы".into()),
            PhysicalKey::Code(WinitKeyCode::KeyS),
            ModifiersState::CONTROL,
        );

        let matcher = ChordMatcher::new(Platform::Other);
        assert!(matcher.is_chord_pressed(&event, Modifier::CmdOrCtrl | Key::LetterS));
    }

    #[test]
    fn test_mouse_buttons() {
        let event = event_from_winit_mouse(WinitMouseButton::Left, ModifiersState::ALT);
        assert_eq!(event.buttons(), Some(1));
        assert!(event.alt_key);

        assert_eq!(
            event_from_winit_mouse(WinitMouseButton::Middle, ModifiersState::empty()).buttons(),
            Some(4)
        );
        assert_eq!(
            event_from_winit_mouse(WinitMouseButton::Forward, ModifiersState::empty()).buttons(),
            Some(16)
        );
        assert_eq!(
            event_from_winit_mouse(WinitMouseButton::Other(7), ModifiersState::empty()).buttons(),
            Some(0)
        );
    }

    #[test]
    fn test_super_maps_to_meta() {
        let event = event_from_winit_mouse(WinitMouseButton::Left, ModifiersState::SUPER);
        assert!(event.meta_key);

        let matcher = ChordMatcher::new(Platform::Mac);
        assert!(matcher.is_chord_pressed(&event, Modifier::CmdOrCtrl | MouseButton::Left));
    }
}
