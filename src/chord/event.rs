//! Input events and token extraction
//!
//! `ChordedEvent` is a read-only snapshot of a keyboard or mouse event:
//! the four modifier flags plus where the event came from.

use std::borrow::Cow;

use super::types::{Chord, Key, Modifier, MouseButton, Token};

/// Origin of an event and its origin-specific payload
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EventSource {
    /// Keyboard event with its `key` identifier and optional physical `code`
    Keyboard { key: String, code: Option<String> },
    /// Mouse event with the native `buttons` value
    Mouse { buttons: u16 },
    /// Neither key nor button, only modifier state
    #[default]
    None,
}

/// A keyboard or mouse event, as seen by the matcher
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChordedEvent {
    pub alt_key: bool,
    pub ctrl_key: bool,
    pub meta_key: bool,
    pub shift_key: bool,
    pub source: EventSource,
}

impl ChordedEvent {
    /// Keyboard event for `key` with no modifiers held
    pub fn keyboard(key: impl Into<String>) -> Self {
        Self {
            source: EventSource::Keyboard {
                key: key.into(),
                code: None,
            },
            ..Self::default()
        }
    }

    /// Mouse event with the native `buttons` value
    pub fn mouse(buttons: u16) -> Self {
        Self {
            source: EventSource::Mouse { buttons },
            ..Self::default()
        }
    }

    /// Event carrying only modifier flags
    pub fn modifiers_only() -> Self {
        Self::default()
    }

    pub fn alt(mut self) -> Self {
        self.alt_key = true;
        self
    }

    pub fn ctrl(mut self) -> Self {
        self.ctrl_key = true;
        self
    }

    pub fn meta(mut self) -> Self {
        self.meta_key = true;
        self
    }

    pub fn shift(mut self) -> Self {
        self.shift_key = true;
        self
    }

    /// Attach a physical key code. No effect on non-keyboard events.
    pub fn with_code(mut self, new_code: impl Into<String>) -> Self {
        if let EventSource::Keyboard { ref mut code, .. } = self.source {
            *code = Some(new_code.into());
        }
        self
    }

    /// Set all four modifier flags at once
    pub fn with_modifiers(mut self, alt: bool, ctrl: bool, meta: bool, shift: bool) -> Self {
        self.alt_key = alt;
        self.ctrl_key = ctrl;
        self.meta_key = meta;
        self.shift_key = shift;
        self
    }

    /// Raw key identifier for keyboard events
    pub fn key(&self) -> Option<&str> {
        match &self.source {
            EventSource::Keyboard { key, .. } => Some(key),
            _ => None,
        }
    }

    /// Physical key code for keyboard events, when known
    pub fn code(&self) -> Option<&str> {
        match &self.source {
            EventSource::Keyboard { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Native `buttons` value for mouse events
    pub fn buttons(&self) -> Option<u16> {
        match self.source {
            EventSource::Mouse { buttons } => Some(buttons),
            _ => None,
        }
    }

    /// Whether the flag backing a physical modifier is set
    pub fn modifier_down(&self, modifier: Modifier) -> bool {
        match modifier {
            Modifier::Alt => self.alt_key,
            Modifier::Ctrl => self.ctrl_key,
            Modifier::Cmd => self.meta_key,
            Modifier::Shift => self.shift_key,
            Modifier::CmdOrCtrl => self.meta_key || self.ctrl_key,
        }
    }

    pub fn any_modifier_down(&self) -> bool {
        self.alt_key || self.ctrl_key || self.meta_key || self.shift_key
    }

    /// Key token this event asserts, if any
    pub fn key_token(&self) -> Option<Key> {
        let EventSource::Keyboard { key, code } = &self.source else {
            return None;
        };
        Key::from_event_key(&normalize_event_key(key))
            .or_else(|| code.as_deref().and_then(Key::from_code))
    }
}

/// Normalize an event key for table lookup: a single lowercase ASCII letter
/// is upper-cased, everything else passes through.
pub fn normalize_event_key(key: &str) -> Cow<'_, str> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_lowercase() => {
            Cow::Owned(c.to_ascii_uppercase().to_string())
        }
        _ => Cow::Borrowed(key),
    }
}

/// Insertion-ordered set of tokens asserted by one event
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenSet {
    tokens: Vec<Token>,
}

impl TokenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a token. Returns false if it was already present.
    pub fn insert(&mut self, token: Token) -> bool {
        if self.tokens.contains(&token) {
            return false;
        }
        self.tokens.push(token);
        true
    }

    pub fn contains(&self, token: Token) -> bool {
        self.tokens.contains(&token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Token> + '_ {
        self.tokens.iter().copied()
    }

    /// Fold every token into one chord
    pub fn to_chord(&self) -> Chord {
        self.iter()
            .fold(Chord::EMPTY, |chord, token| chord | Chord::from(token))
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = Token;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Token>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter().copied()
    }
}

/// Decompose an event into the independent tokens it asserts right now
///
/// Order: modifiers (Alt, Ctrl, Cmd, Shift), then the mouse button, then
/// the key. Unrecognized keys and button values contribute nothing.
pub fn extract_tokens(event: &ChordedEvent) -> TokenSet {
    let mut tokens = TokenSet::new();

    for modifier in Modifier::PHYSICAL {
        if event.modifier_down(modifier) {
            tokens.insert(Token::Modifier(modifier));
        }
    }

    if let Some(button) = event.buttons().and_then(MouseButton::from_native) {
        tokens.insert(Token::MouseButton(button));
    }

    if let Some(key) = event.key_token() {
        tokens.insert(Token::Key(key));
    }

    tokens
}

/// Chord equivalent of everything the event asserts
pub fn event_to_chord(event: &ChordedEvent) -> Chord {
    extract_tokens(event).to_chord()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_event_key() {
        assert_eq!(normalize_event_key("c"), "C");
        assert_eq!(normalize_event_key("C"), "C");
        assert_eq!(normalize_event_key("5"), "5");
        assert_eq!(normalize_event_key("ArrowDown"), "ArrowDown");
        assert_eq!(normalize_event_key(";"), ";");
        assert_eq!(normalize_event_key(" "), " ");
        assert_eq!(normalize_event_key("é"), "é");
    }

    #[test]
    fn test_extract_keyboard_tokens() {
        let event = ChordedEvent::keyboard("c").alt().shift();
        let tokens = extract_tokens(&event);
        let expected = vec![
            Token::Modifier(Modifier::Alt),
            Token::Modifier(Modifier::Shift),
            Token::Key(Key::LetterC),
        ];
        assert_eq!(tokens.iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_extract_modifier_order_is_fixed() {
        let event = ChordedEvent::modifiers_only()
            .shift()
            .meta()
            .ctrl()
            .alt();
        let tokens: Vec<_> = extract_tokens(&event).iter().collect();
        assert_eq!(
            tokens,
            vec![
                Token::Modifier(Modifier::Alt),
                Token::Modifier(Modifier::Ctrl),
                Token::Modifier(Modifier::Cmd),
                Token::Modifier(Modifier::Shift),
            ]
        );
    }

    #[test]
    fn test_extract_mouse_tokens() {
        let event = ChordedEvent::mouse(MouseButton::Right.native()).ctrl();
        let tokens = extract_tokens(&event);
        assert!(tokens.contains(Token::Modifier(Modifier::Ctrl)));
        assert!(tokens.contains(Token::MouseButton(MouseButton::Right)));
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_unrecognized_key_keeps_modifiers() {
        let event = ChordedEvent::keyboard("MediaPlayPause").ctrl();
        let tokens = extract_tokens(&event);
        assert_eq!(
            tokens.iter().collect::<Vec<_>>(),
            vec![Token::Modifier(Modifier::Ctrl)]
        );
    }

    #[test]
    fn test_unidentified_key_falls_back_to_code() {
        let event = ChordedEvent::keyboard("Unidentified").with_code("KeyA");
        assert_eq!(event.key_token(), Some(Key::LetterA));
    }

    #[test]
    fn test_modifiers_only_event() {
        let event = ChordedEvent::modifiers_only().alt().ctrl();
        let tokens = extract_tokens(&event);
        assert_eq!(tokens.len(), 2);
        assert_eq!(event_to_chord(&event), Modifier::Alt | Modifier::Ctrl);
    }

    #[test]
    fn test_no_button_pressed() {
        let event = ChordedEvent::mouse(0);
        assert!(extract_tokens(&event).is_empty());
    }

    #[test]
    fn test_token_set_dedup() {
        let mut set = TokenSet::new();
        assert!(set.insert(Token::Key(Key::Tab)));
        assert!(!set.insert(Token::Key(Key::Tab)));
        assert_eq!(set.len(), 1);
    }
}
