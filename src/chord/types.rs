//! Core types for the chord system: Chord, Key, Modifier, MouseButton, Token
//!
//! A chord packs every token into one `u32`. The three token families live
//! in disjoint bit ranges so any OR-combination decomposes losslessly:
//!
//! ```text
//! bit:  15    14   13   12  | 11 .. 7         | 6 .. 0
//!       Shift Alt  Cmd  Ctrl| mouse buttons   | key index (1..=80)
//! ```

use std::ops::BitOr;

/// Bits reserved for the key index
pub const KEY_MASK: u32 = 0x7F;

/// Bits reserved for mouse buttons
pub const MOUSE_BUTTON_MASK: u32 = 0b1_1111 << 7;

/// Bits reserved for modifiers
pub const MODIFIER_MASK: u32 = 0b1111 << 12;

/// A combination of zero or more tokens packed into one integer
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Chord(u32);

impl Chord {
    pub const EMPTY: Chord = Chord(0);

    /// Wrap raw bits. Bits outside the known token ranges are kept as-is.
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Chord(bits)
    }

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two chords
    #[inline]
    pub const fn union(self, other: Chord) -> Chord {
        Chord(self.0 | other.0)
    }

    /// Check if every bit of `token` is set in this chord
    #[inline]
    pub const fn contains(self, token: Chord) -> bool {
        token_present(self, token)
    }

    /// Clear `token`'s bits if all of them are present
    #[inline]
    pub const fn remove(self, token: Chord) -> Chord {
        remove_token(self, token)
    }

    /// Only the key-index bits of this chord
    #[inline]
    pub const fn key_bits(self) -> u32 {
        self.0 & KEY_MASK
    }

    /// Key token carried by this chord, if the key bits name a known key
    pub fn key(self) -> Option<Key> {
        Key::from_index(self.key_bits())
    }
}

/// True iff all bits of `token` are set in `chord`
#[inline]
pub const fn token_present(chord: Chord, token: Chord) -> bool {
    (chord.0 & token.0) == token.0
}

/// Clear `token`'s bits from `chord` if present, else return `chord` unchanged
#[inline]
pub const fn remove_token(chord: Chord, token: Chord) -> Chord {
    if token_present(chord, token) {
        Chord(chord.0 & !token.0)
    } else {
        chord
    }
}

/// Modifier keys. `CmdOrCtrl` is the union of the Cmd and Ctrl bits and is
/// only ever requested, never reported by an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Modifier {
    Ctrl = 1 << 12,
    Cmd = 1 << 13,
    CmdOrCtrl = (1 << 12) | (1 << 13),
    Alt = 1 << 14,
    Shift = 1 << 15,
}

impl Modifier {
    /// Order used when decomposing a chord for display
    pub const ALL: [Modifier; 5] = [
        Modifier::Alt,
        Modifier::CmdOrCtrl,
        Modifier::Ctrl,
        Modifier::Cmd,
        Modifier::Shift,
    ];

    /// The four modifiers an event can report, in extraction order
    pub const PHYSICAL: [Modifier; 4] = [
        Modifier::Alt,
        Modifier::Ctrl,
        Modifier::Cmd,
        Modifier::Shift,
    ];

    #[inline]
    pub const fn bits(self) -> u32 {
        self as u32
    }
}

/// Mouse buttons in token space. Shifted up past the key range; the
/// native `buttons` values (1, 2, 4, 8, 16) live in the tables module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum MouseButton {
    None = 0,
    Left = 1 << 7,
    Right = 1 << 8,
    Auxiliary = 1 << 9,
    BrowserBack = 1 << 10,
    BrowserForward = 1 << 11,
}

impl MouseButton {
    /// Every real button, in display order
    pub const ALL: [MouseButton; 5] = [
        MouseButton::Left,
        MouseButton::Right,
        MouseButton::Auxiliary,
        MouseButton::BrowserBack,
        MouseButton::BrowserForward,
    ];

    #[inline]
    pub const fn bits(self) -> u32 {
        self as u32
    }
}

/// Logical keys, enumerated sequentially. A chord carries at most one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Key {
    Backspace = 1,
    Tab,
    Clear,
    Enter,
    Pause,
    CapsLock,
    Escape,
    Space,
    PageUp,
    PageDown,
    End,
    Home,
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,
    Insert,
    Delete,
    Help,
    Number0,
    Number1,
    Number2,
    Number3,
    Number4,
    Number5,
    Number6,
    Number7,
    Number8,
    Number9,
    LetterA,
    LetterB,
    LetterC,
    LetterD,
    LetterE,
    LetterF,
    LetterG,
    LetterH,
    LetterI,
    LetterJ,
    LetterK,
    LetterL,
    LetterM,
    LetterN,
    LetterO,
    LetterP,
    LetterQ,
    LetterR,
    LetterS,
    LetterT,
    LetterU,
    LetterV,
    LetterW,
    LetterX,
    LetterY,
    LetterZ,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    NumLock,
    ScrollLock,
    Semicolon,
    Equal,
    Comma,
    Minus,
    Period,
    ForwardSlash,
    Backquote,
    BracketLeft,
    Backslash,
    BracketRight,
    Quote,
}

impl Key {
    pub const ALL: [Key; 80] = [
        Key::Backspace,
        Key::Tab,
        Key::Clear,
        Key::Enter,
        Key::Pause,
        Key::CapsLock,
        Key::Escape,
        Key::Space,
        Key::PageUp,
        Key::PageDown,
        Key::End,
        Key::Home,
        Key::ArrowLeft,
        Key::ArrowUp,
        Key::ArrowRight,
        Key::ArrowDown,
        Key::Insert,
        Key::Delete,
        Key::Help,
        Key::Number0,
        Key::Number1,
        Key::Number2,
        Key::Number3,
        Key::Number4,
        Key::Number5,
        Key::Number6,
        Key::Number7,
        Key::Number8,
        Key::Number9,
        Key::LetterA,
        Key::LetterB,
        Key::LetterC,
        Key::LetterD,
        Key::LetterE,
        Key::LetterF,
        Key::LetterG,
        Key::LetterH,
        Key::LetterI,
        Key::LetterJ,
        Key::LetterK,
        Key::LetterL,
        Key::LetterM,
        Key::LetterN,
        Key::LetterO,
        Key::LetterP,
        Key::LetterQ,
        Key::LetterR,
        Key::LetterS,
        Key::LetterT,
        Key::LetterU,
        Key::LetterV,
        Key::LetterW,
        Key::LetterX,
        Key::LetterY,
        Key::LetterZ,
        Key::F1,
        Key::F2,
        Key::F3,
        Key::F4,
        Key::F5,
        Key::F6,
        Key::F7,
        Key::F8,
        Key::F9,
        Key::F10,
        Key::F11,
        Key::F12,
        Key::NumLock,
        Key::ScrollLock,
        Key::Semicolon,
        Key::Equal,
        Key::Comma,
        Key::Minus,
        Key::Period,
        Key::ForwardSlash,
        Key::Backquote,
        Key::BracketLeft,
        Key::Backslash,
        Key::BracketRight,
        Key::Quote,
    ];

    #[inline]
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Look up a key by its sequential index. Zero and out-of-range values
    /// (including any stray bits above the key range) return `None`.
    pub fn from_index(index: u32) -> Option<Key> {
        if index == 0 || index > Key::ALL.len() as u32 {
            return None;
        }
        Some(Key::ALL[(index - 1) as usize])
    }
}

/// One indivisible unit of a chord
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Token {
    Modifier(Modifier),
    MouseButton(MouseButton),
    Key(Key),
}

impl Token {
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            Token::Modifier(m) => m.bits(),
            Token::MouseButton(b) => b.bits(),
            Token::Key(k) => k.bits(),
        }
    }
}

impl From<Key> for Chord {
    fn from(key: Key) -> Self {
        Chord(key.bits())
    }
}

impl From<Modifier> for Chord {
    fn from(modifier: Modifier) -> Self {
        Chord(modifier.bits())
    }
}

impl From<MouseButton> for Chord {
    fn from(button: MouseButton) -> Self {
        Chord(button.bits())
    }
}

impl From<Token> for Chord {
    fn from(token: Token) -> Self {
        Chord(token.bits())
    }
}

impl From<Key> for Token {
    fn from(key: Key) -> Self {
        Token::Key(key)
    }
}

impl From<Modifier> for Token {
    fn from(modifier: Modifier) -> Self {
        Token::Modifier(modifier)
    }
}

impl From<MouseButton> for Token {
    fn from(button: MouseButton) -> Self {
        Token::MouseButton(button)
    }
}

impl<T: Into<Chord>> BitOr<T> for Chord {
    type Output = Chord;

    fn bitor(self, rhs: T) -> Self::Output {
        self.union(rhs.into())
    }
}

impl<T: Into<Chord>> BitOr<T> for Key {
    type Output = Chord;

    fn bitor(self, rhs: T) -> Self::Output {
        Chord::from(self).union(rhs.into())
    }
}

impl<T: Into<Chord>> BitOr<T> for Modifier {
    type Output = Chord;

    fn bitor(self, rhs: T) -> Self::Output {
        Chord::from(self).union(rhs.into())
    }
}

impl<T: Into<Chord>> BitOr<T> for MouseButton {
    type Output = Chord;

    fn bitor(self, rhs: T) -> Self::Output {
        Chord::from(self).union(rhs.into())
    }
}
