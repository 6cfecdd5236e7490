//! Keyboard and mouse chord matching
//!
//! A chord is a set of tokens (modifiers, at most one mouse button, at most
//! one key) packed into disjoint bit ranges of a `u32`. This module:
//! - Decides whether an input event satisfies a chord
//! - Resolves `CmdOrCtrl` to Cmd on macOS and Ctrl elsewhere
//! - Renders chords and events as display strings
//! - Dispatches events to listeners, directly or through named bindings
//!
//! # Architecture
//!
//! ```text
//! winit event → ChordedEvent → ChordMatcher::is_chord_pressed() → listener
//!                            → ChordDispatcher::dispatch() → action name
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let matcher = ChordMatcher::host();
//! let event = ChordedEvent::keyboard("s").ctrl();
//!
//! if matcher.is_chord_pressed(&event, Modifier::CmdOrCtrl | Key::LetterS) {
//!     save();
//! }
//!
//! // Or load named bindings from YAML
//! let bindings = load_default_bindings(HostPlatform);
//! ```

mod binding;
mod config;
mod defaults;
mod dispatch;
mod display;
mod event;
mod handler;
mod matcher;
mod platform;
mod printable;
mod tables;
mod types;
#[cfg(feature = "winit")]
mod winit_adapter;

pub use binding::ChordBinding;
pub use config::{
    load_bindings_file, parse_bindings, parse_bindings_yaml, parse_chord, BindingConfig,
    BindingsConfig, ChordError,
};
pub use defaults::{
    default_bindings, get_default_bindings_yaml, load_bindings_layered, load_default_bindings,
    merge_bindings, UNBOUND_ACTION,
};
pub use dispatch::{ActionListener, ChordDispatcher};
pub use display::{ChordDisplay, DEFAULT_JOIN_SYMBOL};
pub use event::{
    event_to_chord, extract_tokens, normalize_event_key, ChordedEvent, EventSource, TokenSet,
};
pub use handler::{ChordHandler, ChordInput, ChordMap, WhenCondition};
pub use matcher::{is_modifier_pressed, ChordMatcher};
pub use platform::{HostPlatform, Platform, PlatformQuery};
pub use printable::{is_printable_char, is_printable_char_pressed};
pub use types::{
    remove_token, token_present, Chord, Key, Modifier, MouseButton, Token, KEY_MASK,
    MODIFIER_MASK, MOUSE_BUTTON_MASK,
};
#[cfg(feature = "winit")]
pub use winit_adapter::{event_from_winit_key, event_from_winit_mouse};
