//! keychord - keyboard and mouse chord matching
//!
//! This crate decides whether an input event satisfies a requested chord,
//! resolves the platform command modifier, and renders chords for menus
//! and tooltips.

pub mod chord;
pub mod config;
pub mod config_paths;
pub mod tracing;

// Re-export commonly used types
pub use chord::{Chord, ChordDisplay, ChordError, ChordMatcher, ChordedEvent, Key, Modifier, MouseButton};
pub use config::ChordConfig;
