//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use keychord::chord::{ChordDisplay, ChordMatcher, ChordedEvent, MouseButton, Platform};

/// Matcher resolved for macOS
pub fn mac_matcher() -> ChordMatcher {
    ChordMatcher::new(Platform::Mac)
}

/// Matcher resolved for every other platform
pub fn other_matcher() -> ChordMatcher {
    ChordMatcher::new(Platform::Other)
}

pub fn mac_display() -> ChordDisplay {
    ChordDisplay::new(Platform::Mac)
}

pub fn other_display() -> ChordDisplay {
    ChordDisplay::new(Platform::Other)
}

/// Both matchers, for properties that hold on every platform
pub fn all_matchers() -> [ChordMatcher; 2] {
    [mac_matcher(), other_matcher()]
}

/// Keyboard event with the given modifier flags
pub fn key_event(key: &str, alt: bool, ctrl: bool, meta: bool, shift: bool) -> ChordedEvent {
    ChordedEvent::keyboard(key).with_modifiers(alt, ctrl, meta, shift)
}

/// Mouse event for a single pressed button
pub fn click(button: MouseButton) -> ChordedEvent {
    ChordedEvent::mouse(button.native())
}

/// Every combination of the four modifier flags, as `(alt, ctrl, meta, shift)`
pub fn modifier_combinations() -> Vec<(bool, bool, bool, bool)> {
    (0u8..16)
        .map(|bits| (bits & 1 != 0, bits & 2 != 0, bits & 4 != 0, bits & 8 != 0))
        .collect()
}
