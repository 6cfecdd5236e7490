//! Decides whether an event satisfies a requested chord
//!
//! Matching works on a "remaining requirement": a copy of the chord that
//! each phase strips satisfied tokens from. A phase either returns the new
//! remainder or `None` when the chord can no longer match.
//!
//! ```text
//! mouse buttons → CmdOrCtrl → Alt/Ctrl/Cmd/Shift → key
//! ```
//!
//! Modifiers match exactly: an event holding a modifier the chord did not
//! ask for never matches.

use super::event::ChordedEvent;
use super::handler::ChordInput;
use super::platform::{HostPlatform, PlatformQuery};
use super::types::{Chord, Key, Modifier, MouseButton, KEY_MASK};

/// Matches events against chords for one resolved platform
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChordMatcher {
    is_mac: bool,
}

impl ChordMatcher {
    /// Build a matcher, resolving the platform query once
    pub fn new(platform: impl PlatformQuery) -> Self {
        Self {
            is_mac: platform.is_mac_platform(),
        }
    }

    /// Matcher for the platform this process runs on
    pub fn host() -> Self {
        Self::new(HostPlatform)
    }

    pub fn is_mac(&self) -> bool {
        self.is_mac
    }

    /// True if the event satisfies any of the given chords
    pub fn is_chord_pressed(&self, event: &ChordedEvent, chords: impl Into<ChordInput>) -> bool {
        match chords.into() {
            ChordInput::Single(chord) => self.chord_satisfied(event, chord),
            ChordInput::List(list) => self.any_satisfied(event, &list),
        }
    }

    /// True if any alternative is satisfied. Alternatives are evaluated
    /// independently; the first match wins.
    pub fn any_satisfied(&self, event: &ChordedEvent, chords: &[Chord]) -> bool {
        chords
            .iter()
            .any(|&chord| self.chord_satisfied(event, chord))
    }

    /// True if the event satisfies this single chord
    pub fn chord_satisfied(&self, event: &ChordedEvent, chord: Chord) -> bool {
        let remaining = match event.buttons() {
            Some(buttons) => {
                let remaining = strip_mouse_button(chord, buttons);
                // Pure click, nothing else requested or held
                if remaining.is_empty() && !event.any_modifier_down() {
                    return true;
                }
                remaining
            }
            None => chord,
        };

        let Some(remaining) = self.resolve_cmd_or_ctrl(event, chord, remaining) else {
            tracing::trace!(chord = chord.bits(), "platform command modifier not held");
            return false;
        };

        let Some(remaining) = strip_modifiers(event, chord, remaining) else {
            tracing::trace!(chord = chord.bits(), "unrequested modifier held");
            return false;
        };

        key_matches(event, remaining)
    }

    /// Resolve a requested `CmdOrCtrl` against the platform. Clears the bit
    /// of the modifier that does not apply here; the per-modifier phase then
    /// clears the one that does.
    fn resolve_cmd_or_ctrl(
        &self,
        event: &ChordedEvent,
        chord: Chord,
        remaining: Chord,
    ) -> Option<Chord> {
        if !chord.contains(Modifier::CmdOrCtrl.into()) {
            return Some(remaining);
        }

        if self.is_mac {
            event
                .meta_key
                .then(|| remaining.remove(Modifier::Ctrl.into()))
        } else {
            event
                .ctrl_key
                .then(|| remaining.remove(Modifier::Cmd.into()))
        }
    }
}

/// Clear the event's active button from the chord, if the chord asks for it
fn strip_mouse_button(chord: Chord, buttons: u16) -> Chord {
    match MouseButton::from_native(buttons) {
        Some(button) => chord.remove(button.into()),
        None => chord,
    }
}

/// Check Alt, Ctrl, Cmd and Shift independently against the original chord
fn strip_modifiers(event: &ChordedEvent, chord: Chord, remaining: Chord) -> Option<Chord> {
    let mut remaining = remaining;
    for modifier in Modifier::PHYSICAL {
        let requested = chord.contains(modifier.into());
        if event.modifier_down(modifier) {
            if !requested {
                return None;
            }
            remaining = remaining.remove(modifier.into());
        }
    }
    Some(remaining)
}

/// Final phase: nothing left, or exactly one key that the event pressed
fn key_matches(event: &ChordedEvent, remaining: Chord) -> bool {
    if remaining.is_empty() {
        return true;
    }

    if remaining.bits() & !KEY_MASK != 0 {
        return false;
    }

    let Some(key) = Key::from_index(remaining.bits()) else {
        return false;
    };

    // The physical code only stands in when the event key names no known key
    event.key_token() == Some(key)
}

/// Whether a single modifier is held. `CmdOrCtrl` is held if either is.
pub fn is_modifier_pressed(event: &ChordedEvent, modifier: Modifier) -> bool {
    event.modifier_down(modifier)
}
