//! Listener dispatch built on the matcher
//!
//! Three ways to react to an event:
//!
//! ```ignore
//! // One chord (or several alternatives) and a listener
//! matcher.handle_chords(&event, Modifier::Alt | Key::LetterC, |_| copy());
//!
//! // Builder with several registrations
//! matcher.handle_with(&event, |handler| {
//!     handler
//!         .on(Modifier::Alt | Key::LetterC, |_| copy())
//!         .on(vec![Key::Escape.into(), Key::LetterQ.into()], |_| close())
//!         .when(is_printable_char_pressed, |_| insert());
//! });
//!
//! // Chord → callback map, first match wins
//! let mut map = ChordMap::new()
//!     .bind(Modifier::CmdOrCtrl | Key::LetterS, |_| save())
//!     .bind(Modifier::CmdOrCtrl | Key::LetterO, |_| open());
//! matcher.handle_map(&event, &mut map);
//! ```

use super::event::ChordedEvent;
use super::matcher::ChordMatcher;
use super::types::{Chord, Key, Modifier, MouseButton};

/// One chord, or a list of alternatives where any may match
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChordInput {
    Single(Chord),
    List(Vec<Chord>),
}

impl From<Chord> for ChordInput {
    fn from(chord: Chord) -> Self {
        ChordInput::Single(chord)
    }
}

impl From<Key> for ChordInput {
    fn from(key: Key) -> Self {
        ChordInput::Single(key.into())
    }
}

impl From<Modifier> for ChordInput {
    fn from(modifier: Modifier) -> Self {
        ChordInput::Single(modifier.into())
    }
}

impl From<MouseButton> for ChordInput {
    fn from(button: MouseButton) -> Self {
        ChordInput::Single(button.into())
    }
}

impl From<Vec<Chord>> for ChordInput {
    fn from(chords: Vec<Chord>) -> Self {
        ChordInput::List(chords)
    }
}

impl From<&[Chord]> for ChordInput {
    fn from(chords: &[Chord]) -> Self {
        ChordInput::List(chords.to_vec())
    }
}

impl<const N: usize> From<[Chord; N]> for ChordInput {
    fn from(chords: [Chord; N]) -> Self {
        ChordInput::List(chords.to_vec())
    }
}

/// Condition accepted by [`ChordHandler::when`]: a plain `bool`, or a
/// predicate evaluated against the event
pub trait WhenCondition {
    fn holds(self, event: &ChordedEvent) -> bool;
}

impl WhenCondition for bool {
    fn holds(self, _event: &ChordedEvent) -> bool {
        self
    }
}

impl<F> WhenCondition for F
where
    F: FnOnce(&ChordedEvent) -> bool,
{
    fn holds(self, event: &ChordedEvent) -> bool {
        self(event)
    }
}

/// Fluent registration object handed to [`ChordMatcher::handle_with`]
pub struct ChordHandler<'a> {
    matcher: &'a ChordMatcher,
    event: &'a ChordedEvent,
    fired: usize,
}

impl<'a> ChordHandler<'a> {
    /// Fire `listener` if the event satisfies `chords`
    pub fn on<F>(&mut self, chords: impl Into<ChordInput>, listener: F) -> &mut Self
    where
        F: FnOnce(&ChordedEvent),
    {
        if self.matcher.is_chord_pressed(self.event, chords) {
            self.fired += 1;
            listener(self.event);
        }
        self
    }

    /// Fire `listener` if `condition` holds for the event
    pub fn when<C, F>(&mut self, condition: C, listener: F) -> &mut Self
    where
        C: WhenCondition,
        F: FnOnce(&ChordedEvent),
    {
        if condition.holds(self.event) {
            self.fired += 1;
            listener(self.event);
        }
        self
    }
}

type MapListener<'a> = Box<dyn FnMut(&ChordedEvent) + 'a>;

/// Ordered chord → callback map. Only the first matching entry fires.
#[derive(Default)]
pub struct ChordMap<'a> {
    entries: Vec<(Chord, MapListener<'a>)>,
}

impl<'a> ChordMap<'a> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an entry (builder pattern)
    pub fn bind<F>(mut self, chord: impl Into<Chord>, listener: F) -> Self
    where
        F: FnMut(&ChordedEvent) + 'a,
    {
        self.insert(chord, listener);
        self
    }

    pub fn insert<F>(&mut self, chord: impl Into<Chord>, listener: F)
    where
        F: FnMut(&ChordedEvent) + 'a,
    {
        self.entries.push((chord.into(), Box::new(listener)));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fire the first entry the event satisfies. Returns its chord.
    pub fn dispatch(&mut self, matcher: &ChordMatcher, event: &ChordedEvent) -> Option<Chord> {
        let (chord, listener) = self
            .entries
            .iter_mut()
            .find(|(chord, _)| matcher.chord_satisfied(event, *chord))?;
        listener(event);
        Some(*chord)
    }
}

impl std::fmt::Debug for ChordMap<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(chord, _)| chord.bits()))
            .finish()
    }
}

impl ChordMatcher {
    /// Fire `listener` if the event satisfies `chords`. Returns whether it fired.
    pub fn handle_chords<F>(
        &self,
        event: &ChordedEvent,
        chords: impl Into<ChordInput>,
        listener: F,
    ) -> bool
    where
        F: FnOnce(&ChordedEvent),
    {
        let pressed = self.is_chord_pressed(event, chords);
        if pressed {
            listener(event);
        }
        pressed
    }

    /// Run `builder` against a [`ChordHandler`] for this event. Returns the
    /// number of listeners that fired.
    pub fn handle_with<B>(&self, event: &ChordedEvent, builder: B) -> usize
    where
        B: FnOnce(&mut ChordHandler<'_>),
    {
        let mut handler = ChordHandler {
            matcher: self,
            event,
            fired: 0,
        };
        builder(&mut handler);
        handler.fired
    }

    /// Fire the first matching entry of `map`
    pub fn handle_map(&self, event: &ChordedEvent, map: &mut ChordMap<'_>) -> Option<Chord> {
        map.dispatch(self, event)
    }
}
