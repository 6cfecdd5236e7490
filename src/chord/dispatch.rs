//! Named-action dispatch: bindings resolved to listeners by action name

use std::collections::HashMap;

use super::binding::ChordBinding;
use super::config::ChordError;
use super::display::ChordDisplay;
use super::event::ChordedEvent;
use super::matcher::ChordMatcher;

/// Listener invoked when a bound chord fires
pub type ActionListener<'a> = Box<dyn FnMut(&ChordedEvent) + 'a>;

/// Routes events to listeners through a list of chord bindings
///
/// Bindings are checked in order and only the first match fires, so an
/// earlier, more specific binding shadows a later one for the same chord.
pub struct ChordDispatcher<'a> {
    matcher: ChordMatcher,
    bindings: Vec<ChordBinding>,
    listeners: HashMap<String, ActionListener<'a>>,
}

impl<'a> ChordDispatcher<'a> {
    /// Build a dispatcher. Every bound action must have a listener.
    pub fn new(
        matcher: ChordMatcher,
        bindings: Vec<ChordBinding>,
        listeners: HashMap<String, ActionListener<'a>>,
    ) -> Result<Self, ChordError> {
        if let Some(missing) = bindings
            .iter()
            .find(|binding| !listeners.contains_key(&binding.action))
        {
            tracing::error!(action = %missing.action, "Binding has no listener");
            return Err(ChordError::MissingListener(missing.action.clone()));
        }

        tracing::debug!(
            bindings = bindings.len(),
            listeners = listeners.len(),
            "Created chord dispatcher"
        );

        Ok(Self {
            matcher,
            bindings,
            listeners,
        })
    }

    /// Fire the listener of the first binding the event satisfies. Returns
    /// the action name.
    pub fn dispatch(&mut self, event: &ChordedEvent) -> Option<&str> {
        let binding = self
            .bindings
            .iter()
            .find(|binding| self.matcher.chord_satisfied(event, binding.chord))?;

        let listener = self.listeners.get_mut(&binding.action)?;
        tracing::trace!(action = %binding.action, "Dispatching chord");
        listener(event);

        Some(binding.action.as_str())
    }

    /// Display strings for every chord bound to `action`, in binding order
    ///
    /// Chords that cannot be rendered are skipped.
    pub fn display_for(
        &self,
        action: &str,
        display: &ChordDisplay,
        join_symbol: &str,
    ) -> Vec<String> {
        self.bindings
            .iter()
            .filter(|binding| binding.is_for(action))
            .filter_map(|binding| display.display_chord(binding.chord, join_symbol).ok())
            .collect()
    }

    pub fn bindings(&self) -> &[ChordBinding] {
        &self.bindings
    }

    pub fn matcher(&self) -> &ChordMatcher {
        &self.matcher
    }
}

impl std::fmt::Debug for ChordDispatcher<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChordDispatcher")
            .field("matcher", &self.matcher)
            .field("bindings", &self.bindings)
            .field("listeners", &self.listeners.keys().collect::<Vec<_>>())
            .finish()
    }
}
