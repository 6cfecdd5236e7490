//! ChordBinding struct representing a mapping from a chord to a named action

use super::types::Chord;

/// A chord bound to an action name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChordBinding {
    /// The chord that triggers the action
    pub chord: Chord,
    /// Name of the action, resolved to a listener at dispatch time
    pub action: String,
}

impl ChordBinding {
    pub fn new(chord: impl Into<Chord>, action: impl Into<String>) -> Self {
        Self {
            chord: chord.into(),
            action: action.into(),
        }
    }

    /// Check if this binding is for the given action
    pub fn is_for(&self, action: &str) -> bool {
        self.action == action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::types::{Key, Modifier};

    #[test]
    fn test_new_binding() {
        let binding = ChordBinding::new(Modifier::CmdOrCtrl | Key::LetterS, "save");
        assert_eq!(binding.chord, Modifier::CmdOrCtrl | Key::LetterS);
        assert!(binding.is_for("save"));
        assert!(!binding.is_for("open"));
    }
}
