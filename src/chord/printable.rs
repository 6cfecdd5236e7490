//! Printable character classification

use super::event::ChordedEvent;

/// Returns true if the key identifier represents a printable character
///
/// A single non-control character counts, as do `Backspace` and `Delete`
/// since text inputs treat them as edits. Named keys (`Tab`, `ArrowUp`)
/// and composite strings (`Ctrl+a`) do not.
pub fn is_printable_char(key: &str) -> bool {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => !c.is_control(),
        _ => key == "Backspace" || key == "Delete",
    }
}

/// Returns true if a printable character key was pressed with no modifiers
///
/// Mouse events and modifier-only events are never printable.
pub fn is_printable_char_pressed(event: &ChordedEvent) -> bool {
    if event.any_modifier_down() {
        return false;
    }

    event.key().is_some_and(is_printable_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_and_digits() {
        assert!(is_printable_char("a"));
        assert!(is_printable_char("A"));
        assert!(is_printable_char("5"));
        assert!(is_printable_char(";"));
        assert!(is_printable_char(" "));
    }

    #[test]
    fn test_editing_keys() {
        assert!(is_printable_char("Backspace"));
        assert!(is_printable_char("Delete"));
    }

    #[test]
    fn test_non_printable() {
        assert!(!is_printable_char("Tab"));
        assert!(!is_printable_char("Ctrl+a"));
        assert!(!is_printable_char(""));
        assert!(!is_printable_char("\t"));
    }

    #[test]
    fn test_pressed() {
        assert!(is_printable_char_pressed(&ChordedEvent::keyboard("a")));
        assert!(is_printable_char_pressed(&ChordedEvent::keyboard("Delete")));
        assert!(!is_printable_char_pressed(&ChordedEvent::keyboard("Tab")));
        assert!(!is_printable_char_pressed(
            &ChordedEvent::keyboard("a").ctrl()
        ));
        assert!(!is_printable_char_pressed(&ChordedEvent::mouse(1)));
    }
}
