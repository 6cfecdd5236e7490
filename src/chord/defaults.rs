//! Default chord bindings
//!
//! Loading order (each layer overrides the previous):
//! 1. Embedded `bindings.yaml` (compiled into the binary)
//! 2. User bindings at `~/.config/keychord/bindings.yaml`

use std::path::Path;

use super::binding::ChordBinding;
use super::config::{load_bindings_file, parse_bindings_yaml};
use super::platform::PlatformQuery;
use super::types::{Key, Modifier};

/// Default bindings YAML embedded at compile time
const DEFAULT_BINDINGS_YAML: &str = include_str!("../../bindings.yaml");

/// Action name that removes a chord instead of binding it
pub const UNBOUND_ACTION: &str = "unbound";

/// Get the embedded default bindings YAML
pub fn get_default_bindings_yaml() -> &'static str {
    DEFAULT_BINDINGS_YAML
}

/// Load the embedded defaults merged with the user's bindings file
pub fn load_default_bindings(platform: impl PlatformQuery) -> Vec<ChordBinding> {
    let user_path = crate::config_paths::bindings_file();
    load_bindings_layered(&platform, user_path.as_deref())
}

/// Load the embedded defaults merged with an optional overrides file
///
/// A missing or broken overrides file is logged and skipped.
pub fn load_bindings_layered(
    platform: impl PlatformQuery,
    user_path: Option<&Path>,
) -> Vec<ChordBinding> {
    let mut bindings = match parse_bindings_yaml(DEFAULT_BINDINGS_YAML, &platform) {
        Ok(b) => {
            tracing::info!("Loaded embedded default bindings ({} bindings)", b.len());
            b
        }
        Err(e) => {
            tracing::warn!(
                "Failed to parse embedded bindings: {}, using hardcoded defaults",
                e
            );
            default_bindings()
        }
    };

    if let Some(user_path) = user_path {
        if user_path.exists() {
            match load_bindings_file(user_path, &platform) {
                Ok(user_bindings) => {
                    tracing::info!(
                        "Merging user bindings from {} ({} bindings)",
                        user_path.display(),
                        user_bindings.len()
                    );
                    bindings = merge_bindings(bindings, user_bindings);
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to load user bindings from {}: {}",
                        user_path.display(),
                        e
                    );
                }
            }
        }
    }

    bindings
}

/// Merge user bindings into base bindings
///
/// - Same chord as a base binding → replaces it
/// - Action `unbound` → removes base bindings with that chord
/// - Otherwise → appended
pub fn merge_bindings(base: Vec<ChordBinding>, user: Vec<ChordBinding>) -> Vec<ChordBinding> {
    let mut result = base;

    for user_binding in user {
        if user_binding.is_for(UNBOUND_ACTION) {
            result.retain(|b| b.chord != user_binding.chord);
            continue;
        }

        match result.iter().position(|b| b.chord == user_binding.chord) {
            Some(idx) => result[idx] = user_binding,
            None => result.push(user_binding),
        }
    }

    result
}

/// Minimal bindings used when the embedded file fails to parse
pub fn default_bindings() -> Vec<ChordBinding> {
    let cmd = Modifier::CmdOrCtrl;

    vec![
        ChordBinding::new(cmd | Key::LetterS, "save"),
        ChordBinding::new(cmd | Key::LetterO, "open"),
        ChordBinding::new(cmd | Key::LetterZ, "undo"),
        ChordBinding::new(cmd | Modifier::Shift | Key::LetterZ, "redo"),
        ChordBinding::new(cmd | Key::LetterC, "copy"),
        ChordBinding::new(cmd | Key::LetterX, "cut"),
        ChordBinding::new(cmd | Key::LetterV, "paste"),
        ChordBinding::new(cmd | Key::LetterQ, "quit"),
        ChordBinding::new(Key::Escape, "dismiss"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chord::platform::Platform;
    use crate::chord::types::MouseButton;

    #[test]
    fn test_embedded_bindings_parse() {
        let other = parse_bindings_yaml(DEFAULT_BINDINGS_YAML, Platform::Other).unwrap();
        let mac = parse_bindings_yaml(DEFAULT_BINDINGS_YAML, Platform::Mac).unwrap();

        assert!(other.iter().any(|b| b.is_for("redo") && b.chord == Modifier::Ctrl | Key::LetterY));
        assert!(!other.iter().any(|b| b.is_for("hide")));
        assert!(mac.iter().any(|b| b.is_for("hide")));
        assert!(mac
            .iter()
            .any(|b| b.is_for("add_cursor") && b.chord == Modifier::Alt | MouseButton::Left));
    }

    #[test]
    fn test_merge_replaces_same_chord() {
        let base = vec![ChordBinding::new(Modifier::CmdOrCtrl | Key::LetterS, "save")];
        let user = vec![ChordBinding::new(Modifier::CmdOrCtrl | Key::LetterS, "save_all")];

        let merged = merge_bindings(base, user);
        assert_eq!(merged.len(), 1);
        assert!(merged[0].is_for("save_all"));
    }

    #[test]
    fn test_merge_unbound_removes() {
        let base = default_bindings();
        let count = base.len();
        let user = vec![ChordBinding::new(Key::Escape, UNBOUND_ACTION)];

        let merged = merge_bindings(base, user);
        assert_eq!(merged.len(), count - 1);
        assert!(!merged.iter().any(|b| b.is_for("dismiss")));
    }

    #[test]
    fn test_merge_appends_new() {
        let base = default_bindings();
        let count = base.len();
        let user = vec![ChordBinding::new(Key::F5, "reload")];

        let merged = merge_bindings(base, user);
        assert_eq!(merged.len(), count + 1);
        assert!(merged[count].is_for("reload"));
    }

    #[test]
    fn test_layered_without_user_file() {
        let bindings = load_bindings_layered(Platform::Other, None);
        assert!(bindings.iter().any(|b| b.is_for("save")));
    }
}
