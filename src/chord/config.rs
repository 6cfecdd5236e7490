//! Chord string parsing and YAML binding lists
//!
//! Parses strings like `"CmdOrCtrl+Shift+S"` into chords and binding
//! entries into [`ChordBinding`]s.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use super::binding::ChordBinding;
use super::event::normalize_event_key;
use super::platform::{Platform, PlatformQuery};
use super::types::{Chord, Key, Modifier, MouseButton};

/// Root structure of a bindings YAML file
#[derive(Debug, Default, Deserialize)]
pub struct BindingsConfig {
    #[serde(default)]
    pub bindings: Vec<BindingConfig>,
}

/// A single binding entry from YAML
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BindingConfig {
    pub chord: String,
    pub action: String,
    #[serde(default)]
    pub platform: Option<Platform>,
}

/// Load bindings from a YAML file
pub fn load_bindings_file(
    path: &Path,
    platform: impl PlatformQuery,
) -> Result<Vec<ChordBinding>, ChordError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ChordError::IoError(e.to_string()))?;

    parse_bindings_yaml(&content, platform)
}

/// Parse bindings from a YAML string
pub fn parse_bindings_yaml(
    yaml: &str,
    platform: impl PlatformQuery,
) -> Result<Vec<ChordBinding>, ChordError> {
    let config: BindingsConfig =
        serde_yaml::from_str(yaml).map_err(|e| ChordError::ParseError(e.to_string()))?;

    parse_bindings(&config.bindings, platform)
}

/// Turn binding entries into bindings, skipping entries meant for another
/// platform
pub fn parse_bindings(
    entries: &[BindingConfig],
    platform: impl PlatformQuery,
) -> Result<Vec<ChordBinding>, ChordError> {
    let is_mac = platform.is_mac_platform();
    let mut bindings = Vec::with_capacity(entries.len());

    for entry in entries {
        if let Some(only) = entry.platform {
            if only.is_mac_platform() != is_mac {
                tracing::debug!(action = %entry.action, "Skipping binding for other platform");
                continue;
            }
        }

        let chord = parse_chord(&entry.chord)?;
        bindings.push(ChordBinding::new(chord, entry.action.clone()));
    }

    Ok(bindings)
}

/// Parse a chord string like `"CmdOrCtrl+Shift+S"` or `"Alt+Left Click"`
///
/// Names are case-insensitive. At most one key is allowed.
pub fn parse_chord(chord_str: &str) -> Result<Chord, ChordError> {
    if chord_str.trim().is_empty() {
        return Err(ChordError::InvalidChord("Empty chord".to_string()));
    }

    let mut chord = Chord::EMPTY;
    let mut key_part: Option<Key> = None;

    for part in chord_str.split('+') {
        let part = part.trim();
        if part.is_empty() {
            return Err(ChordError::InvalidChord(format!(
                "Empty segment in chord: {}",
                chord_str
            )));
        }

        if let Some(modifier) = parse_modifier(part) {
            chord = chord | modifier;
            continue;
        }

        if let Some(button) = parse_mouse_button(part) {
            chord = chord | button;
            continue;
        }

        let key = parse_key(part)
            .ok_or_else(|| ChordError::InvalidChord(format!("Unknown key: {}", part)))?;
        if key_part.is_some() {
            return Err(ChordError::InvalidChord(format!(
                "Multiple keys in chord: {}",
                chord_str
            )));
        }
        key_part = Some(key);
    }

    Ok(match key_part {
        Some(key) => chord | key,
        None => chord,
    })
}

fn parse_modifier(part: &str) -> Option<Modifier> {
    match part.to_lowercase().as_str() {
        "cmdorctrl" | "commandorcontrol" | "mod" => Some(Modifier::CmdOrCtrl),
        "cmd" | "command" | "meta" | "super" | "win" => Some(Modifier::Cmd),
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        _ => None,
    }
}

fn parse_mouse_button(part: &str) -> Option<MouseButton> {
    let compact: String = part
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect::<String>()
        .to_lowercase();

    match compact.as_str() {
        "leftclick" | "mouseleft" => Some(MouseButton::Left),
        "rightclick" | "mouseright" => Some(MouseButton::Right),
        "middleclick" | "auxiliaryclick" | "mousemiddle" => Some(MouseButton::Auxiliary),
        "backclick" | "mouseback" => Some(MouseButton::BrowserBack),
        "forwardclick" | "mouseforward" => Some(MouseButton::BrowserForward),
        _ => None,
    }
}

fn parse_key(part: &str) -> Option<Key> {
    let exact = Key::from_event_key(&normalize_event_key(part)).or_else(|| Key::from_code(part));
    if exact.is_some() {
        return exact;
    }

    let alias = match part.to_lowercase().as_str() {
        "esc" => Some(Key::Escape),
        "return" => Some(Key::Enter),
        "space" => Some(Key::Space),
        "del" => Some(Key::Delete),
        "ins" => Some(Key::Insert),
        "up" => Some(Key::ArrowUp),
        "down" => Some(Key::ArrowDown),
        "left" => Some(Key::ArrowLeft),
        "right" => Some(Key::ArrowRight),
        "pgup" => Some(Key::PageUp),
        "pgdn" | "pgdown" => Some(Key::PageDown),
        "plus" | "equals" => Some(Key::Equal),
        "slash" => Some(Key::ForwardSlash),
        _ => None,
    };
    if alias.is_some() {
        return alias;
    }

    Key::ALL.iter().copied().find(|key| {
        key.event_key().eq_ignore_ascii_case(part)
            || key.code().eq_ignore_ascii_case(part)
            || format!("{:?}", key).eq_ignore_ascii_case(part)
    })
}

impl FromStr for Chord {
    type Err = ChordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_chord(s)
    }
}

/// Errors that can occur when parsing, rendering, or dispatching chords
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChordError {
    IoError(String),
    ParseError(String),
    InvalidChord(String),
    UnknownToken(u32),
    MissingListener(String),
}

impl std::fmt::Display for ChordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChordError::IoError(e) => write!(f, "IO error: {}", e),
            ChordError::ParseError(e) => write!(f, "Parse error: {}", e),
            ChordError::InvalidChord(c) => write!(f, "Invalid chord: {}", c),
            ChordError::UnknownToken(bits) => write!(f, "Unknown token: {:#x}", bits),
            ChordError::MissingListener(a) => {
                write!(f, "No listener registered for action: {}", a)
            }
        }
    }
}

impl std::error::Error for ChordError {}
