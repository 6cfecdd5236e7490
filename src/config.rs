//! Chord configuration persistence
//!
//! Stores user preferences in `~/.config/keychord/config.yaml`

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::chord::{
    ChordDisplay, ChordError, ChordMatcher, HostPlatform, PlatformQuery, DEFAULT_JOIN_SYMBOL,
};

/// Which platform's conventions to use for `CmdOrCtrl` and glyphs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlatformSetting {
    /// Detect from the running host
    #[default]
    Auto,
    Mac,
    Other,
}

impl PlatformQuery for PlatformSetting {
    fn is_mac_platform(&self) -> bool {
        match self {
            PlatformSetting::Auto => HostPlatform.is_mac_platform(),
            PlatformSetting::Mac => true,
            PlatformSetting::Other => false,
        }
    }
}

/// Chord configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChordConfig {
    /// Platform override (`auto`, `mac`, `other`)
    #[serde(default)]
    pub platform: PlatformSetting,

    /// Separator between tokens in rendered chords
    #[serde(default = "default_join_symbol")]
    pub join_symbol: String,
}

fn default_join_symbol() -> String {
    DEFAULT_JOIN_SYMBOL.to_string()
}

impl Default for ChordConfig {
    fn default() -> Self {
        Self {
            platform: PlatformSetting::default(),
            join_symbol: default_join_symbol(),
        }
    }
}

impl ChordConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::load_from(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("Failed to load config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self, ChordError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ChordError::IoError(e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse config from a YAML string
    pub fn parse(yaml: &str) -> Result<Self, ChordError> {
        serde_yaml::from_str(yaml).map_err(|e| ChordError::ParseError(e.to_string()))
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Matcher for the configured platform
    pub fn matcher(&self) -> ChordMatcher {
        ChordMatcher::new(self.platform)
    }

    /// Display renderer for the configured platform
    pub fn display(&self) -> ChordDisplay {
        ChordDisplay::new(self.platform)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ChordConfig::default();
        assert_eq!(config.platform, PlatformSetting::Auto);
        assert_eq!(config.join_symbol, " + ");
    }

    #[test]
    fn test_parse_partial() {
        let config = ChordConfig::parse("platform: mac\n").unwrap();
        assert_eq!(config.platform, PlatformSetting::Mac);
        assert_eq!(config.join_symbol, " + ");
        assert!(config.matcher().is_mac());
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            ChordConfig::parse("platform: amiga\n"),
            Err(ChordError::ParseError(_))
        ));
    }

    #[test]
    fn test_auto_follows_host() {
        assert_eq!(
            PlatformSetting::Auto.is_mac_platform(),
            cfg!(target_os = "macos")
        );
    }
}
