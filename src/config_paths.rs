//! Centralized configuration paths for keychord
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/keychord/`
//! - Windows: `%APPDATA%\keychord\`

use std::{env, path::PathBuf};

const APP_DIR: &str = "keychord";

/// Base config directory for keychord
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/keychord`
///   - Else: `~/.config/keychord`
///
/// Windows:
///   - `%APPDATA%\keychord`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/keychord/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/keychord/bindings.yaml`
pub fn bindings_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("bindings.yaml"))
}
