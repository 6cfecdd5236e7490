//! Command-line argument parsing for the keychord tool
//!
//! Supports:
//! - Rendering a chord string for a platform
//! - Checking a synthetic event against a chord
//! - Listing the effective bindings

use clap::{Args, Parser, Subcommand, ValueEnum};

use keychord::chord::ChordedEvent;
use keychord::config::PlatformSetting;

/// Inspect and test keyboard/mouse chords
#[derive(Parser, Debug)]
#[command(name = "keychord", version, about = "Inspect and test keyboard/mouse chords")]
pub struct CliArgs {
    /// Platform conventions to use (overrides config.yaml)
    #[arg(long, value_enum, global = true)]
    pub platform: Option<PlatformArg>,

    /// Separator between rendered tokens (overrides config.yaml)
    #[arg(long, global = true, value_name = "SYMBOL")]
    pub join: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Render a chord string like "CmdOrCtrl+Shift+S"
    Display {
        /// Chord string
        chord: String,
    },
    /// Check whether an event satisfies a chord
    Match {
        /// Chord string
        chord: String,

        #[command(flatten)]
        event: EventArgs,
    },
    /// List the effective bindings (defaults merged with user overrides)
    Bindings,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlatformArg {
    Auto,
    Mac,
    Other,
}

impl From<PlatformArg> for PlatformSetting {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Auto => PlatformSetting::Auto,
            PlatformArg::Mac => PlatformSetting::Mac,
            PlatformArg::Other => PlatformSetting::Other,
        }
    }
}

/// A synthetic event described on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct EventArgs {
    /// Key identifier, as `KeyboardEvent.key` would report it
    #[arg(long, conflicts_with = "button")]
    pub key: Option<String>,

    /// Physical key code, e.g. "KeyS"
    #[arg(long, requires = "key")]
    pub code: Option<String>,

    /// Native mouse `buttons` value (1 left, 2 right, 4 middle, 8 back, 16 forward)
    #[arg(long)]
    pub button: Option<u16>,

    #[arg(long)]
    pub alt: bool,

    #[arg(long)]
    pub ctrl: bool,

    #[arg(long)]
    pub meta: bool,

    #[arg(long)]
    pub shift: bool,
}

impl EventArgs {
    /// Build the event these arguments describe
    pub fn to_event(&self) -> ChordedEvent {
        let event = match (&self.key, self.button) {
            (Some(key), _) => {
                let event = ChordedEvent::keyboard(key.clone());
                match &self.code {
                    Some(code) => event.with_code(code.clone()),
                    None => event,
                }
            }
            (None, Some(buttons)) => ChordedEvent::mouse(buttons),
            (None, None) => ChordedEvent::modifiers_only(),
        };
        event.with_modifiers(self.alt, self.ctrl, self.meta, self.shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_display() {
        let args = CliArgs::try_parse_from(["keychord", "display", "Alt+C", "--platform", "mac"])
            .unwrap();
        assert_eq!(args.platform, Some(PlatformArg::Mac));
        assert!(matches!(args.command, CliCommand::Display { chord } if chord == "Alt+C"));
    }

    #[test]
    fn test_parse_match_event() {
        let args = CliArgs::try_parse_from([
            "keychord", "match", "Ctrl+S", "--key", "s", "--code", "KeyS", "--ctrl",
        ])
        .unwrap();

        let CliCommand::Match { event, .. } = args.command else {
            panic!("expected match subcommand");
        };
        let event = event.to_event();
        assert_eq!(event.key(), Some("s"));
        assert_eq!(event.code(), Some("KeyS"));
        assert!(event.ctrl_key);
        assert!(!event.alt_key);
    }

    #[test]
    fn test_mouse_event() {
        let args = EventArgs {
            button: Some(1),
            alt: true,
            ..EventArgs::default()
        };
        let event = args.to_event();
        assert_eq!(event.buttons(), Some(1));
        assert!(event.alt_key);
    }

    #[test]
    fn test_key_conflicts_with_button() {
        let result = CliArgs::try_parse_from([
            "keychord", "match", "Ctrl+S", "--key", "s", "--button", "1",
        ]);
        assert!(result.is_err());
    }
}
