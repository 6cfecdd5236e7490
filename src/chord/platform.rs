//! Platform query used to resolve `CmdOrCtrl` and modifier glyphs

use std::sync::OnceLock;

use serde::Deserialize;

/// Answers "is this the mac platform?". Resolved once by whoever builds a
/// matcher or display, never consulted per event.
pub trait PlatformQuery {
    fn is_mac_platform(&self) -> bool;
}

/// Explicit platform, for tests and config overrides
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Mac,
    Other,
}

impl Platform {
    /// The platform this process is running on
    pub fn current() -> Platform {
        if HostPlatform.is_mac_platform() {
            Platform::Mac
        } else {
            Platform::Other
        }
    }
}

impl PlatformQuery for Platform {
    fn is_mac_platform(&self) -> bool {
        matches!(self, Platform::Mac)
    }
}

/// The compile target's platform, cached for the process lifetime
#[derive(Clone, Copy, Debug, Default)]
pub struct HostPlatform;

static HOST_IS_MAC: OnceLock<bool> = OnceLock::new();

impl PlatformQuery for HostPlatform {
    fn is_mac_platform(&self) -> bool {
        *HOST_IS_MAC.get_or_init(|| {
            let is_mac = cfg!(target_os = "macos");
            tracing::debug!(is_mac, "Resolved host platform");
            is_mac
        })
    }
}

impl<P: PlatformQuery + ?Sized> PlatformQuery for &P {
    fn is_mac_platform(&self) -> bool {
        (**self).is_mac_platform()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_platform() {
        assert!(Platform::Mac.is_mac_platform());
        assert!(!Platform::Other.is_mac_platform());
    }

    #[test]
    fn test_host_matches_target() {
        assert_eq!(HostPlatform.is_mac_platform(), cfg!(target_os = "macos"));
        assert_eq!(
            Platform::current() == Platform::Mac,
            cfg!(target_os = "macos")
        );
    }

    #[test]
    fn test_platform_deserializes_snake_case() {
        let p: Platform = serde_yaml::from_str("mac").unwrap();
        assert_eq!(p, Platform::Mac);
        let p: Platform = serde_yaml::from_str("other").unwrap();
        assert_eq!(p, Platform::Other);
    }
}
