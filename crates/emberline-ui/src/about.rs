//! State and view model for the About settings surface.

use serde::{Deserialize, Serialize};

/// User-selected color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl From<&str> for ThemePreference {
    /// Parse a config-file theme value. Unknown values fall back to
    /// following the system theme.
    fn from(s: &str) -> Self {
        match s {
            "light" => ThemePreference::Light,
            "dark" => ThemePreference::Dark,
            _ => ThemePreference::System,
        }
    }
}

/// Current state of the Tor circuit, as reported by the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TorStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Everything the About surface's store knows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AboutState {
    /// Release identifier shown in the footer (e.g. "1.2.0").
    pub version_name: String,
    pub theme_preference: ThemePreference,
    /// Whether outgoing messages carry a proof-of-work stamp.
    pub pow_enabled: bool,
    pub pow_difficulty: u32,
    pub tor_status: TorStatus,
}

/// What the About screen actually renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutViewModel {
    pub app_version: String,
    pub theme: ThemePreference,
    pub pow_enabled: bool,
    pub pow_difficulty: u32,
    pub tor_status: TorStatus,
}

/// Project an About snapshot into its view model.
///
/// Pure and total: field selection and renaming only, a fresh view model
/// per call, nothing read beyond the argument.
pub fn project(state: &AboutState) -> AboutViewModel {
    AboutViewModel {
        app_version: state.version_name.clone(),
        theme: state.theme_preference,
        pow_enabled: state.pow_enabled,
        pow_difficulty: state.pow_difficulty,
        tor_status: state.tor_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_state() -> AboutState {
        AboutState {
            version_name: "1.2.0".into(),
            theme_preference: ThemePreference::Dark,
            pow_enabled: true,
            pow_difficulty: 12,
            tor_status: TorStatus::Connected,
        }
    }

    #[test]
    fn carries_all_fields_unchanged() {
        let vm = project(&sample_state());
        assert_eq!(vm.app_version, "1.2.0");
        assert_eq!(vm.theme, ThemePreference::Dark);
        assert!(vm.pow_enabled);
        assert_eq!(vm.pow_difficulty, 12);
        assert_eq!(vm.tor_status, TorStatus::Connected);
    }

    #[test]
    fn projection_is_deterministic() {
        let state = sample_state();
        assert_eq!(project(&state), project(&state));
    }

    #[test]
    fn projection_ignores_intervening_states() {
        let first = sample_state();
        let other = AboutState {
            version_name: "9.9.9".into(),
            ..AboutState::default()
        };

        let before = project(&first);
        let _ = project(&other);
        let after = project(&first);

        assert_eq!(before, after);
    }

    #[test]
    fn theme_parses_from_config_strings() {
        assert_eq!(ThemePreference::from("dark"), ThemePreference::Dark);
        assert_eq!(ThemePreference::from("light"), ThemePreference::Light);
        assert_eq!(ThemePreference::from("system"), ThemePreference::System);
        assert_eq!(ThemePreference::from("neon"), ThemePreference::System);
    }

    #[test]
    fn enums_serialize_lowercase() {
        let vm = project(&sample_state());
        let json = serde_json::to_string(&vm).unwrap();
        assert!(json.contains("\"dark\""));
        assert!(json.contains("\"connected\""));
    }
}
