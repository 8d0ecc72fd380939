//! Configuration schema types for Emberline.
//!
//! All structs use `serde(default)` so partial configs work correctly.

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Emberline.
///
/// Every option has a sensible default; only override what you want to
/// change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct EmberlineConfig {
    pub profile: ProfileConfig,
    pub appearance: AppearanceConfig,
    pub privacy: PrivacyConfig,
    pub tor: TorConfig,
    pub notifications: NotificationsConfig,
}

/// Who the local user appears as on the mesh.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub nickname: String,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            nickname: "anon".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// "light", "dark", or "system".
    pub theme: String,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: "system".into(),
        }
    }
}

/// Proof-of-work stamping on outgoing messages.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacyConfig {
    pub pow_enabled: bool,
    /// Leading zero bits required of the stamp. Values above 30 are
    /// rejected at validation.
    pub pow_difficulty: u32,
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            pow_enabled: false,
            pow_difficulty: 8,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TorConfig {
    pub enabled: bool,
}

impl Default for TorConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Throttling for network-activity alerts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationsConfig {
    pub network_alerts_enabled: bool,
    /// Minimum seconds between two network alerts.
    pub min_interval_secs: u64,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            network_alerts_enabled: true,
            min_interval_secs: 30,
        }
    }
}
