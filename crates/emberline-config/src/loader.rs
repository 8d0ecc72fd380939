//! TOML config loading: read from path or platform default.

use emberline_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::schema::EmberlineConfig;
use crate::validation;

/// Get the platform-specific default config file path.
///
/// On macOS: `~/Library/Application Support/emberline/config.toml`
/// On Linux: `~/.config/emberline/config.toml`
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))?;
    Ok(config_dir.join("emberline").join("config.toml"))
}

/// Load config from a specific TOML file path.
///
/// Deserializes with serde defaults for any missing fields. After loading,
/// the config is validated; soft violations are logged and the parsed
/// config is returned as-is.
pub fn load_from_path(path: &Path) -> Result<EmberlineConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: EmberlineConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validation::validate(&config)?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform default path.
///
/// If the file does not exist, creates a commented default file and
/// returns defaults.
pub fn load_default() -> Result<EmberlineConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(EmberlineConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Write a default TOML config file with documentation comments.
pub fn create_default_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::ParseError(format!(
                "failed to create config directory {}: {e}",
                parent.display()
            ))
        })?;
    }

    std::fs::write(path, default_config_toml()).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to write default config to {}: {e}",
            path.display()
        ))
    })?;

    info!("created default config at {}", path.display());
    Ok(())
}

fn default_config_toml() -> &'static str {
    r#"# Emberline configuration.
# Every option has a default; only override what you want to change.

[profile]
# Nickname shown to nearby peers.
nickname = "anon"

[appearance]
# "light", "dark", or "system".
theme = "system"

[privacy]
# Stamp outgoing messages with proof-of-work.
pow_enabled = false
pow_difficulty = 8

[tor]
enabled = true

[notifications]
network_alerts_enabled = true
# Minimum seconds between two network-activity alerts.
min_interval_secs = 30
"#
}
