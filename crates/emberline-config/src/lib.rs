//! Emberline configuration system.
//!
//! TOML-based configuration with serde defaults per section, so partial
//! configs work out of the box. A default file is created on first run.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{default_config_path, load_from_path};
pub use schema::{EmberlineConfig, CONFIG_SCHEMA_VERSION};

use emberline_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creating a default
/// if none exists. The result is already validated.
pub fn load_config() -> Result<EmberlineConfig, ConfigError> {
    loader::load_default()
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &EmberlineConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
