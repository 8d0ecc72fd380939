//! Config validation: hard errors for values that would misbehave,
//! logged warnings for values that are merely suspicious.

use emberline_common::ConfigError;
use tracing::warn;

use crate::schema::EmberlineConfig;

const MAX_POW_DIFFICULTY: u32 = 30;
const MAX_NICKNAME_LEN: usize = 32;
/// One day; anything longer silences network alerts for good.
const MAX_ALERT_INTERVAL_SECS: u64 = 86_400;

pub fn validate(config: &EmberlineConfig) -> Result<(), ConfigError> {
    if config.privacy.pow_difficulty > MAX_POW_DIFFICULTY {
        return Err(ConfigError::ValidationError(format!(
            "privacy.pow_difficulty must be <= {MAX_POW_DIFFICULTY}, got {}",
            config.privacy.pow_difficulty
        )));
    }

    match config.appearance.theme.as_str() {
        "light" | "dark" | "system" => {}
        other => {
            warn!("unknown appearance.theme '{other}', falling back to system");
        }
    }

    if config.profile.nickname.is_empty() {
        warn!("profile.nickname is empty; peers will see a blank name");
    } else if config.profile.nickname.len() > MAX_NICKNAME_LEN {
        warn!(
            "profile.nickname is {} chars; peers may truncate it",
            config.profile.nickname.len()
        );
    }

    if config.notifications.min_interval_secs == 0 {
        warn!("notifications.min_interval_secs is 0; alerts will not be throttled");
    } else if config.notifications.min_interval_secs > MAX_ALERT_INTERVAL_SECS {
        warn!(
            "notifications.min_interval_secs is {}; anything above {MAX_ALERT_INTERVAL_SECS} \
             effectively disables alerts after the first",
            config.notifications.min_interval_secs
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(validate(&EmberlineConfig::default()).is_ok());
    }

    #[test]
    fn excessive_pow_difficulty_is_rejected() {
        let mut config = EmberlineConfig::default();
        config.privacy.pow_difficulty = 31;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("pow_difficulty"));
    }

    #[test]
    fn boundary_pow_difficulty_is_accepted() {
        let mut config = EmberlineConfig::default();
        config.privacy.pow_difficulty = 30;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn unknown_theme_is_soft_warning() {
        let mut config = EmberlineConfig::default();
        config.appearance.theme = "neon".into();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn zero_interval_is_soft_warning() {
        let mut config = EmberlineConfig::default();
        config.notifications.min_interval_secs = 0;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn oversized_interval_is_soft_warning() {
        let mut config = EmberlineConfig::default();
        config.notifications.min_interval_secs = 10_000_000_000_000_000;
        assert!(validate(&config).is_ok());
    }
}
