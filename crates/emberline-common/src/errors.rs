use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum EmberlineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("state error: {0}")]
    State(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("pow_difficulty out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: pow_difficulty out of range"
        );
    }

    #[test]
    fn emberline_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: EmberlineError = config_err.into();
        assert!(matches!(err, EmberlineError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn emberline_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: EmberlineError = io_err.into();
        assert!(matches!(err, EmberlineError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn emberline_error_other_variants() {
        let err = EmberlineError::State("store gone".into());
        assert_eq!(err.to_string(), "state error: store gone");

        let err = EmberlineError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
