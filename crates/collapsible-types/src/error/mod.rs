//! Typed error definitions for Collapsible.
//!
//! Panel operations themselves never fail. Errors only come from reading or
//! validating configuration, and callers are expected to fall back to
//! defaults rather than surface them.

mod config;

pub use config::ConfigError;

/// Standard Result type using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let err = ConfigError::UnknownOverflow { value: "clip".to_string() };

        let json = serde_json::to_string(&err).unwrap();
        assert!(json.contains("UnknownOverflow"));
        assert!(json.contains("clip"));

        let deserialized: ConfigError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, deserialized);
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::ValidationError {
            field: "transitionTime".to_string(),
            message: "must be at least 1".to_string(),
        };

        let msg = format!("{}", err);
        assert!(msg.contains("transitionTime"));
        assert!(msg.contains("at least 1"));
    }
}
