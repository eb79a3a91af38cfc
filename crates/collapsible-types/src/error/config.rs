//! Configuration-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading or validating panel configuration.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// Config document parse error (JSON)
    #[error("Config parse error: {message}")]
    ParseError {
        /// Description of the parse failure
        message: String,
    },

    /// Config validation error (invalid values)
    #[error("Config validation error for {field}: {message}")]
    ValidationError {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },

    /// Overflow keyword outside the CSS set the panel accepts
    #[error("Unknown overflow value: {value}")]
    UnknownOverflow {
        /// The rejected keyword
        value: String,
    },
}

impl ConfigError {
    /// Create a parse error from a serde_json error.
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::ParseError { message: e.to_string() }
    }

    /// Flatten validator output into one error per failing field.
    pub fn from_validation_errors(errors: &validator::ValidationErrors) -> Vec<Self> {
        let mut out: Vec<Self> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| Self::ValidationError {
                field: field.to_string(),
                message: errs
                    .iter()
                    .map(|e| e.message.as_ref().map_or_else(|| e.code.to_string(), |m| m.to_string()))
                    .collect::<Vec<_>>()
                    .join(", "),
            })
            .collect();
        out.sort_by(|a, b| a.to_string().cmp(&b.to_string()));
        out
    }
}
