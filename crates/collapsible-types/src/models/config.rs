//! Panel configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

use super::style::{Overflow, Transition};
use crate::error::{ConfigError, Result};

/// Default animation duration in milliseconds.
pub const DEFAULT_TRANSITION_TIME: u32 = 400;
/// Default CSS easing keyword.
pub const DEFAULT_EASING: &str = "linear";
/// Default base class every generated class name is derived from.
pub const DEFAULT_CLASS_PARENT: &str = "Collapsible";

fn default_transition_time() -> u32 {
    DEFAULT_TRANSITION_TIME
}

fn default_easing() -> String {
    DEFAULT_EASING.to_string()
}

fn default_class_parent() -> String {
    DEFAULT_CLASS_PARENT.to_string()
}

/// Opaque token handed back to an external click handler, usually the
/// index of the panel inside an accordion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AccordionPosition {
    Index(u64),
    Key(String),
}

impl fmt::Display for AccordionPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccordionPosition::Index(i) => write!(f, "{i}"),
            AccordionPosition::Key(k) => f.write_str(k),
        }
    }
}

impl From<u64> for AccordionPosition {
    fn from(value: u64) -> Self {
        Self::Index(value)
    }
}

impl From<usize> for AccordionPosition {
    fn from(value: usize) -> Self {
        Self::Index(value as u64)
    }
}

impl From<&str> for AccordionPosition {
    fn from(value: &str) -> Self {
        Self::Key(value.to_string())
    }
}

impl From<String> for AccordionPosition {
    fn from(value: String) -> Self {
        Self::Key(value)
    }
}

/// Configuration of a single collapsible panel.
///
/// Keys use camelCase so panel definitions can be written in the same shape
/// the component props are documented in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
#[allow(
    clippy::struct_excessive_bools,
    reason = "Configuration struct - bools are intentional feature flags"
)]
pub struct PanelConfig {
    /// Animation duration in milliseconds
    #[validate(range(min = 1_u32))]
    #[serde(default = "default_transition_time")]
    pub transition_time: u32,
    /// CSS easing keyword or function
    #[validate(length(min = 1_u64))]
    #[serde(default = "default_easing")]
    pub easing: String,
    /// Initial disclosure state
    #[serde(default)]
    pub open: bool,
    /// Prefix for every generated class name
    #[validate(length(min = 1_u64))]
    #[serde(default = "default_class_parent")]
    pub class_parent_string: String,
    /// Wrapper class while closed
    #[serde(default)]
    pub class_name: String,
    /// Wrapper class while open
    #[serde(default)]
    pub opened_class_name: String,
    /// Trigger class while closed
    #[serde(default)]
    pub trigger_class_name: String,
    /// Trigger class while open
    #[serde(default)]
    pub trigger_opened_class_name: String,
    #[serde(default)]
    pub content_outer_class_name: String,
    #[serde(default)]
    pub content_inner_class_name: String,
    /// Token passed to an external click handler
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accordion_position: Option<AccordionPosition>,
    /// Ignore every trigger click
    #[serde(default)]
    pub trigger_disabled: bool,
    /// Defer rendering children until the first open
    #[serde(default)]
    pub lazy_render: bool,
    /// Overflow applied once the panel has settled open
    #[serde(default)]
    pub overflow_when_open: Overflow,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            transition_time: DEFAULT_TRANSITION_TIME,
            easing: default_easing(),
            open: false,
            class_parent_string: default_class_parent(),
            class_name: String::new(),
            opened_class_name: String::new(),
            trigger_class_name: String::new(),
            trigger_opened_class_name: String::new(),
            content_outer_class_name: String::new(),
            content_inner_class_name: String::new(),
            accordion_position: None,
            trigger_disabled: false,
            lazy_render: false,
            overflow_when_open: Overflow::default(),
        }
    }
}

impl PanelConfig {
    /// Parse a single panel definition from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ConfigError::from_json_error(&e))
    }

    /// Validate all fields, reporting every failing field.
    pub fn check(&self) -> std::result::Result<(), Vec<ConfigError>> {
        self.validate().map_err(|e| ConfigError::from_validation_errors(&e))
    }

    /// Replace every invalid field with its default.
    ///
    /// Misconfiguration is never fatal for a panel: a zero duration would
    /// leave it waiting for a `transitionend` that never fires, so it is
    /// reset instead of rejected.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if let Err(errors) = self.check() {
            for err in &errors {
                log::warn!("Collapsible: {err}; falling back to default");
            }
            if self.transition_time == 0 {
                self.transition_time = DEFAULT_TRANSITION_TIME;
            }
            if self.easing.is_empty() {
                self.easing = default_easing();
            }
            if self.class_parent_string.is_empty() {
                self.class_parent_string = default_class_parent();
            }
        }
        self
    }

    /// The transition used while animating.
    pub fn transition(&self) -> Transition {
        Transition::Height { duration_ms: self.transition_time, easing: self.easing.clone() }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_json() {
        let config = PanelConfig::from_json("{}").unwrap();
        assert_eq!(config, PanelConfig::default());
        assert_eq!(config.transition_time, 400);
        assert_eq!(config.easing, "linear");
        assert_eq!(config.class_parent_string, "Collapsible");
        assert_eq!(config.overflow_when_open, Overflow::Hidden);
    }

    #[test]
    fn test_camel_case_keys() {
        let config = PanelConfig::from_json(
            r#"{"transitionTime": 250, "overflowWhenOpen": "visible", "lazyRender": true,
                "triggerOpenedClassName": "active", "accordionPosition": 2}"#,
        )
        .unwrap();
        assert_eq!(config.transition_time, 250);
        assert_eq!(config.overflow_when_open, Overflow::Visible);
        assert!(config.lazy_render);
        assert_eq!(config.trigger_opened_class_name, "active");
        assert_eq!(config.accordion_position, Some(AccordionPosition::Index(2)));
    }

    #[test]
    fn test_accordion_position_string_key() {
        let config = PanelConfig::from_json(r#"{"accordionPosition": "faq-3"}"#).unwrap();
        assert_eq!(config.accordion_position, Some(AccordionPosition::Key("faq-3".to_string())));
        assert_eq!(config.accordion_position.unwrap().to_string(), "faq-3");
    }

    #[test]
    fn test_unknown_overflow_is_parse_error() {
        let err = PanelConfig::from_json(r#"{"overflowWhenOpen": "clip"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_check_reports_each_field() {
        let config = PanelConfig {
            transition_time: 0,
            easing: String::new(),
            ..PanelConfig::default()
        };
        let errors = config.check().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.to_string().contains("transition")));
        assert!(errors.iter().any(|e| e.to_string().contains("easing")));
    }

    #[test]
    fn test_sanitized_restores_defaults() {
        let config = PanelConfig {
            transition_time: 0,
            easing: String::new(),
            class_parent_string: String::new(),
            lazy_render: true,
            ..PanelConfig::default()
        }
        .sanitized();
        assert!(config.check().is_ok());
        assert_eq!(config.transition_time, DEFAULT_TRANSITION_TIME);
        assert_eq!(config.easing, DEFAULT_EASING);
        assert_eq!(config.class_parent_string, DEFAULT_CLASS_PARENT);
        assert!(config.lazy_render);
    }

    #[test]
    fn test_transition_uses_duration_and_easing() {
        let config =
            PanelConfig { transition_time: 300, easing: "ease".to_string(), ..PanelConfig::default() };
        assert_eq!(config.transition().to_string(), "height 300ms ease");
    }
}
