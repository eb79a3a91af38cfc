//! Demo content loaded from the embedded accordion definition.

use collapsible_types::{ConfigError, PanelConfig};
use serde::Deserialize;

const ACCORDION_JSON: &str = include_str!("../assets/accordion.json");

/// One accordion entry: display text plus the panel configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AccordionItem {
    pub title: String,
    pub body: String,
    #[serde(flatten)]
    pub config: PanelConfig,
}

/// Parse a list of accordion entries.
pub fn parse_accordion(json: &str) -> Result<Vec<AccordionItem>, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::from_json_error(&e))
}

/// The accordion shown by the demo app. Empty if the embedded document is
/// broken, which is logged.
pub fn accordion_items() -> Vec<AccordionItem> {
    parse_accordion(ACCORDION_JSON).unwrap_or_else(|e| {
        log::error!("Failed to load accordion: {e}");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use collapsible_types::Overflow;

    #[test]
    #[allow(clippy::expect_used, reason = "test, panics are the assertion mechanism")]
    fn test_embedded_accordion_parses() {
        let items = parse_accordion(ACCORDION_JSON).expect("embedded accordion should parse");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].config.transition_time, 300);
        assert_eq!(items[1].config.overflow_when_open, Overflow::Visible);
        assert!(items[2].config.lazy_render);
        assert!(items.iter().all(|item| item.config.check().is_ok()));
    }

    #[test]
    fn test_missing_title_is_parse_error() {
        let result = parse_accordion(r#"[{"body": "no title"}]"#);
        assert!(matches!(result, Err(ConfigError::ParseError { .. })));
    }
}
