//! CSS value types carried by the content wrapper.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

// ============================================================================
// Height
// ============================================================================

/// Height of the outer content element.
///
/// A pixel value while animating, `Auto` once the panel has settled open so
/// it follows the size of its content.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Height {
    Px(f64),
    Auto,
}

impl Height {
    pub const ZERO: Self = Self::Px(0.0);

    pub fn is_auto(&self) -> bool {
        matches!(self, Self::Auto)
    }
}

impl Default for Height {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Height::Px(px) => write!(f, "{px}px"),
            Height::Auto => write!(f, "auto"),
        }
    }
}

// ============================================================================
// Overflow
// ============================================================================

/// CSS overflow keyword applied to the content wrapper.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Overflow {
    #[default]
    Hidden,
    Visible,
    Auto,
    Scroll,
    Inherit,
    Initial,
    Unset,
}

impl Overflow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Overflow::Hidden => "hidden",
            Overflow::Visible => "visible",
            Overflow::Auto => "auto",
            Overflow::Scroll => "scroll",
            Overflow::Inherit => "inherit",
            Overflow::Initial => "initial",
            Overflow::Unset => "unset",
        }
    }
}

impl fmt::Display for Overflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Overflow {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "hidden" => Ok(Overflow::Hidden),
            "visible" => Ok(Overflow::Visible),
            "auto" => Ok(Overflow::Auto),
            "scroll" => Ok(Overflow::Scroll),
            "inherit" => Ok(Overflow::Inherit),
            "initial" => Ok(Overflow::Initial),
            "unset" => Ok(Overflow::Unset),
            other => Err(ConfigError::UnknownOverflow { value: other.to_string() }),
        }
    }
}

// ============================================================================
// Transition
// ============================================================================

/// Height transition descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    /// Transitions disabled, height changes apply instantly
    #[default]
    None,
    /// Animate `height` over `duration_ms` with the given easing keyword
    Height { duration_ms: u32, easing: String },
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::None => write!(f, "none"),
            Transition::Height { duration_ms, easing } => {
                write!(f, "height {duration_ms}ms {easing}")
            }
        }
    }
}

// ============================================================================
// ContentStyle
// ============================================================================

/// Style attributes of the outer content element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentStyle {
    pub height: Height,
    pub transition: Transition,
    pub overflow: Overflow,
}

impl ContentStyle {
    /// Inline `style` attribute value, with the vendor-prefixed transition
    /// repeated for older WebKit and IE.
    pub fn to_css(&self) -> String {
        format!(
            "height: {h}; -webkit-transition: {t}; -ms-transition: {t}; transition: {t}; overflow: {o};",
            h = self.height,
            t = self.transition,
            o = self.overflow,
        )
    }
}
