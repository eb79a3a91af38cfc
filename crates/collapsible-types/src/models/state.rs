//! Visual state of a panel.

use serde::{Deserialize, Serialize};

use super::config::PanelConfig;
use super::style::{ContentStyle, Height, Overflow, Transition};

/// Everything the rendered output depends on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelState {
    pub is_closed: bool,
    pub height: Height,
    pub transition: Transition,
    /// Sticky: once true it stays true. Gates lazy rendering.
    pub has_been_opened: bool,
    pub overflow: Overflow,
    /// One-shot request for the post-render hook to schedule the collapse.
    pub should_switch_auto_on_next_cycle: bool,
}

impl PanelState {
    /// Initial state derived from the `open` flag.
    pub fn new(config: &PanelConfig) -> Self {
        if config.open {
            Self {
                is_closed: false,
                height: Height::Auto,
                transition: Transition::None,
                has_been_opened: true,
                overflow: config.overflow_when_open,
                should_switch_auto_on_next_cycle: false,
            }
        } else {
            Self {
                is_closed: true,
                height: Height::ZERO,
                transition: config.transition(),
                has_been_opened: false,
                overflow: Overflow::Hidden,
                should_switch_auto_on_next_cycle: false,
            }
        }
    }

    pub fn style(&self) -> ContentStyle {
        ContentStyle {
            height: self.height,
            transition: self.transition.clone(),
            overflow: self.overflow,
        }
    }
}
