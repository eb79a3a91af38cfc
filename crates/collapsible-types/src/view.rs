//! Render model: class names and style computed from a panel.

use serde::{Deserialize, Serialize};

use crate::models::ContentStyle;
use crate::panel::Panel;

pub const OPEN_CLASS: &str = "is-open";
pub const CLOSED_CLASS: &str = "is-closed";
pub const DISABLED_CLASS: &str = "is-disabled";

/// Join class fragments, dropping empty ones.
pub fn class_list<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Everything the DOM layer needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelView {
    pub wrapper_class: String,
    pub trigger_class: String,
    pub sibling_class: String,
    pub content_outer_class: String,
    pub content_inner_class: String,
    pub style: ContentStyle,
    /// Show the open-state trigger content, when one is configured
    pub use_open_trigger: bool,
    /// False only while lazy rendering and never opened
    pub render_children: bool,
}

impl Panel {
    pub fn view_model(&self) -> PanelView {
        let config = self.config();
        let state = self.state();
        let parent = config.class_parent_string.as_str();
        let is_closed = state.is_closed;

        let state_class = if is_closed { CLOSED_CLASS } else { OPEN_CLASS };
        let disabled_class = if config.trigger_disabled { DISABLED_CLASS } else { "" };
        let trigger_extra = if is_closed {
            config.trigger_class_name.as_str()
        } else {
            config.trigger_opened_class_name.as_str()
        };
        let wrapper_extra =
            if is_closed { config.class_name.as_str() } else { config.opened_class_name.as_str() };

        PanelView {
            wrapper_class: class_list([parent, wrapper_extra]),
            trigger_class: class_list([
                format!("{parent}__trigger").as_str(),
                state_class,
                disabled_class,
                trigger_extra,
            ]),
            sibling_class: format!("{parent}__trigger-sibling"),
            content_outer_class: class_list([
                format!("{parent}__contentOuter").as_str(),
                config.content_outer_class_name.as_str(),
            ]),
            content_inner_class: class_list([
                format!("{parent}__contentInner").as_str(),
                config.content_inner_class_name.as_str(),
            ]),
            style: state.style(),
            use_open_trigger: !is_closed,
            render_children: self.renders_children(),
        }
    }
}
