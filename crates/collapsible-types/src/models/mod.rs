//! Data model of a collapsible panel: configuration, CSS value types and
//! visual state.

mod config;
mod state;
mod style;

pub use config::{
    AccordionPosition, PanelConfig, DEFAULT_CLASS_PARENT, DEFAULT_EASING, DEFAULT_TRANSITION_TIME,
};
pub use state::PanelState;
pub use style::{ContentStyle, Height, Overflow, Transition};
