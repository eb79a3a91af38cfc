//! # Collapsible Types
//!
//! Framework-free core of the Collapsible panel component.
//!
//! - **`error`** - Configuration errors
//! - **`models`** - Configuration, CSS value types and visual state
//! - **`panel`** - The open/close state machine
//! - **`view`** - Class names and style computed for each render
//!
//! ## Architecture Role
//!
//! ```text
//!        collapsible-types (this crate)
//!                 │
//!                 ▼
//!        collapsible-leptos (DOM binding, demo app)
//! ```
//!
//! The DOM layer feeds in measurements, clicks, timer expiry and
//! `transitionend`, and renders whatever [`view::PanelView`] says. Keeping the
//! sequencing here means it is tested natively, without a browser.

pub mod error;
pub mod models;
pub mod panel;
pub mod view;

pub use error::{ConfigError, Result};
pub use models::{
    AccordionPosition, ContentStyle, Height, Overflow, PanelConfig, PanelState, Transition,
    DEFAULT_CLASS_PARENT, DEFAULT_EASING, DEFAULT_TRANSITION_TIME,
};
pub use panel::{CollapseTicket, Lifecycle, Panel, Phase, TriggerIntent, COLLAPSE_DELAY_MS};
pub use view::{class_list, PanelView};
