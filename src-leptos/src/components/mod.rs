//! Reusable UI components

mod collapsible;

pub use collapsible::Collapsible;
