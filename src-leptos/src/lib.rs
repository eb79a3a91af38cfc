//! Collapsible - Leptos panel component and demo app

pub mod app;
pub mod components;
pub mod demo;
