//! Collapsible demo
//!
//! Mounts a page of example panels, including an accordion driven through
//! the external click handler.

// Dependencies used in lib.rs submodules, acknowledged here for bin target
use collapsible_types as _;
use gloo_timers as _;
use serde as _;
use serde_json as _;
use web_sys as _;

use collapsible_leptos::app::App;
use leptos::prelude::*;

fn main() {
    // Initialize panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging (ignore error if already initialized)
    drop(console_log::init_with_level(log::Level::Debug));

    log::info!("Collapsible demo v{} starting...", env!("CARGO_PKG_VERSION"));

    mount_to_body(App);
}
