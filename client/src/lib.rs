//! # client
//!
//! Leptos frontend pieces of the mock identity provider: the auth context,
//! drop-in stand-ins for the hosted provider's components, the developer user
//! switcher, and the app shell that wires them to routes.
//!
//! Built with `ssr` for server rendering and `hydrate` for the browser.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use std::sync::Arc;

    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let registry = Arc::new(util::bootstrap::read_embedded_registry().unwrap_or_default());
    let initial_user_id = util::browser::selected_user_id();
    leptos::mount::hydrate_body(move || view! { <App registry initial_user_id/> });
}
