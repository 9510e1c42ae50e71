//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! carries the mock user registry built at bootstrap; nothing in it changes
//! after start-up.

use std::sync::Arc;

use axum::extract::FromRef;
use leptos::prelude::LeptosOptions;
use users::Registry;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone, Debug)]
pub struct AppState {
    pub registry: Arc<Registry>,
    /// Mark cookies set by the server as `Secure`.
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(registry: Arc<Registry>, cookie_secure: bool) -> Self {
        Self { registry, cookie_secure }
    }
}

/// State for the Leptos page router: render options plus the app state the
/// page handler resolves the active user from.
#[derive(Clone)]
pub struct PageState {
    pub leptos_options: LeptosOptions,
    pub app: AppState,
}

impl FromRef<PageState> for LeptosOptions {
    fn from_ref(state: &PageState) -> Self {
        state.leptos_options.clone()
    }
}

impl FromRef<PageState> for AppState {
    fn from_ref(state: &PageState) -> Self {
        state.app.clone()
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// `AppState` over the built-in Alice/Bob/Carol roster.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(Arc::new(Registry::builtin()), false)
    }
}
