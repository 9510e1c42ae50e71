//! Mock auth context for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `MockAuthProvider` sits at the top of the app and is seeded with the user
//! id the server resolved from the `mock_user_id` cookie. Components read it
//! through `use_user`, mirroring the hosted provider's hook. The value never
//! changes while mounted: switching users reloads the page.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

use leptos::prelude::*;
use users::{MockUser, Registry};

/// Value provided to descendants of [`MockAuthProvider`].
#[derive(Clone, Debug)]
pub struct MockAuthContext {
    pub registry: Arc<Registry>,
    pub user: MockUser,
}

impl MockAuthContext {
    /// Resolve `initial_user_id` against `registry`, falling back to the default user.
    #[must_use]
    pub fn new(registry: Arc<Registry>, initial_user_id: Option<&str>) -> Self {
        let user = registry.resolve(initial_user_id).clone();
        Self { registry, user }
    }
}

/// Return shape of [`use_user`].
///
/// `is_loaded` is always `true`: there is nothing to fetch.
#[derive(Clone, Debug)]
pub struct UseUser {
    pub user: MockUser,
    pub is_loaded: bool,
}

/// Establish the mock auth context for `children`.
#[component]
pub fn MockAuthProvider(
    registry: Arc<Registry>,
    #[prop(default = None)] initial_user_id: Option<String>,
    children: Children,
) -> impl IntoView {
    provide_context(MockAuthContext::new(registry, initial_user_id.as_deref()));
    children()
}

/// Read the nearest [`MockAuthProvider`].
///
/// # Panics
///
/// Panics when called outside a `MockAuthProvider`.
pub fn use_user() -> UseUser {
    let ctx = expect_context::<MockAuthContext>();
    UseUser { user: ctx.user, is_loaded: true }
}
