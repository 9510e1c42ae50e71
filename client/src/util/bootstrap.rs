//! Hand-off of the server's registry to the hydrated app.
//!
//! The server may load a custom roster at start-up, so the browser cannot
//! rebuild it on its own. The shell embeds the roster as JSON in a
//! `<script type="application/json">` element and `hydrate` reads it back.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use users::{MockUser, Registry};

/// DOM id of the embedded roster.
pub const REGISTRY_ELEMENT_ID: &str = "mock-auth-registry";

/// Roster as JSON safe to place inside a `<script>` element.
pub fn registry_json(registry: &Registry) -> String {
    serde_json::to_string(registry.users())
        .unwrap_or_else(|_| "[]".to_owned())
        .replace("</", "<\\/")
}

/// Parse an embedded roster; `None` when it is malformed or violates the
/// registry invariants.
pub fn registry_from_json(raw: &str) -> Option<Registry> {
    let users: Vec<MockUser> = serde_json::from_str(raw).ok()?;
    Registry::new(users).ok()
}

/// Roster embedded in the current document.
pub fn read_embedded_registry() -> Option<Registry> {
    #[cfg(feature = "hydrate")]
    {
        let raw = web_sys::window()?
            .document()?
            .get_element_by_id(REGISTRY_ELEMENT_ID)?
            .text_content()?;
        let registry = registry_from_json(&raw);
        if registry.is_none() {
            log::warn!("embedded mock user roster is invalid; using built-in users");
        }
        registry
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
