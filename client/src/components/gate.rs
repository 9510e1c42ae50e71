//! Signed-in / signed-out gates. Every mock session is signed in.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use leptos::prelude::*;

/// Always renders `children`.
#[component]
pub fn SignedIn(children: Children) -> impl IntoView {
    children()
}

/// Never renders anything.
#[component]
pub fn SignedOut(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    let _ = children;
}
