//! Thin wrappers over `document.cookie` and `window.location`.
//!
//! Every function is a no-op (or returns `None`) outside the `hydrate` build
//! so server rendering stays deterministic.

#[cfg(test)]
#[path = "browser_test.rs"]
mod browser_test;

#[cfg(feature = "hydrate")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into::<web_sys::HtmlDocument>().ok()
}

/// Raw `document.cookie` string.
pub fn document_cookie() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        html_document()?.cookie().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Mock user id stored in the selection cookie, if any.
pub fn selected_user_id() -> Option<String> {
    document_cookie().and_then(|raw| users::cookie::selected_user_id(&raw))
}

/// Assign one cookie string to `document.cookie`.
pub fn write_cookie(cookie: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = html_document() {
            if doc.set_cookie(cookie).is_err() {
                log::warn!("failed to write cookie");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cookie;
    }
}

/// Full document navigation (not a client-side route change).
pub fn hard_navigate(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}

/// Reload the current document.
pub fn reload() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().reload();
        }
    }
}
