//! Switching the active mock user.
//!
//! TRADE-OFFS
//! ==========
//! A switch writes the selection cookie and then reloads the whole document,
//! so the server render and the hydrated app both re-resolve from the new
//! cookie. There is no in-place update of already-mounted components.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use users::cookie::selection_cookie;

/// Where a selection is persisted and how the page is resynchronized.
pub trait SelectionTarget {
    fn write_cookie(&self, cookie: &str);
    fn reload(&self);
}

/// The live browser document.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocument;

impl SelectionTarget for BrowserDocument {
    fn write_cookie(&self, cookie: &str) {
        super::browser::write_cookie(cookie);
    }

    fn reload(&self) {
        super::browser::reload();
    }
}

/// Persist `user_id` as the active mock user, then reload.
pub fn apply_selection<T: SelectionTarget + ?Sized>(target: &T, user_id: &str) {
    target.write_cookie(&selection_cookie(user_id));
    target.reload();
}

/// [`apply_selection`] against the browser document.
pub fn select_mock_user(user_id: &str) {
    #[cfg(feature = "hydrate")]
    log::debug!("switching mock user to {user_id}");
    apply_selection(&BrowserDocument, user_id);
}
