//! The `mock_user_id` selection cookie.
//!
//! The browser writes it from the user switcher; the server and the hydrated
//! client read it back. Absence or an unknown value means "default user".
//!
//! Reads go through the `cookie` crate, the same parser axum-extra's
//! `CookieJar` uses on the server, so every side decodes a given cookie
//! string to the same value: percent-decoded, last duplicate wins.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod tests;

use ::cookie::Cookie;

/// Name of the cookie holding the active mock user id.
pub const COOKIE_NAME: &str = "mock_user_id";

pub const COOKIE_PATH: &str = "/";

/// One year.
pub const COOKIE_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 365;

/// `document.cookie` assignment string selecting `user_id`.
#[must_use]
pub fn selection_cookie(user_id: &str) -> String {
    let pair = Cookie::new(COOKIE_NAME, user_id);
    format!("{}; path={COOKIE_PATH}; max-age={COOKIE_MAX_AGE_SECS}", pair.encoded())
}

/// Find `name` in a `Cookie` header / `document.cookie` string.
///
/// Values are percent-decoded. Pairs that fail to parse are skipped. With
/// several pairs of the same name the last one wins, and an empty value
/// counts as absent.
#[must_use]
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    Cookie::split_parse_encoded(header)
        .filter_map(Result::ok)
        .filter(|c| c.name() == name)
        .last()
        .map(|c| c.value().to_owned())
        .filter(|value| !value.is_empty())
}

/// Shorthand for [`find_cookie`] with [`COOKIE_NAME`].
#[must_use]
pub fn selected_user_id(header: &str) -> Option<String> {
    find_cookie(header, COOKIE_NAME)
}
