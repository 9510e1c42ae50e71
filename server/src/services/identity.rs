//! Server-side identity resolution for mock sessions.
//!
//! ARCHITECTURE
//! ============
//! The active user is whatever the `mock_user_id` cookie names, as long as the
//! registry knows that id. Anything else (no request, no cookie, an unknown
//! or malformed value) resolves to the registry's default user. None of these
//! helpers can fail.
//!
//! `auth` / `current_user` take the request's cookie jar; `get_auth` accepts
//! any [`CookieSource`], including loosely shaped JSON request objects.

use std::collections::HashMap;

use axum::http::{HeaderMap, Request, request::Parts};
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use serde_json::Value;
use users::cookie::{COOKIE_NAME, find_cookie};
use users::{MockUser, Registry, SIGN_IN_PATH};

/// Return shape of `auth()` / `get_auth()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthObject {
    pub user_id: String,
}

/// Anything a cookie value can be read from.
pub trait CookieSource {
    /// Value of cookie `name`, or `None` when absent or unreadable.
    fn cookie(&self, name: &str) -> Option<String>;
}

impl CookieSource for CookieJar {
    fn cookie(&self, name: &str) -> Option<String> {
        self.get(name).map(|c| c.value().to_owned()).filter(|v| !v.is_empty())
    }
}

impl CookieSource for HeaderMap {
    fn cookie(&self, name: &str) -> Option<String> {
        CookieJar::from_headers(self).cookie(name)
    }
}

impl CookieSource for Parts {
    fn cookie(&self, name: &str) -> Option<String> {
        self.headers.cookie(name)
    }
}

impl<B> CookieSource for Request<B> {
    fn cookie(&self, name: &str) -> Option<String> {
        self.headers().cookie(name)
    }
}

impl CookieSource for HashMap<String, String> {
    fn cookie(&self, name: &str) -> Option<String> {
        self.get(name).filter(|v| !v.is_empty()).cloned()
    }
}

/// A request-shaped JSON object carrying a `cookies` field.
///
/// `cookies` may map names to strings or to `{ "value": string }` objects, or
/// be a raw `Cookie` header string. Any other shape reads as no cookie.
impl CookieSource for Value {
    fn cookie(&self, name: &str) -> Option<String> {
        let value = match self.get("cookies")? {
            Value::Object(map) => match map.get(name)? {
                Value::String(s) => s.clone(),
                entry @ Value::Object(_) => entry.get("value")?.as_str()?.to_owned(),
                _ => return None,
            },
            Value::String(header) => find_cookie(header, name)?,
            _ => return None,
        };
        Some(value).filter(|v| !v.is_empty())
    }
}

impl<T: CookieSource + ?Sized> CookieSource for &T {
    fn cookie(&self, name: &str) -> Option<String> {
        (**self).cookie(name)
    }
}

impl<T: CookieSource> CookieSource for Option<T> {
    fn cookie(&self, name: &str) -> Option<String> {
        self.as_ref()?.cookie(name)
    }
}

/// The registered user id named by `source`'s selection cookie, or the default id.
pub fn resolve_user_id<'r>(registry: &'r Registry, source: &impl CookieSource) -> &'r str {
    let candidate = source.cookie(COOKIE_NAME);
    registry.resolve_id(candidate.as_deref())
}

/// `{ userId }` for the current request.
#[must_use]
pub fn auth(registry: &Registry, jar: &CookieJar) -> AuthObject {
    AuthObject { user_id: resolve_user_id(registry, jar).to_owned() }
}

/// The active user's record for the current request.
///
/// Asynchronous for API parity only; it resolves from the cookie already in hand.
pub async fn current_user(registry: &Registry, jar: &CookieJar) -> MockUser {
    registry.get(resolve_user_id(registry, jar)).clone()
}

/// `{ userId }` for an arbitrary request value. Never fails: a missing request,
/// a missing cookie field or a malformed one all yield the default id.
pub fn get_auth(registry: &Registry, request: impl CookieSource) -> AuthObject {
    AuthObject { user_id: resolve_user_id(registry, &request).to_owned() }
}

/// Response produced by [`redirect_to_sign_in`].
#[derive(Debug, Clone, Copy)]
pub struct SignInRedirect;

impl IntoResponse for SignInRedirect {
    fn into_response(self) -> Response {
        Redirect::temporary(SIGN_IN_PATH).into_response()
    }
}

/// Navigate to the sign-in page. Handlers return this (directly or as the
/// error arm of a `Result`), so nothing after it runs.
#[must_use]
pub fn redirect_to_sign_in() -> SignInRedirect {
    tracing::debug!(path = SIGN_IN_PATH, "redirecting to sign-in");
    SignInRedirect
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
