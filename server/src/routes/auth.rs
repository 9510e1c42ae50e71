//! Auth routes: mock session inspection and user switching.

use std::convert::Infallible;

use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Redirect};
use axum::Form;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use time::Duration;
use users::cookie::{COOKIE_MAX_AGE_SECS, COOKIE_NAME, COOKIE_PATH};
use users::{AFTER_SIGN_IN_PATH, MockUser};

use crate::services::identity::{self, AuthObject, SignInRedirect};
use crate::state::AppState;

// =============================================================================
// EXTRACTORS
// =============================================================================

/// `auth()` for the current request. Never rejects.
pub struct MockAuth(pub AuthObject);

impl<S> FromRequestParts<S> for MockAuth
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        Ok(Self(identity::get_auth(&app_state.registry, &parts.headers)))
    }
}

/// `currentUser()` for the current request. Never rejects.
pub struct CurrentUser(pub MockUser);

impl<S> FromRequestParts<S> for CurrentUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        Ok(Self(identity::current_user(&app_state.registry, &jar).await))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/me`: the active mock user.
pub async fn me(CurrentUser(user): CurrentUser) -> Json<MockUser> {
    Json(user)
}

/// `GET /api/auth/session`: `{ userId }` for the active mock user.
pub async fn session(MockAuth(auth): MockAuth) -> Json<AuthObject> {
    Json(auth)
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersResponse {
    pub default_user_id: String,
    pub active_user_id: String,
    pub users: Vec<MockUser>,
}

/// `GET /api/mock-auth/users`: the roster with default and active ids.
pub async fn list_users(State(state): State<AppState>, jar: CookieJar) -> Json<UsersResponse> {
    let auth = identity::auth(&state.registry, &jar);
    Json(UsersResponse {
        default_user_id: state.registry.default_user_id().to_owned(),
        active_user_id: auth.user_id,
        users: state.registry.users().to_vec(),
    })
}

#[derive(Debug, Deserialize)]
pub struct SwitchForm {
    user_id: String,
}

/// `POST /api/mock-auth/switch`: no-JS fallback for the user switcher.
///
/// Stores the selection cookie (unknown ids are stored as the default id) and
/// sends the browser back to the app root for a fresh render.
pub async fn switch_user(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SwitchForm>,
) -> impl IntoResponse {
    let user_id = state.registry.resolve_id(Some(form.user_id.trim())).to_owned();
    if user_id != form.user_id.trim() {
        tracing::warn!(requested = %form.user_id, %user_id, "unknown mock user; selecting default");
    }
    tracing::info!(%user_id, "mock user switched");

    let cookie = Cookie::build((COOKIE_NAME, user_id))
        .path(COOKIE_PATH)
        .http_only(false)
        .same_site(SameSite::Lax)
        .secure(state.cookie_secure)
        .max_age(Duration::seconds(COOKIE_MAX_AGE_SECS));

    (jar.add(cookie), Redirect::to(AFTER_SIGN_IN_PATH))
}

/// `GET /api/auth/sign-in-redirect`: always bounces to the sign-in page.
pub async fn sign_in_redirect() -> SignInRedirect {
    identity::redirect_to_sign_in()
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
