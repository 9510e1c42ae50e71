//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the mock auth JSON endpoints and the Leptos SSR pages
//! under a single Axum router. Page requests resolve the active mock user from
//! the selection cookie before rendering, and hand that id to the app shell.

pub mod auth;

use std::path::PathBuf;

use axum::Router;
use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use client::app::{App, shell};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use self::auth::MockAuth;
use crate::middleware::{AuthMiddlewareOptions, auth_middleware};
use crate::state::{AppState, PageState};

/// JSON API routes.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/me", get(auth::me))
        .route("/api/auth/session", get(auth::session))
        .route("/api/auth/sign-in-redirect", get(auth::sign_in_redirect))
        .route("/api/mock-auth/users", get(auth::list_users))
        .route("/api/mock-auth/switch", post(auth::switch_user))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API routes + Leptos SSR pages + `/pkg` static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list({
        let registry = state.registry.clone();
        move || view! { <App registry=registry.clone()/> }
    });

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    let page_state = PageState { leptos_options, app: state.clone() };
    let leptos_router = Router::new()
        .leptos_routes_with_handler(routes, get(render_page))
        .with_state(page_state);

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

/// Render a page for the user selected by the request's cookie.
async fn render_page(State(state): State<PageState>, MockAuth(auth): MockAuth, req: Request<Body>) -> Response {
    let options = state.leptos_options;
    let registry = state.app.registry;
    let user_id = auth.user_id;
    let handler = leptos_axum::render_app_to_stream_with_context(
        || {},
        move || shell(options.clone(), registry.clone(), Some(user_id.clone())),
    );
    handler(req).await.into_response()
}

/// Request tracing and the pass-through auth middleware, outermost first.
pub fn with_layers(router: Router) -> Router {
    let options = AuthMiddlewareOptions { public_routes: vec!["/sign-in".to_owned(), "/sign-up".to_owned()] };
    router.layer(auth_middleware(Some(options))).layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
