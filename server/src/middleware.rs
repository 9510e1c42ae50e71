//! Route-protection middleware stand-in.
//!
//! The hosted provider's middleware factory takes a list of public routes and
//! rejects unauthenticated requests elsewhere. Every mock session is
//! authenticated, so the layer built here forwards every request untouched.

use std::task::{Context, Poll};

use axum::http::Request;
use tower::{Layer, Service};

/// Options accepted by [`auth_middleware`]; ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthMiddlewareOptions {
    pub public_routes: Vec<String>,
}

/// Build the pass-through layer. `options` are accepted for drop-in
/// compatibility and have no effect.
#[must_use]
pub fn auth_middleware(options: Option<AuthMiddlewareOptions>) -> AuthMiddlewareLayer {
    let public_routes = options.map_or(0, |o| o.public_routes.len());
    tracing::debug!(public_routes, "mock auth middleware installed; route protection disabled");
    AuthMiddlewareLayer
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddlewareLayer;

impl<S> Layer<S> for AuthMiddlewareLayer {
    type Service = AuthMiddleware<S>;

    fn layer(&self, inner: S) -> Self::Service {
        AuthMiddleware { inner }
    }
}

/// Service produced by [`AuthMiddlewareLayer`].
#[derive(Debug, Clone)]
pub struct AuthMiddleware<S> {
    inner: S,
}

impl<S, B> Service<Request<B>> for AuthMiddleware<S>
where
    S: Service<Request<B>>,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request<B>) -> Self::Future {
        tracing::trace!(method = %req.method(), path = %req.uri().path(), "mock auth: pass-through");
        self.inner.call(req)
    }
}

#[cfg(test)]
#[path = "middleware_test.rs"]
mod tests;
