use std::convert::Infallible;

use axum::Router;
use axum::body::Body;
use axum::http::StatusCode;
use axum::routing::get;
use tower::{ServiceExt, service_fn};

use super::*;

fn options() -> AuthMiddlewareOptions {
    AuthMiddlewareOptions { public_routes: vec!["/sign-in".into(), "/sign-up".into()] }
}

#[tokio::test]
async fn layer_forwards_requests_to_inner_service() {
    let inner = service_fn(|req: Request<()>| async move { Ok::<_, Infallible>(req.uri().path().to_owned()) });
    let svc = auth_middleware(Some(options())).layer(inner);
    let out = svc.oneshot(Request::builder().uri("/private").body(()).unwrap()).await.unwrap();
    assert_eq!(out, "/private");
}

#[tokio::test]
async fn non_public_route_is_not_rejected() {
    let app = Router::new()
        .route("/private", get(|| async { "secret" }))
        .layer(auth_middleware(Some(options())));
    let res = app.oneshot(Request::builder().uri("/private").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&body[..], b"secret");
}

#[tokio::test]
async fn without_options_behaves_the_same() {
    let app = Router::new().route("/", get(|| async { "ok" })).layer(auth_middleware(None));
    let res = app.oneshot(Request::builder().uri("/").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn inner_status_is_preserved() {
    let app = Router::new().layer(auth_middleware(Some(options())));
    let res = app.oneshot(Request::builder().uri("/missing").body(Body::empty()).unwrap()).await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
