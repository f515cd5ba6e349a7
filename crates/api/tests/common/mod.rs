#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use marquee_api::config::{AppEnv, DatabaseConfig, ServerConfig};
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;
use marquee_core::store::{InMemoryMovieStore, MovieStore};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
///
/// The database URL is never dialled; tests run against an in-memory store.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        app_env: AppEnv::Development,
        log_level: "debug".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database: DatabaseConfig {
            url: "postgres://unused@localhost/unused".to_string(),
            max_connections: 1,
            timezone: "UTC".to_string(),
        },
    }
}

/// Build the full application router over `store`, with the same middleware
/// stack production uses.
pub fn build_test_app(store: Arc<dyn MovieStore>) -> Router {
    build_test_app_with_config(store, test_config())
}

pub fn build_test_app_with_config(store: Arc<dyn MovieStore>, config: ServerConfig) -> Router {
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

/// Router over a fresh, empty in-memory store. The store handle is returned
/// so tests can inspect it directly.
pub fn memory_app() -> (Router, Arc<InMemoryMovieStore>) {
    let store = Arc::new(InMemoryMovieStore::new());
    (build_test_app(store.clone()), store)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: &Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: &Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body.to_string()).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn send_json(app: Router, method: Method, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = body_bytes(response).await;
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    String::from_utf8(body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A request body that passes every rule.
pub fn movie_body(title: &str) -> Value {
    json!({
        "title": title,
        "description": "A thief who steals corporate secrets through dream-sharing.",
        "poster_url": "https://example.com/posters/inception.jpg",
        "release_date": "2010-07-16",
        "rating": 8.8,
        "duration_minutes": 148,
        "director": "Christopher Nolan",
        "genre": ["Action", "Sci-Fi"]
    })
}

/// POST a valid movie and return the stored record from the envelope.
pub async fn create_movie(app: Router, title: &str) -> Value {
    let response = post_json(app, "/api/movies", &movie_body(title)).await;
    assert_eq!(response.status(), 201);
    body_json(response).await["data"].clone()
}
