#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use inventra_api::config::ServerConfig;
use inventra_api::router::build_app_router;
use inventra_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: String::new(),
        db_max_connections: 5,
    }
}

/// Build the full application router, middleware included, on `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Create a category through the API and return its id.
pub async fn create_category(pool: &PgPool, slug: &str) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/categories",
        serde_json::json!({ "name": slug.to_uppercase(), "slug": slug }),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

/// Create an asset through the API and return its id.
pub async fn create_asset(
    pool: &PgPool,
    code: &str,
    status: &str,
    purchase_date: &str,
    interval_days: Option<i32>,
) -> i64 {
    let category_id = create_category(pool, &format!("cat-{}", code.to_lowercase())).await;
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/v1/assets",
        serde_json::json!({
            "name": format!("Asset {code}"),
            "code": code,
            "category_id": category_id,
            "status": status,
            "purchase_date": purchase_date,
            "maintenance_interval_days": interval_days,
        }),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
