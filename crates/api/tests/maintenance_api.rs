//! HTTP-level tests for recording and listing maintenance.

mod common;

use axum::http::StatusCode;
use common::{body_json, create_asset, get, post_json};
use serde_json::json;
use sqlx::PgPool;

fn maintenance_uri(asset_id: i64) -> String {
    format!("/api/v1/assets/{asset_id}/maintenance")
}

fn service_body(status_after_service: &str) -> serde_json::Value {
    json!({
        "service_date": "2024-06-01",
        "cost": "150.00",
        "technician_name": "A",
        "status_after_service": status_after_service,
    })
}

// ---------------------------------------------------------------------------
// Happy path
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_record_maintenance_returns_201_and_updates_asset(pool: PgPool) {
    let asset_id = create_asset(&pool, "HP-1", "repair", "2024-01-01", Some(90)).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        &maintenance_uri(asset_id),
        service_body("active"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["asset_id"], asset_id);
    assert_eq!(json["data"]["service_date"], "2024-06-01");
    assert_eq!(json["data"]["cost"], "150.00");
    assert_eq!(json["data"]["status_after_service"], "active");

    let response = get(
        common::build_test_app(pool),
        &format!("/api/v1/assets/{asset_id}"),
    )
    .await;
    let asset = body_json(response).await;
    assert_eq!(asset["data"]["status"], "active");
    assert_eq!(asset["data"]["status_label"], "Active");
    assert_eq!(asset["data"]["last_maintenance_date"], "2024-06-01");
    assert_eq!(asset["data"]["next_maintenance_date"], "2024-08-30");
    assert_eq!(asset["data"]["maintenance_logs"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_explicit_next_date_is_applied(pool: PgPool) {
    let asset_id = create_asset(&pool, "ND-1", "active", "2024-01-01", Some(90)).await;
    let mut body = service_body("active");
    body["next_maintenance_date"] = json!("2024-06-15");

    let response = post_json(
        common::build_test_app(pool.clone()),
        &maintenance_uri(asset_id),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let asset = body_json(
        get(
            common::build_test_app(pool),
            &format!("/api/v1/assets/{asset_id}"),
        )
        .await,
    )
    .await;
    assert_eq!(asset["data"]["next_maintenance_date"], "2024-06-15");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_resubmission_returns_same_log(pool: PgPool) {
    let asset_id = create_asset(&pool, "ID-1", "active", "2024-01-01", None).await;

    let first = body_json(
        post_json(
            common::build_test_app(pool.clone()),
            &maintenance_uri(asset_id),
            service_body("active"),
        )
        .await,
    )
    .await;

    // A blank description and an omitted one are the same submission.
    let mut retry = service_body("active");
    retry["description"] = json!("");
    let response = post_json(
        common::build_test_app(pool.clone()),
        &maintenance_uri(asset_id),
        retry,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let second = body_json(response).await;

    assert_eq!(first["data"]["id"], second["data"]["id"]);

    let list = body_json(
        get(common::build_test_app(pool), &maintenance_uri(asset_id)).await,
    )
    .await;
    assert_eq!(list["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_maintenance_newest_first(pool: PgPool) {
    let asset_id = create_asset(&pool, "LS-1", "active", "2024-01-01", None).await;
    for day in ["2024-03-01", "2024-05-01", "2024-04-01"] {
        let mut body = service_body("active");
        body["service_date"] = json!(day);
        post_json(
            common::build_test_app(pool.clone()),
            &maintenance_uri(asset_id),
            body,
        )
        .await;
    }

    let list = body_json(get(common::build_test_app(pool), &maintenance_uri(asset_id)).await).await;
    let dates: Vec<&str> = list["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|log| log["service_date"].as_str().unwrap())
        .collect();
    assert_eq!(dates, vec!["2024-05-01", "2024-04-01", "2024-03-01"]);
}

// ---------------------------------------------------------------------------
// Guard rejections
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_disposed_asset_returns_422(pool: PgPool) {
    let asset_id = create_asset(&pool, "DS-1", "disposed", "2024-01-01", None).await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        &maintenance_uri(asset_id),
        service_body("disposed"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert_eq!(json["code"], "INVALID_TRANSITION");

    let list = body_json(get(common::build_test_app(pool), &maintenance_uri(asset_id)).await).await;
    assert!(list["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_repair_to_disposed_returns_422(pool: PgPool) {
    let asset_id = create_asset(&pool, "RD-1", "repair", "2024-01-01", None).await;

    let response = post_json(
        common::build_test_app(pool),
        &maintenance_uri(asset_id),
        service_body("disposed"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "INVALID_TRANSITION");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_service_before_purchase_returns_422(pool: PgPool) {
    let asset_id = create_asset(&pool, "TP-1", "active", "2024-07-01", None).await;

    let response = post_json(
        common::build_test_app(pool),
        &maintenance_uri(asset_id),
        service_body("active"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body_json(response).await["code"], "INVALID_TEMPORAL_ORDER");
}

// ---------------------------------------------------------------------------
// Boundary validation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_asset_returns_404(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool),
        &maintenance_uri(999_999),
        service_body("active"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_boundary_rules_return_400(pool: PgPool) {
    let asset_id = create_asset(&pool, "BV-1", "active", "2024-01-01", None).await;

    let mut negative_cost = service_body("active");
    negative_cost["cost"] = json!("-1.00");

    let mut future_date = service_body("active");
    future_date["service_date"] = json!("2999-01-01");

    let mut blank_technician = service_body("active");
    blank_technician["technician_name"] = json!("   ");

    let mut next_not_after_service = service_body("active");
    next_not_after_service["next_maintenance_date"] = json!("2024-06-01");

    for body in [negative_cost, future_date, blank_technician, next_not_after_service] {
        let response = post_json(
            common::build_test_app(pool.clone()),
            &maintenance_uri(asset_id),
            body,
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
    }

    let list = body_json(get(common::build_test_app(pool), &maintenance_uri(asset_id)).await).await;
    assert!(list["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unknown_status_is_rejected(pool: PgPool) {
    let asset_id = create_asset(&pool, "US-1", "active", "2024-01-01", None).await;

    let response = post_json(
        common::build_test_app(pool),
        &maintenance_uri(asset_id),
        service_body("broken"),
    )
    .await;

    assert!(response.status().is_client_error());
}
