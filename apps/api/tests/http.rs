//! Router tests that need no database.
//!
//! The pool points at a closed port, so every store call times out quickly
//! and exercises the failure paths. Boundary validation never touches it.

use std::time::Duration;

use axum::{
    body::{self, Body},
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use phrasebook_api::{config::ApiConfig, router, AppState};
use phrasebook_core::ErrorDisclosure;
use phrasebook_db::{Database, DbConfig};
use serde_json::{json, Value};
use tower::ServiceExt;

const SOME_UUID: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";

fn app_with(config: ApiConfig) -> Router {
    let db_config = DbConfig::default()
        .port(1)
        .connect_timeout(Duration::from_millis(200));
    let db = Database::connect_lazy(&db_config);
    router(AppState::new(db, config))
}

fn app() -> Router {
    app_with(ApiConfig::default())
}

async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn read_json(response: Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("response body should be readable");
    let value = serde_json::from_slice(&bytes).expect("response body should be valid JSON");
    (status, value)
}

/// Verbatim mode passes the store error text through.
fn assert_store_text(body: &Value) {
    let message = body["message"].as_str().expect("message should be a string");
    assert!(!message.is_empty());
    assert_ne!(message, "Internal server error");
}

#[tokio::test]
async fn malformed_phrase_id_is_rejected_before_store() {
    let (status, body) = read_json(get(app(), "/phrase/invalid-uuid").await).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "statusCode": 400, "message": "Invalid UUID" }));
}

#[tokio::test]
async fn malformed_id_on_translation_route_is_not_found() {
    let (status, body) = read_json(get(app(), "/phrase/invalid-uuid/en").await).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "data": null, "statusCode": 404, "message": "Translation not found" })
    );
}

#[tokio::test]
async fn overlong_language_code_is_not_found_without_store() {
    let uri = format!("/phrase/{SOME_UUID}/zh-Hant-TWXX");
    let (status, body) = read_json(get(app(), &uri).await).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({ "data": null, "statusCode": 404, "message": "Translation not found" })
    );
}

#[tokio::test]
async fn store_failure_on_listing_is_reported_in_envelope() {
    let uri = "/phrase/get-all-phrase?page=2&limit=5&sort=phrase&order=desc";
    let (status, body) = read_json(get(app(), uri).await).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["data"], Value::Null);
    assert_eq!(body["statusCode"], 500);
    assert_store_text(&body);
    assert!(body.get("totalRows").is_none());
}

#[tokio::test]
async fn sanitized_mode_hides_store_text() {
    let config = ApiConfig {
        disclosure: ErrorDisclosure::Sanitized,
        ..ApiConfig::default()
    };
    let uri = format!("/phrase/{SOME_UUID}");
    let (status, body) = read_json(get(app_with(config), &uri).await).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["message"], "Internal server error");
    assert_eq!(body["data"], Value::Null);
}

#[tokio::test]
async fn search_failure_uses_fixed_message() {
    let (status, body) = read_json(get(app(), "/phrase/search?query=how%20ar").await).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "statusCode": 500, "message": "Error searching phrases" })
    );
}

#[tokio::test]
async fn language_failure_uses_fixed_message() {
    let (status, body) = read_json(get(app(), "/language/list").await).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "statusCode": 500, "message": "Error fetching languages" })
    );
}

#[tokio::test]
async fn translation_store_failure_is_reported_in_envelope() {
    let uri = format!("/phrase/{SOME_UUID}/fr");
    let (status, body) = read_json(get(app(), &uri).await).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["statusCode"], 500);
    assert_store_text(&body);
}

#[tokio::test]
async fn health_reports_unavailable_store() {
    let (status, body) = read_json(get(app(), "/health").await).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body, json!({ "status": "unavailable" }));
}

#[tokio::test]
async fn cors_echoes_listed_origin() {
    let config = ApiConfig {
        cors_origins: Some(vec!["http://app.test".to_string()]),
        ..ApiConfig::default()
    };
    let request = Request::get("/phrase/invalid-uuid")
        .header(header::ORIGIN, "http://app.test")
        .body(Body::empty())
        .unwrap();

    let response = app_with(config).oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "http://app.test"
    );
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let request = Request::get("/phrase/invalid-uuid")
        .header(header::ORIGIN, "http://elsewhere.test")
        .body(Body::empty())
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
