//! End-to-end HTTP tests driving the router with `tower::ServiceExt::oneshot`.

mod test_utils;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use serde_json::{Value, json};
use test_utils::{count_templates, create_test_user, setup_test_db};
use tower::ServiceExt;
use whatsapp_templates::server::{AppState, create_app};

async fn send(app: Router, request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, headers, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn create_template_returns_created_record() {
    let db = setup_test_db().await.unwrap();
    let user_id = create_test_user(&db, "Test User").await.unwrap();
    let app = create_app(AppState { db });

    let (status, headers, body) = send(
        app,
        post_json(
            "/api/v1/whatsapp-templates",
            json!({
                "name": "Thank You Template",
                "type": "THANK_YOU",
                "content": "Thank you...",
                "created_by_id": user_id
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let id = body["id"].as_i64().unwrap();
    assert_eq!(
        headers.get(header::LOCATION).unwrap(),
        format!("/api/v1/whatsapp-templates/{id}").as_str()
    );
    assert!(headers.contains_key("x-trace-id"));
    assert_eq!(body["name"], "Thank You Template");
    assert_eq!(body["type"], "THANK_YOU");
    assert_eq!(body["content"], "Thank you...");
    assert_eq!(body["created_by_id"], user_id);
    assert_eq!(body["is_active"], true);
    assert!(body["updated_at"].is_null());
}

#[tokio::test]
async fn created_template_can_be_fetched_and_listed() {
    let db = setup_test_db().await.unwrap();
    let user_id = create_test_user(&db, "Test User").await.unwrap();
    let app = create_app(AppState { db });

    let (_, _, created) = send(
        app.clone(),
        post_json(
            "/api/v1/whatsapp-templates",
            json!({
                "name": "Promo",
                "type": "PROMOTION",
                "content": "20% off this week",
                "created_by_id": user_id
            }),
        ),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, _, fetched) = send(
        app.clone(),
        get(&format!("/api/v1/whatsapp-templates/{id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, _, listed) = send(
        app,
        get(&format!("/api/v1/whatsapp-templates?created_by_id={user_id}")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["data"], json!([created]));
}

#[tokio::test]
async fn unknown_creator_returns_constraint_violation() {
    let db = setup_test_db().await.unwrap();
    let app = create_app(AppState { db: db.clone() });

    let (status, headers, body) = send(
        app,
        post_json(
            "/api/v1/whatsapp-templates",
            json!({
                "name": "Thank You Template",
                "type": "THANK_YOU",
                "content": "Thank you...",
                "created_by_id": 4242
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        headers.get(header::CONTENT_TYPE).unwrap(),
        "application/problem+json"
    );
    assert_eq!(body["code"], "CONSTRAINT_VIOLATION");
    assert_eq!(body["details"]["constraint"], "foreign_key");
    assert_eq!(count_templates(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn unknown_template_type_is_rejected() {
    let db = setup_test_db().await.unwrap();
    let user_id = create_test_user(&db, "Test User").await.unwrap();
    let app = create_app(AppState { db });

    let (status, _, body) = send(
        app,
        post_json(
            "/api/v1/whatsapp-templates",
            json!({
                "name": "Odd",
                "type": "BIRTHDAY",
                "content": "...",
                "created_by_id": user_id
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn blank_name_is_rejected() {
    let db = setup_test_db().await.unwrap();
    let user_id = create_test_user(&db, "Test User").await.unwrap();
    let app = create_app(AppState { db });

    let (status, _, body) = send(
        app,
        post_json(
            "/api/v1/whatsapp-templates",
            json!({
                "name": "",
                "type": "CUSTOM",
                "content": "...",
                "created_by_id": user_id
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
}

#[tokio::test]
async fn missing_template_returns_not_found() {
    let db = setup_test_db().await.unwrap();
    let app = create_app(AppState { db });

    let (status, _, body) = send(app, get("/api/v1/whatsapp-templates/777")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "WhatsApp template 777 not found");
}

#[tokio::test]
async fn list_requires_created_by_id() {
    let db = setup_test_db().await.unwrap();
    let app = create_app(AppState { db });

    let (status, _, body) = send(app, get("/api/v1/whatsapp-templates")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "created_by_id");
}

#[tokio::test]
async fn caller_trace_id_is_echoed_in_errors() {
    let db = setup_test_db().await.unwrap();
    let app = create_app(AppState { db });

    let request = Request::builder()
        .uri("/api/v1/whatsapp-templates/1")
        .header("x-trace-id", "trace-abc-123")
        .body(Body::empty())
        .unwrap();
    let (status, headers, body) = send(app, request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(headers.get("x-trace-id").unwrap(), "trace-abc-123");
    assert_eq!(body["trace_id"], "trace-abc-123");
}

#[tokio::test]
async fn healthz_and_openapi_are_served() {
    let db = setup_test_db().await.unwrap();
    let app = create_app(AppState { db });

    let (status, _, body) = send(app.clone(), get("/healthz")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");

    let (status, _, spec) = send(app, get("/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(spec["paths"]["/api/v1/whatsapp-templates"]["post"].is_object());
    assert!(spec["paths"]["/api/v1/whatsapp-templates/{id}"]["get"].is_object());
}
