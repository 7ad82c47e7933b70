//! # Tests for Handlers
//!
//! This module contains unit tests for API handlers.

use crate::handlers::{healthz, root};
use crate::server::AppState;
use axum::{extract::State, http::StatusCode, response::Json};
use sea_orm::DatabaseConnection;
use serde_json::Value;

#[tokio::test]
async fn test_root_handler_returns_expected_service_info() {
    let Json(service_info) = root().await;

    assert_eq!(service_info.service, "whatsapp-templates");
    assert_eq!(service_info.version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn test_root_handler_returns_valid_json() {
    let Json(service_info) = root().await;

    let json_value: Value = serde_json::to_value(&service_info).unwrap();
    assert!(json_value.is_object());
    assert!(json_value.get("service").is_some());
    assert!(json_value.get("version").is_some());
}

#[tokio::test]
async fn test_healthz_reports_unavailable_without_database() {
    let state = AppState {
        db: DatabaseConnection::default(),
    };

    let error = healthz(State(state)).await.unwrap_err();

    assert_eq!(error.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(&*error.code, "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn test_healthz_ok_with_sqlite() {
    let db = sea_orm::Database::connect("sqlite::memory:").await.unwrap();
    let state = AppState { db };

    let Json(status) = healthz(State(state)).await.unwrap();

    assert_eq!(status.status, "ok");
    assert_eq!(status.database, "ok");
}
