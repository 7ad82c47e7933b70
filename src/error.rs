//! # Error Handling
//!
//! Repository-level error taxonomy plus the problem+json [`ApiError`] the HTTP
//! layer renders, with trace id propagation.

use std::fmt;

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, RuntimeErr, SqlErr};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;
use utoipa::ToSchema;

use crate::telemetry;

/// Which store-enforced rule rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    ForeignKey,
    Unique,
    Other,
}

impl ConstraintKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintKind::ForeignKey => "foreign_key",
            ConstraintKind::Unique => "unique",
            ConstraintKind::Other => "other",
        }
    }
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors surfaced by repositories.
///
/// Database failures keep the original [`DbErr`] as their source so callers
/// see exactly what the store reported.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{kind} constraint violation: {source}")]
    ConstraintViolation {
        kind: ConstraintKind,
        #[source]
        source: DbErr,
    },
    #[error("database unavailable: {0}")]
    Transport(#[source] DbErr),
    #[error("database error: {0}")]
    Database(#[source] DbErr),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation failed: {0}")]
    Validation(String),
}

impl RepositoryError {
    /// Classify a SeaORM error into the repository taxonomy.
    pub fn database_error(error: DbErr) -> Self {
        if let Some(kind) = constraint_kind(&error) {
            return RepositoryError::ConstraintViolation {
                kind,
                source: error,
            };
        }

        if is_transport_failure(&error) {
            return RepositoryError::Transport(error);
        }

        RepositoryError::Database(error)
    }

    pub fn validation_error<S: Into<String>>(message: S) -> Self {
        RepositoryError::Validation(message.into())
    }

    /// Constraint kind when this is a constraint violation.
    pub fn constraint_kind(&self) -> Option<ConstraintKind> {
        match self {
            RepositoryError::ConstraintViolation { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

impl From<DbErr> for RepositoryError {
    fn from(error: DbErr) -> Self {
        RepositoryError::database_error(error)
    }
}

fn constraint_kind(error: &DbErr) -> Option<ConstraintKind> {
    use sea_orm::sqlx::error::ErrorKind;

    const PG_FOREIGN_KEY: &str = "23503";
    const PG_UNIQUE: &str = "23505";
    const SQLITE_FOREIGN_KEY: &str = "787";
    const SQLITE_UNIQUE_CODES: &[&str] = &["1555", "2067"];

    match error.sql_err() {
        Some(SqlErr::ForeignKeyConstraintViolation(_)) => return Some(ConstraintKind::ForeignKey),
        Some(SqlErr::UniqueConstraintViolation(_)) => return Some(ConstraintKind::Unique),
        _ => {}
    }

    let sqlx_err = match error {
        DbErr::Query(RuntimeErr::SqlxError(sqlx_err))
        | DbErr::Exec(RuntimeErr::SqlxError(sqlx_err)) => sqlx_err,
        _ => return None,
    };

    let db_error = sqlx_err.as_database_error()?;

    match db_error.kind() {
        ErrorKind::ForeignKeyViolation => return Some(ConstraintKind::ForeignKey),
        ErrorKind::UniqueViolation => return Some(ConstraintKind::Unique),
        ErrorKind::NotNullViolation | ErrorKind::CheckViolation => {
            return Some(ConstraintKind::Other);
        }
        _ => {}
    }

    let code = db_error.code()?;
    let code: &str = &code;
    if code == PG_FOREIGN_KEY || code == SQLITE_FOREIGN_KEY {
        Some(ConstraintKind::ForeignKey)
    } else if code == PG_UNIQUE || SQLITE_UNIQUE_CODES.contains(&code) {
        Some(ConstraintKind::Unique)
    } else if code.starts_with("23") {
        // SQLSTATE class 23: integrity constraint violation
        Some(ConstraintKind::Other)
    } else {
        None
    }
}

fn is_transport_failure(error: &DbErr) -> bool {
    use sea_orm::sqlx::Error as SqlxError;

    match error {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => true,
        DbErr::Query(RuntimeErr::SqlxError(sqlx_err))
        | DbErr::Exec(RuntimeErr::SqlxError(sqlx_err)) => matches!(
            sqlx_err,
            SqlxError::Io(_)
                | SqlxError::Tls(_)
                | SqlxError::PoolTimedOut
                | SqlxError::PoolClosed
                | SqlxError::WorkerCrashed
        ),
        _ => false,
    }
}

/// Unified API error response structure
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiError {
    /// HTTP status code for the response
    #[serde(skip_serializing, skip_deserializing)]
    pub status: StatusCode,
    /// Error code for programmatic handling
    pub code: Box<str>,
    /// Human-readable error message
    pub message: Box<str>,
    /// Additional error details (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Box<serde_json::Value>>,
    /// Correlation trace ID for debugging (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<Box<str>>,
}

impl ApiError {
    /// Create a new API error with the given status code and message
    pub fn new(status: StatusCode, code: &str, message: &str) -> Self {
        Self {
            status,
            code: code.into(),
            message: message.into(),
            details: None,
            trace_id: Self::current_trace_id(),
        }
    }

    /// Add details to the error
    pub fn with_details<V: Into<serde_json::Value>>(mut self, details: V) -> Self {
        self.details = Some(Box::new(details.into()));
        self
    }

    /// 503 for a store that cannot be reached
    pub fn service_unavailable() -> Self {
        Self::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "SERVICE_UNAVAILABLE",
            "Service Unavailable",
        )
    }

    /// Trace id of the active request, or a short generated correlation id
    fn current_trace_id() -> Option<Box<str>> {
        telemetry::current_trace_id()
            .map(|trace_id| trace_id.into_boxed_str())
            .or_else(|| {
                Some(format!("corr-{}", &uuid::Uuid::new_v4().to_string()[..8]).into_boxed_str())
            })
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let mut headers = HeaderMap::new();
        headers.insert(
            "content-type",
            HeaderValue::from_static("application/problem+json"),
        );

        (self.status, headers, axum::Json(self)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = match rejection {
            JsonRejection::JsonDataError(err) => format!("Invalid JSON: {}", err.body_text()),
            JsonRejection::JsonSyntaxError(err) => {
                format!("JSON syntax error: {}", err.body_text())
            }
            JsonRejection::MissingJsonContentType(_) => {
                "Missing 'Content-Type: application/json' header".to_string()
            }
            _ => "Invalid request body".to_string(),
        };

        Self::new(StatusCode::BAD_REQUEST, "VALIDATION_FAILED", &message)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "VALIDATION_FAILED",
            &format!("Invalid path parameter: {}", rejection.body_text()),
        )
    }
}

impl From<RepositoryError> for ApiError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Validation(message) => {
                Self::new(StatusCode::BAD_REQUEST, "VALIDATION_FAILED", &message)
            }
            RepositoryError::NotFound(message) => {
                Self::new(StatusCode::NOT_FOUND, "NOT_FOUND", &message)
            }
            RepositoryError::ConstraintViolation {
                kind: ConstraintKind::Unique,
                ..
            } => Self::new(StatusCode::CONFLICT, "CONFLICT", "Resource already exists")
                .with_details(json!({ "constraint": ConstraintKind::Unique.as_str() })),
            RepositoryError::ConstraintViolation {
                kind: ConstraintKind::ForeignKey,
                ..
            } => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "CONSTRAINT_VIOLATION",
                "Referenced record does not exist",
            )
            .with_details(json!({ "constraint": ConstraintKind::ForeignKey.as_str() })),
            RepositoryError::ConstraintViolation { kind, .. } => Self::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "CONSTRAINT_VIOLATION",
                "Write rejected by a database constraint",
            )
            .with_details(json!({ "constraint": kind.as_str() })),
            RepositoryError::Transport(_) => Self::service_unavailable(),
            RepositoryError::Database(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_SERVER_ERROR",
                "Database error occurred",
            ),
        }
    }
}

/// Create a validation error with field details
pub fn validation_error(message: &str, field_errors: serde_json::Value) -> ApiError {
    ApiError::new(StatusCode::BAD_REQUEST, "VALIDATION_FAILED", message).with_details(field_errors)
}
