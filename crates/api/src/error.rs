use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use uuid::Uuid;

use planttracker_core::error::CoreError;
use planttracker_db::DbError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`DbError`] for persistence
/// errors, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce the problem body -- no component below this formats responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `planttracker_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A persistence error from `planttracker_db`.
    #[error("Database error: {0}")]
    Db(#[from] DbError),

    /// A bad request argument (malformed or nil id) with a human-readable
    /// message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The request body could not be deserialized.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// A 404 that is not tied to a single id (e.g. an empty listing).
    #[error("Not found: {0}")]
    NotFound(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

const INTERNAL_TITLE: &str = "Internal Server Error Occurred";
const INTERNAL_DETAIL: &str = "An internal error occurred";

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let raw = self.to_string();
        let trace_id = Uuid::new_v4().to_string();

        let (status, title, detail) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => {
                    (StatusCode::NOT_FOUND, "Resource Not Found", core.to_string())
                }
                CoreError::Validation(errors) => {
                    (StatusCode::BAD_REQUEST, "Validation Error", errors.to_string())
                }
                CoreError::Mapping(msg) => {
                    (StatusCode::BAD_REQUEST, "Mapping Error", msg.clone())
                }
                CoreError::Unauthorized(msg) => {
                    (StatusCode::UNAUTHORIZED, "Unauthorized Access", msg.clone())
                }
                CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "Forbidden", msg.clone()),
                CoreError::Internal(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_TITLE,
                    INTERNAL_DETAIL.to_string(),
                ),
            },

            // --- Persistence errors ---
            AppError::Db(err) => classify_db_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Invalid Argument Provided", msg.clone())
            }
            AppError::InvalidBody(_) => (
                StatusCode::BAD_REQUEST,
                "Invalid Request Body Format",
                "The submitted data is malformed or does not match the expected structure."
                    .to_string(),
            ),
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, "Resource Not Found", msg.clone())
            }
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_TITLE,
                INTERNAL_DETAIL.to_string(),
            ),
        };

        // Server faults are always logged with their trace id; client errors
        // are request noise, not faults.
        if status.is_server_error() {
            tracing::error!(trace_id = %trace_id, error = %raw, "request failed");
        } else {
            tracing::debug!(trace_id = %trace_id, error = %raw, "request rejected");
        }

        let body = json!({
            "title": title,
            "status": status.as_u16(),
            "detail": detail,
            "extensions": {
                "traceId": trace_id,
                "error": raw,
            },
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a persistence error into an HTTP status, problem title, and
/// detail.
///
/// - `RowNotFound` maps to 404.
/// - Row-to-domain mapping failures map to 400.
/// - Everything else maps to 500 with a sanitized message.
fn classify_db_error(err: &DbError) -> (StatusCode, &'static str, String) {
    match err {
        DbError::Sqlx(sqlx::Error::RowNotFound) => (
            StatusCode::NOT_FOUND,
            "Resource Not Found",
            "Resource not found".to_string(),
        ),
        DbError::Mapping(msg) => (StatusCode::BAD_REQUEST, "Mapping Error", msg.clone()),
        DbError::Sqlx(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_TITLE,
            "An unexpected error occurred talking to the database".to_string(),
        ),
    }
}
