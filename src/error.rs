use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ReportError {
    #[error("no snapshot stored for {0}")]
    SnapshotNotFound(String),

    #[error("no snapshots stored yet")]
    NoSnapshots,

    #[error("Database error: {0}")]
    DatabaseError(#[from] SqlxError),
}

impl IntoResponse for ReportError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match self {
            ReportError::SnapshotNotFound(date) => {
                (StatusCode::NOT_FOUND, format!("No data for {date}"))
            }
            ReportError::NoSnapshots => {
                (StatusCode::NOT_FOUND, "No data available".to_string())
            }
            ReportError::DatabaseError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred.".to_string(),
            ),
        };
        (status, Json(ApiErrorDetail { detail })).into_response()
    }
}

/// Standardized API error response body
#[derive(Serialize)]
pub struct ApiErrorDetail {
    pub detail: String,
}
