//! Error types for the hazard API server.
//!
//! [`ApiError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.
//! Malformed request bodies and query strings never reach this type;
//! Axum's extractors reject those with a 4xx before the handler runs.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use oceanpulse_db::DbError;

/// Errors that can occur in the hazard API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A data layer operation failed.
    #[error("database error: {0}")]
    Database(#[from] DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Database(DbError::NoRowReturned) => {
                (StatusCode::INTERNAL_SERVER_ERROR, String::from("Insert failed"))
            }
            Self::Database(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("database error: {e}"),
            ),
        };

        tracing::error!(error = %self, status = status.as_u16(), "Request failed");

        let body = serde_json::json!({
            "error": message,
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_errors_map_to_500() {
        let response = ApiError::Database(DbError::NoRowReturned).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let lost = sqlx::Error::PoolClosed;
        let response = ApiError::Database(DbError::Postgres(lost)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_display_includes_source() {
        let err = ApiError::Database(DbError::Config("bad url".to_owned()));
        assert_eq!(
            err.to_string(),
            "database error: Configuration error: bad url"
        );
    }
}
