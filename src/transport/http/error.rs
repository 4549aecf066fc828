//! The single place a `PersistenceError` becomes an HTTP response.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::domain::error::PersistenceError;
use crate::transport::http::types::ErrorBody;

impl IntoResponse for PersistenceError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let message = match &self {
            // Storage failures are logged in full and surfaced generically.
            PersistenceError::Storage(err) => {
                tracing::error!(error = %err, "storage failure");
                "internal server error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
