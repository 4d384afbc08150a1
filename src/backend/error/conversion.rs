/**
 * Error Conversion
 *
 * `IntoResponse` for `BackendError`, so handlers can return
 * `Result<_, BackendError>` and have failures rendered as
 * `{"error": "..."}` with the status from the `ErrorCode` table.
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::{BackendError, ErrorCode};
use crate::shared::ErrorBody;

/// Build the JSON error response for a code
pub fn error_response(code: ErrorCode) -> Response {
    let (status, message) = code.response_parts();

    let body = ErrorBody {
        error: message.to_string(),
    };

    (status, Json(body)).into_response()
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        if self.is_masked() {
            tracing::error!("request failed: {}", self);
        } else {
            tracing::debug!("request rejected: {}", self);
        }

        error_response(self.code())
    }
}
