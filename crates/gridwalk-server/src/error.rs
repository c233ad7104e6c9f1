//! Mapping of service errors onto HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gridwalk_core::errors::{ExError, ExErrorKind};
use gridwalk_core::GridError;
use serde_json::json;

/// Body returned for every server-side failure
pub const GENERIC_FAILURE: &str = "request failed";

/// Handler error
///
/// Client errors (invalid input, overflow) answer 400 with their message.
/// Everything else answers 500 with a generic body; details go to the log.
#[derive(Debug)]
pub struct ApiError(pub ExError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        if self.0.kind().is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }

    pub fn internal(op: &str, message: impl Into<String>) -> Self {
        Self(
            ExError::new(ExErrorKind::Internal)
                .with_op(op.to_string())
                .with_message(message),
        )
    }
}

impl From<ExError> for ApiError {
    fn from(err: ExError) -> Self {
        Self(err)
    }
}

impl From<GridError> for ApiError {
    fn from(err: GridError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_client_error() {
            self.0.message().to_string()
        } else {
            tracing::error!(
                err_code = self.0.code(),
                request_id = self.0.request_id().map(|id| id.as_str()),
                trace_id = self.0.trace_id().map(|id| id.as_str()),
                "{}",
                self.0
            );
            GENERIC_FAILURE.to_string()
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_is_bad_request() {
        let err: ApiError = GridError::MissingSteps { index: 1 }.into();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_persistence_is_internal() {
        let err = ApiError(ExError::new(ExErrorKind::Persistence).with_message("disk full"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
