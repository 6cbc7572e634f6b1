//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use roomdesk_domain::error::{RoomDeskError, ValidationError};

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`RoomDeskError`] to an HTTP response with appropriate status code.
///
/// Storage failures are echoed to the caller with their message.
#[derive(Debug)]
pub struct ApiError(RoomDeskError);

impl From<RoomDeskError> for ApiError {
    fn from(err: RoomDeskError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(err.into())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self(RoomDeskError::Malformed(Box::new(err)))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            RoomDeskError::Validation(_) => StatusCode::BAD_REQUEST,
            RoomDeskError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            RoomDeskError::Malformed(err) => {
                tracing::error!(error = %err, "undecodable request body");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            RoomDeskError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
