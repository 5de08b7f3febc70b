//! Uniform error responses.
//!
//! Every failure leaves the server as `{"error": "<message>"}`. Internal
//! failures carry only the operation context, never the underlying error.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::{debug, error, warn};
use reportdesk_core::{ErrorKind, ServiceError};
use serde_json::json;

#[derive(Debug)]
pub(crate) struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub(crate) fn unauthorized() -> Self {
        Self::new(
            StatusCode::UNAUTHORIZED,
            "Unauthorized: Invalid or missing token",
        )
    }

    pub(crate) fn method_not_allowed() -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    }

    pub(crate) fn internal(context: &'static str) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, context)
    }

    /// Rejected JSON bodies (syntax, types, content type) are caller errors.
    ///
    /// The parser detail goes to the log only.
    pub(crate) fn malformed_body(rejection: JsonRejection) -> Self {
        debug!(
            "event=body_rejected module=http status={} detail={:?}",
            rejection.status().as_u16(),
            rejection.body_text()
        );
        Self::new(StatusCode::BAD_REQUEST, "Malformed request body")
    }

    pub(crate) fn from_service(err: ServiceError, context: &'static str) -> Self {
        match err.kind() {
            ErrorKind::Validation => Self::new(StatusCode::BAD_REQUEST, err.to_string()),
            ErrorKind::NotFound => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            ErrorKind::Conflict => {
                warn!(
                    "event=request_failed module=http status=conflict context={:?} error={}",
                    context, err
                );
                Self::internal(context)
            }
            ErrorKind::Internal => {
                error!(
                    "event=request_failed module=http status=error context={:?} error={}",
                    context, err
                );
                Self::internal(context)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

pub(crate) async fn route_not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Route not found")
}
