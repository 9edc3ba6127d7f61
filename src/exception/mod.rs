use crate::pipe::PipeError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// An error ready to be rendered as an HTTP response
///
/// Every failure leaves the service with the same body shape:
/// `{"statusCode", "message", "error", "timestamp"}`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpException {
    pub status: StatusCode,
    pub message: String,
}

impl HttpException {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// A 500 that never carries internal detail
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

impl From<PipeError> for HttpException {
    fn from(err: PipeError) -> Self {
        Self::bad_request(err.to_string())
    }
}

/// Malformed or incomplete request bodies keep axum's status code but use
/// the common body shape.
impl From<JsonRejection> for HttpException {
    fn from(rejection: JsonRejection) -> Self {
        Self::new(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for HttpException {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "statusCode": self.status.as_u16(),
            "message": self.message,
            "error": self.status.canonical_reason().unwrap_or("Unknown"),
            "timestamp": chrono::Utc::now().to_rfc3339(),
        }));
        (self.status, body).into_response()
    }
}
