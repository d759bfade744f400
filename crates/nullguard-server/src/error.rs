//! Request-level errors raised before the null-field check runs.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Body is not valid JSON.
    #[error("malformed JSON body: {message}")]
    MalformedBody { message: String },

    /// Missing or wrong `Content-Type`.
    #[error("unsupported media type: {message}")]
    UnsupportedMediaType { message: String },

    /// Body is valid JSON but its root is not an object.
    #[error("request body must be a JSON object, got {kind}")]
    NotAnObject { kind: &'static str },

    #[error("request body too large: {message}")]
    BodyTooLarge { message: String },

    #[error("nesting depth {depth} exceeds limit {max}")]
    DepthExceeded { depth: usize, max: usize },
}

impl ApiError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedBody { .. } => "E_MALFORMED_BODY",
            Self::UnsupportedMediaType { .. } => "E_UNSUPPORTED_MEDIA_TYPE",
            Self::NotAnObject { .. } => "E_NOT_AN_OBJECT",
            Self::BodyTooLarge { .. } => "E_BODY_TOO_LARGE",
            Self::DepthExceeded { .. } => "E_DEPTH_EXCEEDED",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody { .. } | Self::DepthExceeded { .. } => StatusCode::BAD_REQUEST,
            Self::NotAnObject { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::UnsupportedMediaType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection.status() {
            StatusCode::UNSUPPORTED_MEDIA_TYPE => Self::UnsupportedMediaType { message },
            StatusCode::PAYLOAD_TOO_LARGE => Self::BodyTooLarge { message },
            // Syntax (400) and data (422) errors both mean the body is unusable.
            _ => Self::MalformedBody { message },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::warn!(code = self.code(), error = %self, "request rejected");
        let body = serde_json::json!({
            "status": "error",
            "code": self.code(),
            "message": self.to_string(),
        });
        (self.status(), Json(body)).into_response()
    }
}
