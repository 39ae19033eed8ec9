//! JSON error responses for the HTTP endpoint.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use vs_core::SkillError;

/// API error with status code and message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn malformed_request(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::BAD_REQUEST, code: "malformed_request", message: msg.into() }
    }
    pub fn application_mismatch(msg: impl Into<String>) -> Self {
        Self { status: StatusCode::FORBIDDEN, code: "application_mismatch", message: msg.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code,
                "message": self.message,
            }
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<SkillError> for ApiError {
    fn from(err: SkillError) -> Self {
        match &err {
            SkillError::MalformedRequest(_) => ApiError::malformed_request(err.to_string()),
        }
    }
}
