//! Uniform response envelope.

use axum::{response::IntoResponse, Json};
use serde::Serialize;

/// Result code of a successful call
pub const RESULT_SUCCESS: &str = "Y";

/// Result code of a failed call
pub const RESULT_FAILURE: &str = "N";

/// Envelope wrapping every response body.
#[derive(Debug, Serialize)]
pub struct BaseResponse<T: Serialize> {
    pub result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<T>,
}

impl<T: Serialize> BaseResponse<T> {
    pub fn success(payload: T) -> Self {
        Self {
            result: RESULT_SUCCESS,
            code: None,
            message: None,
            payload: Some(payload),
        }
    }
}

impl BaseResponse<()> {
    pub fn failure(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            result: RESULT_FAILURE,
            code: Some(code),
            message: Some(message.into()),
            payload: None,
        }
    }
}

impl<T: Serialize> IntoResponse for BaseResponse<T> {
    fn into_response(self) -> axum::response::Response {
        Json(self).into_response()
    }
}
