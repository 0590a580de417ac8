//! Error handling for the account service.
//!
//! Two channels are kept apart:
//! - `AppError::Domain` wraps the structured domain failure (`NotFound`).
//! - Every other variant is a collaborator failure passed through as-is.
//!
//! Both convert into the uniform HTTP envelope at the boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::DomainError;
use thiserror::Error;

use crate::response::BaseResponse;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    // Domain
    #[error(transparent)]
    Domain(#[from] DomainError),

    // Authentication check
    #[error("Invalid credentials")]
    InvalidCredentials,

    // Collaborator errors
    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[cfg(feature = "database")]
    #[error("Database error")]
    Database(#[from] sea_orm::DbErr),

    #[cfg(feature = "jwt")]
    #[error("Token error")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Domain(DomainError::NotFound { .. }) => "NOT_FOUND",
            AppError::InvalidCredentials => "UNAUTHORIZED",
            _ => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Domain(DomainError::NotFound { .. }) => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// True for failures the account domain defines itself.
    pub fn is_domain(&self) -> bool {
        matches!(self, AppError::Domain(_))
    }

    /// The domain failure, if this is one.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            AppError::Domain(err) => Some(err),
            _ => None,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            AppError::Domain(err) => err.to_string(),

            // Unknown user and wrong password look the same to the client
            AppError::InvalidCredentials => "Invalid username or password".to_string(),

            AppError::Hashing(msg) => {
                tracing::error!("Password hashing error: {}", msg);
                "An internal error occurred".to_string()
            }
            #[cfg(feature = "database")]
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "An internal error occurred".to_string()
            }
            #[cfg(feature = "jwt")]
            AppError::Jwt(e) => {
                tracing::error!("JWT error: {:?}", e);
                "An internal error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }

    pub fn hashing(msg: impl Into<String>) -> Self {
        AppError::Hashing(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(err) = self.as_domain() {
            tracing::debug!(user_id = err.id(), "request failed: {}", err);
        }

        let status = self.status();
        let body = BaseResponse::failure(self.code(), self.user_message());

        (status, body).into_response()
    }
}

impl From<domain::HashError> for AppError {
    fn from(err: domain::HashError) -> Self {
        AppError::Hashing(err.to_string())
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_domain_and_maps_to_404() {
        let err = AppError::from(DomainError::not_found(99, "Failed to retrieve user"));

        assert!(err.is_domain());
        assert_eq!(err.as_domain().map(DomainError::id), Some(99));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.code(), "NOT_FOUND");
    }

    #[test]
    fn collaborator_failures_are_not_domain() {
        assert!(!AppError::InvalidCredentials.is_domain());
        assert!(!AppError::hashing("boom").is_domain());
        assert_eq!(AppError::InvalidCredentials.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::internal("boom").status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn internal_details_are_hidden() {
        let message = AppError::hashing("salt generation failed").user_message();
        assert_eq!(message, "An internal error occurred");
    }

    #[tokio::test]
    async fn response_body_is_failure_envelope() {
        let response = AppError::from(DomainError::not_found(5, "Failed to delete user"))
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["result"], "N");
        assert_eq!(json["code"], "NOT_FOUND");
        assert_eq!(json["message"], "Failed to delete user: user 5 not found");
    }
}
