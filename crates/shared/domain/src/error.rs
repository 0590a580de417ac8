//! Domain-level errors.
//!
//! `NotFound` is the only failure the account domain defines itself.
//! Collaborator failures (storage, hashing, credentials, token signing) are
//! not domain errors and never pass through this type.

use thiserror::Error;

use crate::user::UserId;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No user exists with the given identifier
    #[error("{message}: user {id} not found")]
    NotFound { id: UserId, message: String },
}

impl DomainError {
    /// Create a not found error for the operation described by `message`
    pub fn not_found(id: UserId, message: impl Into<String>) -> Self {
        DomainError::NotFound {
            id,
            message: message.into(),
        }
    }

    /// Identifier the failure refers to
    pub fn id(&self) -> UserId {
        match self {
            DomainError::NotFound { id, .. } => *id,
        }
    }
}
