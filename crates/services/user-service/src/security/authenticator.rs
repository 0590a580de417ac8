//! Username/password authentication check.

use std::sync::Arc;

use async_trait::async_trait;

use common::{AppError, AppResult};
use domain::User;

use super::hasher::CredentialHasher;
use crate::repository::UserRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Hash compared against when the username is unknown, so both failure
/// paths do the same work.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$ZHVtbXlzYWx0MTIzNDU2$hGqxa6NN2WPb1dWMhkTUKtVPHpR0rjPDLtsbTFZlsMc";

/// Verify a username/password pair.
///
/// Any mismatch is reported as `AppError::InvalidCredentials`, whatever
/// the cause.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn verify(&self, username: &str, password: &str) -> AppResult<User>;
}

/// Checks credentials against the stored hash of the named user.
pub struct CredentialAuthenticator {
    repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl CredentialAuthenticator {
    pub fn new(repo: Arc<dyn UserRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { repo, hasher }
    }
}

#[async_trait]
impl Authenticator for CredentialAuthenticator {
    async fn verify(&self, username: &str, password: &str) -> AppResult<User> {
        let found = self.repo.find_by_username(username).await?;

        let stored_hash = found
            .as_ref()
            .map(|u| u.password_hash.as_str())
            .unwrap_or(DUMMY_HASH);
        let password_valid = self.hasher.verify(password, stored_hash);

        match found {
            Some(user) if password_valid => Ok(user),
            _ => {
                tracing::warn!(username, "authentication rejected");
                Err(AppError::InvalidCredentials)
            }
        }
    }
}
