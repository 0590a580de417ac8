//! Account service - user account lifecycle and authentication.
//!
//! Lookups that miss fail with the domain `NotFound`. Every collaborator
//! failure (storage, hashing, credentials, token signing) is returned
//! unchanged for the boundary to translate.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use common::AppResult;
use domain::{
    AuthenticatedPrincipal, AuthenticatedUser, DomainError, LoginRequest, NewUser,
    RegisterRequest, User, UserId, OP_CHANGE_PASSWORD, OP_DELETE_USER, OP_GET_BY_ID,
    OP_UPDATE_PROFILE,
};

use crate::repository::UserRepository;
use crate::security::{Authenticator, CredentialHasher, TokenIssuer};

/// Account service trait for dependency injection.
#[async_trait]
pub trait AccountService: Send + Sync {
    /// Create a user from a registration request.
    ///
    /// Does not check username uniqueness; callers look the name up first.
    async fn register(&self, request: RegisterRequest) -> AppResult<User>;

    /// Look a user up by username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// All users, in repository order
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Get user by ID
    async fn get_by_id(&self, id: UserId) -> AppResult<User>;

    /// Overwrite name, email and contact number
    async fn update_profile(
        &self,
        id: UserId,
        name: String,
        email: String,
        contact_no: String,
    ) -> AppResult<User>;

    /// Replace the stored password with the hash of `new_password`
    async fn change_password(&self, id: UserId, new_password: &str) -> AppResult<User>;

    /// Delete a user and return the users that remain
    async fn delete_user(&self, id: UserId) -> AppResult<Vec<User>>;

    /// Verify credentials and issue a session token
    async fn authenticate(&self, request: LoginRequest) -> AppResult<AuthenticatedUser>;
}

/// Concrete implementation of AccountService over its collaborators.
pub struct AccountManager {
    repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn CredentialHasher>,
    authenticator: Arc<dyn Authenticator>,
    issuer: Arc<dyn TokenIssuer>,
}

impl AccountManager {
    /// Create new account service instance
    pub fn new(
        repo: Arc<dyn UserRepository>,
        hasher: Arc<dyn CredentialHasher>,
        authenticator: Arc<dyn Authenticator>,
        issuer: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            repo,
            hasher,
            authenticator,
            issuer,
        }
    }

    async fn require(&self, id: UserId, operation: &str) -> AppResult<User> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found(id, operation).into())
    }
}

#[async_trait]
impl AccountService for AccountManager {
    async fn register(&self, request: RegisterRequest) -> AppResult<User> {
        let password_hash = self.hasher.hash(&request.password)?;
        let user = self
            .repo
            .create(NewUser::from_request(request, password_hash))
            .await?;

        info!(user_id = user.id, username = %user.username, "user registered");
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.repo.find_by_username(username).await
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repo.list().await
    }

    async fn get_by_id(&self, id: UserId) -> AppResult<User> {
        self.require(id, OP_GET_BY_ID).await
    }

    async fn update_profile(
        &self,
        id: UserId,
        name: String,
        email: String,
        contact_no: String,
    ) -> AppResult<User> {
        let mut user = self.require(id, OP_UPDATE_PROFILE).await?;
        user.update_profile(name, email, contact_no);

        let user = self.repo.save(user).await?;
        info!(user_id = id, "user profile updated");
        Ok(user)
    }

    async fn change_password(&self, id: UserId, new_password: &str) -> AppResult<User> {
        let mut user = self.require(id, OP_CHANGE_PASSWORD).await?;
        user.set_password_hash(self.hasher.hash(new_password)?);

        let user = self.repo.save(user).await?;
        info!(user_id = id, "user password changed");
        Ok(user)
    }

    async fn delete_user(&self, id: UserId) -> AppResult<Vec<User>> {
        self.require(id, OP_DELETE_USER).await?;
        self.repo.delete(id).await?;
        info!(user_id = id, "user deleted");

        self.repo.list().await
    }

    async fn authenticate(&self, request: LoginRequest) -> AppResult<AuthenticatedUser> {
        let user = self
            .authenticator
            .verify(&request.username, &request.password)
            .await?;

        let principal = AuthenticatedPrincipal::from(&user);
        let token = self.issuer.issue(&principal)?;
        debug!(user_id = user.id, "user authenticated");

        Ok(AuthenticatedUser { user, token })
    }
}
