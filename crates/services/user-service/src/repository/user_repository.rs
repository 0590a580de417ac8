//! User repository trait and its SeaORM implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use common::AppResult;
use domain::{NewUser, User, UserId};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Implementations provide their own concurrency control; callers rely only
/// on each call being atomic on its own.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// List all users in storage order
    async fn list(&self) -> AppResult<Vec<User>>;

    /// Insert a new user, assigning its identifier
    async fn create(&self, user: NewUser) -> AppResult<User>;

    /// Overwrite an existing user
    async fn save(&self, user: User) -> AppResult<User>;

    /// Remove user by ID
    async fn delete(&self, id: UserId) -> AppResult<()>;
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;
        Ok(result.map(User::from))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .order_by_asc(user::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let model = ActiveModel::from(user).insert(&self.db).await?;
        Ok(User::from(model))
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let model = ActiveModel::from(user).update(&self.db).await?;
        Ok(User::from(model))
    }

    async fn delete(&self, id: UserId) -> AppResult<()> {
        UserEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(())
    }
}
