//! In-process implementation of UserRepository.
//!
//! Used by `serve --in-memory` and by integration tests. A single lock
//! serializes writers, so every call is atomic.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult};
use domain::{NewUser, User, UserId};

use super::UserRepository;

#[derive(Default)]
struct Inner {
    users: BTreeMap<UserId, User>,
    last_id: UserId,
}

/// In-memory user store; identifiers start at 1 and are never reused.
#[derive(Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        Ok(self.inner.read().await.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self
            .inner
            .read()
            .await
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.inner.read().await.users.values().cloned().collect())
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let mut inner = self.inner.write().await;
        inner.last_id += 1;
        let user = user.into_user(inner.last_id);
        inner.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let mut inner = self.inner.write().await;
        match inner.users.get_mut(&user.id) {
            Some(stored) => {
                // username is immutable once created
                stored.name = user.name;
                stored.email = user.email;
                stored.contact_no = user.contact_no;
                stored.password_hash = user.password_hash;
                Ok(stored.clone())
            }
            None => Err(AppError::internal(format!(
                "cannot save user {}: no such record",
                user.id
            ))),
        }
    }

    async fn delete(&self, id: UserId) -> AppResult<()> {
        self.inner.write().await.users.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(username: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            name: "Name".to_string(),
            email: "mail@x.com".to_string(),
            contact_no: "123".to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let store = InMemoryUserStore::new();

        let first = store.create(new_user("a")).await.unwrap();
        let second = store.create(new_user("b")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(store.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let store = InMemoryUserStore::new();
        let first = store.create(new_user("a")).await.unwrap();
        store.delete(first.id).await.unwrap();

        let next = store.create(new_user("b")).await.unwrap();

        assert_eq!(next.id, 2);
        assert!(store.find_by_id(first.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_username_matches_exactly() {
        let store = InMemoryUserStore::new();
        store.create(new_user("user001")).await.unwrap();

        assert!(store.find_by_username("user001").await.unwrap().is_some());
        assert!(store.find_by_username("USER001").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn save_keeps_username() {
        let store = InMemoryUserStore::new();
        let mut user = store.create(new_user("user001")).await.unwrap();
        user.username = "renamed".to_string();
        user.name = "New Name".to_string();

        let saved = store.save(user).await.unwrap();

        assert_eq!(saved.username, "user001");
        assert_eq!(saved.name, "New Name");
    }

    #[tokio::test]
    async fn save_of_unknown_id_fails() {
        let store = InMemoryUserStore::new();
        let ghost = new_user("ghost").into_user(99);

        assert!(store.save(ghost).await.is_err());
        assert!(store.list().await.unwrap().is_empty());
    }
}
