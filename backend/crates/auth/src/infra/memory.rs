//! In-Memory User Repository
//!
//! Process-local store with the same uniqueness guarantee as the Postgres
//! store. Used by tests and for running without a database.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::domain::entity::user::{NewUser, User};
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }

    /// Insert a user record as-is, bypassing validation
    pub async fn insert_raw(&self, user: User) {
        self.users.write().await.insert(user.user_id, user);
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, new_user: &NewUser) -> AuthResult<User> {
        // Check and insert under one write lock
        let mut users = self.users.write().await;
        if users.values().any(|u| u.email == new_user.email) {
            return Err(AuthError::EmailTaken);
        }

        let user = User {
            user_id: UserId::new(),
            user_name: new_user.user_name.clone(),
            email: new_user.email.clone(),
            password_hash: new_user.password_hash.clone(),
            created_at: Utc::now(),
        };
        users.insert(user.user_id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| u.email.as_str() == email)
            .cloned())
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(self.users.read().await.values().any(|u| &u.email == email))
    }
}
