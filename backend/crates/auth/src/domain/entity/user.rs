//! User Entity
//!
//! A registered account. The password hash never leaves the domain layer;
//! callers outside it receive a [`UserProfile`].

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    email::Email, user_id::UserId, user_name::UserName, user_password::UserPassword,
};

/// User entity as persisted
#[derive(Debug, Clone)]
pub struct User {
    /// Store-assigned UUID
    pub user_id: UserId,
    /// Display name
    pub user_name: UserName,
    /// Login email (unique)
    pub email: Email,
    /// bcrypt hash
    pub password_hash: UserPassword,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Public view without the password hash
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            user_id: self.user_id,
            user_name: self.user_name.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
        }
    }
}

/// Fields supplied when inserting a user. The store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub user_name: UserName,
    pub email: Email,
    pub password_hash: UserPassword,
}

/// User record with the password hash stripped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub user_id: UserId,
    pub user_name: UserName,
    pub email: Email,
    pub created_at: DateTime<Utc>,
}
