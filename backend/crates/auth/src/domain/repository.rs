//! Repository Traits
//!
//! Persistence interface for users. Implemented by the Postgres store and
//! by the in-memory store used in tests.

use crate::domain::entity::user::{NewUser, User};
use crate::domain::value_object::{email::Email, user_id::UserId};
use crate::error::AuthResult;

/// User repository
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a user. Fails with `EmailTaken` if the email is already stored,
    /// including when a concurrent insert wins the race.
    async fn create(&self, new_user: &NewUser) -> AuthResult<User>;

    /// Find user by id
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Find user by exact email
    async fn find_by_email(&self, email: &str) -> AuthResult<Option<User>>;

    /// Check if email is already registered
    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool>;
}
