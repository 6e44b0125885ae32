//! Fetch Self Use Case
//!
//! Resolves a bearer token to the profile of the user it was issued for.

use std::sync::Arc;

use platform::token::{TokenError, TokenIssuer};

use crate::domain::entity::user::UserProfile;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_id::UserId;
use crate::error::{AuthError, AuthResult};

/// Fetch self use case
pub struct FetchSelfUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenIssuer>,
}

impl<U> FetchSelfUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenIssuer>) -> Self {
        Self { user_repo, tokens }
    }

    pub async fn execute(&self, token: &str) -> AuthResult<UserProfile> {
        let subject = self.tokens.verify(token).map_err(AuthError::Unauthorized)?;

        // A validly signed token whose subject is not a user id
        let user_id: UserId = subject
            .parse()
            .map_err(|_| AuthError::Unauthorized(TokenError::Malformed))?;

        let user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        tracing::debug!(user_id = %user.user_id, "Fetched self");

        Ok(user.profile())
    }
}
