//! Authenticate Use Case
//!
//! Exchanges email and password for a signed bearer token.

use std::sync::Arc;

use platform::token::TokenIssuer;

use crate::domain::repository::UserRepository;
use crate::domain::value_object::{user_id::UserId, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Authenticate input
pub struct AuthenticateInput {
    pub email: String,
    pub password: String,
}

/// Authenticate output
#[derive(Debug)]
pub struct AuthenticateOutput {
    pub token: String,
    pub user_id: UserId,
}

/// Authenticate use case
pub struct AuthenticateUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    tokens: Arc<TokenIssuer>,
}

impl<U> AuthenticateUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, tokens: Arc<TokenIssuer>) -> Self {
        Self { user_repo, tokens }
    }

    /// Only `EmailNotFound`, `InvalidCredentials` and `Validation` pass
    /// through. Every other failure becomes `Internal`.
    pub async fn execute(&self, input: AuthenticateInput) -> AuthResult<AuthenticateOutput> {
        self.authenticate(input).await.map_err(|err| match err {
            AuthError::EmailNotFound | AuthError::InvalidCredentials | AuthError::Validation(_) => {
                err
            }
            other => AuthError::Internal(other.to_string()),
        })
    }

    async fn authenticate(&self, input: AuthenticateInput) -> AuthResult<AuthenticateOutput> {
        let user = self
            .user_repo
            .find_by_email(input.email.trim())
            .await?
            .ok_or(AuthError::EmailNotFound)?;

        let candidate = RawPassword::candidate(input.password);
        if !user.password_hash.verify(&candidate)? {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self
            .tokens
            .issue(&user.user_id.to_string())
            .map_err(|e| AuthError::TokenSigning(e.to_string()))?;

        tracing::info!(user_id = %user.user_id, "User authenticated");

        Ok(AuthenticateOutput {
            token,
            user_id: user.user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::application::register::{RegisterInput, RegisterUseCase};
    use crate::domain::entity::user::{NewUser, User};
    use crate::domain::value_object::{
        email::Email, user_name::UserName, user_password::UserPassword,
    };
    use crate::infra::memory::InMemoryUserRepository;
    use chrono::Utc;

    struct Fixture {
        repo: InMemoryUserRepository,
        tokens: Arc<TokenIssuer>,
        use_case: AuthenticateUseCase<InMemoryUserRepository>,
    }

    async fn fixture() -> Fixture {
        let repo = InMemoryUserRepository::new();
        let config = Arc::new(AuthConfig {
            password_cost: 4,
            ..AuthConfig::with_random_secret()
        });
        let tokens = Arc::new(config.token_issuer().unwrap());

        RegisterUseCase::new(Arc::new(repo.clone()), config)
            .execute(RegisterInput {
                name: "Ana".to_string(),
                email: "ana@x.com".to_string(),
                password: "secret1".to_string(),
            })
            .await
            .unwrap();

        let use_case = AuthenticateUseCase::new(Arc::new(repo.clone()), tokens.clone());
        Fixture {
            repo,
            tokens,
            use_case,
        }
    }

    /// Store whose every call fails as if the pool were exhausted
    struct UnavailableUserRepository;

    impl UserRepository for UnavailableUserRepository {
        async fn create(&self, _new_user: &NewUser) -> AuthResult<User> {
            Err(AuthError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn find_by_id(&self, _user_id: &UserId) -> AuthResult<Option<User>> {
            Err(AuthError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn find_by_email(&self, _email: &str) -> AuthResult<Option<User>> {
            Err(AuthError::Database(sqlx::Error::PoolTimedOut))
        }

        async fn exists_by_email(&self, _email: &Email) -> AuthResult<bool> {
            Err(AuthError::Database(sqlx::Error::PoolTimedOut))
        }
    }

    fn input(email: &str, password: &str) -> AuthenticateInput {
        AuthenticateInput {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let f = fixture().await;
        let output = f.use_case.execute(input("ana@x.com", "secret1")).await.unwrap();

        let subject = f.tokens.verify(&output.token).unwrap();
        assert_eq!(subject, output.user_id.to_string());

        let stored = f.repo.find_by_email("ana@x.com").await.unwrap().unwrap();
        assert_eq!(stored.user_id, output.user_id);
    }

    #[tokio::test]
    async fn test_authenticate_unknown_email() {
        let f = fixture().await;
        let result = f.use_case.execute(input("bob@x.com", "secret1")).await;
        assert!(matches!(result, Err(AuthError::EmailNotFound)));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let f = fixture().await;
        let result = f.use_case.execute(input("ana@x.com", "wrong")).await;
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn test_authenticate_corrupt_hash_is_internal() {
        let f = fixture().await;
        f.repo
            .insert_raw(User {
                user_id: UserId::new(),
                user_name: UserName::new("Broken").unwrap(),
                email: Email::new("broken@x.com").unwrap(),
                password_hash: UserPassword::from_db("not-a-bcrypt-hash"),
                created_at: Utc::now(),
            })
            .await;

        let result = f.use_case.execute(input("broken@x.com", "secret1")).await;
        assert!(matches!(result, Err(AuthError::Internal(_))));
    }

    #[tokio::test]
    async fn test_authenticate_store_failure_is_internal() {
        let tokens = Arc::new(AuthConfig::with_random_secret().token_issuer().unwrap());
        let use_case = AuthenticateUseCase::new(Arc::new(UnavailableUserRepository), tokens);

        let err = use_case
            .execute(input("ana@x.com", "secret1"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::Internal(_)));
        let app_err = err.to_app_error();
        assert_eq!(app_err.status_code(), 500);
        assert!(!app_err.message().contains("pool"));
    }
}
