//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::fmt;
use std::time::Duration;

use platform::password::DEFAULT_COST;
pub use platform::password::{MAX_COST as MAX_PASSWORD_COST, MIN_COST as MIN_PASSWORD_COST};
use platform::token::{DEFAULT_TOKEN_TTL, TokenIssuer};

use crate::error::{AuthError, AuthResult};

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 signing secret. Must not be empty.
    pub token_secret: Vec<u8>,
    /// Token lifetime (24 hours)
    pub token_ttl: Duration,
    /// bcrypt cost factor for new password hashes
    pub password_cost: u32,
}

impl Default for AuthConfig {
    /// No secret is set; building a token issuer fails until one is provided.
    fn default() -> Self {
        Self {
            token_secret: Vec::new(),
            token_ttl: DEFAULT_TOKEN_TTL,
            password_cost: DEFAULT_COST,
        }
    }
}

impl AuthConfig {
    /// Create config with the given signing secret
    pub fn with_secret(secret: impl Into<Vec<u8>>) -> Self {
        Self {
            token_secret: secret.into(),
            ..Default::default()
        }
    }

    /// Create config with a random signing secret
    pub fn with_random_secret() -> Self {
        use rand::RngCore;
        let mut secret = vec![0u8; 32];
        rand::rng().fill_bytes(&mut secret);
        Self::with_secret(secret)
    }

    /// Create config for development. Tokens do not survive a restart.
    pub fn development() -> Self {
        Self::with_random_secret()
    }

    /// Build the token issuer for this config
    pub fn token_issuer(&self) -> AuthResult<TokenIssuer> {
        TokenIssuer::new(&self.token_secret, self.token_ttl)
            .map_err(|e| AuthError::Internal(e.to_string()))
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_cost", &self.password_cost)
            .finish()
    }
}
