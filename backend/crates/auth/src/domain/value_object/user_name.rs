//! User Name Value Object
//!
//! Display name shown for a user. Not unique, not used for login.

use std::fmt;

use crate::error::{AuthError, AuthResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Trimmed, must not be empty
    pub fn new(name: impl Into<String>) -> AuthResult<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(AuthError::Validation("Name cannot be empty".to_string()));
        }
        Ok(Self(name))
    }

    pub fn from_db(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
