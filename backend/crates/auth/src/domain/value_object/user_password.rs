//! User Password Value Object
//!
//! Domain wrappers around `platform::password`.
//!
//! ## Usage
//! ```rust
//! use auth::domain::value_object::user_password::{RawPassword, UserPassword};
//!
//! let raw = RawPassword::new("secret1".to_string()).unwrap();
//! let hashed = UserPassword::from_raw(&raw, 6).unwrap();
//! assert!(hashed.verify(&raw).unwrap());
//! ```

use platform::password::{ClearTextPassword, HashedPassword};
use std::fmt;

use crate::error::AuthResult;

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input. Zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Password for a new account; enforces the minimum length
    pub fn new(raw: String) -> AuthResult<Self> {
        Ok(Self(ClearTextPassword::new(raw)?))
    }

    /// Password presented at login; no policy applied
    pub fn candidate(raw: String) -> Self {
        Self(ClearTextPassword::candidate(raw))
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// User Password (Hashed, for storage)
// ============================================================================

/// Hashed user password as stored in the database
#[derive(Clone, PartialEq, Eq)]
pub struct UserPassword(HashedPassword);

impl UserPassword {
    /// Hash a raw password at the given bcrypt cost
    pub fn from_raw(raw: &RawPassword, cost: u32) -> AuthResult<Self> {
        Ok(Self(raw.0.hash(cost)?))
    }

    /// Create from database value
    pub fn from_db(hash: impl Into<String>) -> Self {
        Self(HashedPassword::from_stored(hash))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is malformed
    pub fn verify(&self, raw: &RawPassword) -> AuthResult<bool> {
        Ok(self.0.verify(&raw.0)?)
    }
}

impl fmt::Debug for UserPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}
