//! Password Hashing and Verification
//!
//! bcrypt hashing with a per-hash random salt and a configurable work factor.
//!
//! ## Security Notes
//! - [`DEFAULT_COST`] is 6, which is far below current recommendations
//!   (10-12). It is kept at 6 so hashes stay compatible with records written
//!   by earlier deployments; raise it through configuration, existing hashes
//!   keep verifying because the cost is stored inside each hash.
//! - Clear text is zeroized on drop and redacted in `Debug` output.
//! - bcrypt only reads the first 72 bytes of input.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Minimum password length accepted at registration (in characters)
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Default bcrypt cost. Weak; see module docs.
pub const DEFAULT_COST: u32 = 6;

/// Lowest and highest cost bcrypt accepts
pub const MIN_COST: u32 = 4;
pub const MAX_COST: u32 = 31;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash could not be parsed
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone` to prevent accidental copies.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a password for a new credential, enforcing the length policy.
    ///
    /// Length is counted in Unicode code points.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let char_count = raw.chars().count();
        if char_count < MIN_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        Ok(Self(raw))
    }

    /// Wrap a login candidate. No policy is applied: a candidate that could
    /// never have been registered simply fails verification.
    pub fn candidate(raw: String) -> Self {
        Self(raw)
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password with bcrypt at the given cost
    pub fn hash(&self, cost: u32) -> Result<HashedPassword, PasswordHashError> {
        let hash = bcrypt::hash(self.as_bytes(), cost)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword { hash })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// bcrypt hash in modular crypt format (`$2b$<cost>$<salt+hash>`)
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Wrap a hash loaded from storage.
    ///
    /// The string is not parsed here; a malformed value surfaces as
    /// [`PasswordHashError::InvalidHashFormat`] on [`verify`](Self::verify).
    pub fn from_stored(hash: impl Into<String>) -> Self {
        Self { hash: hash.into() }
    }

    /// Get the hash string for storage
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a candidate against this hash.
    ///
    /// Returns `Ok(false)` on mismatch. Errors only when the stored hash is
    /// malformed.
    pub fn verify(&self, password: &ClearTextPassword) -> Result<bool, PasswordHashError> {
        bcrypt::verify(password.as_bytes(), &self.hash)
            .map_err(|_| PasswordHashError::InvalidHashFormat)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================
