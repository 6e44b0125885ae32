//! Signed Bearer Tokens
//!
//! HS256 JWTs carrying a subject, an issuance time and an expiry.
//!
//! ## Security Model
//! - The signing secret is supplied once at construction and never exposed
//!   again (`Debug` output is redacted)
//! - Signature verification is the HMAC constant-time comparison provided by
//!   `jsonwebtoken`
//! - Expiry is checked against the clock at verification time, with no leeway
//! - There is no revocation: a token stays valid until it expires

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default token lifetime (24 hours)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(24 * 3600);

/// Token errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// No token was presented
    #[error("Token is missing")]
    Missing,

    /// Token could not be parsed or does not carry the expected claims
    #[error("Token is malformed")]
    Malformed,

    /// Token expiry has passed
    #[error("Token has expired")]
    Expired,

    /// Signature does not match the payload
    #[error("Token signature is invalid")]
    BadSignature,

    /// Signing a new token failed
    #[error("Token signing failed: {0}")]
    Signing(String),

    /// Issuer was constructed with unusable parameters
    #[error("Invalid token configuration: {0}")]
    InvalidConfig(String),
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            JwtErrorKind::ExpiredSignature => TokenError::Expired,
            JwtErrorKind::InvalidSignature => TokenError::BadSignature,
            _ => TokenError::Malformed,
        }
    }
}

/// Claims embedded in every token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user identifier)
    pub sub: String,
    /// Issued at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Issues and verifies signed tokens with a single process-wide secret
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: chrono::Duration,
}

impl TokenIssuer {
    /// Build an issuer from the signing secret and token lifetime
    pub fn new(secret: &[u8], ttl: Duration) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::InvalidConfig(
                "signing secret must not be empty".to_string(),
            ));
        }

        let ttl = chrono::Duration::from_std(ttl)
            .map_err(|e| TokenError::InvalidConfig(format!("token TTL out of range: {e}")))?;

        // Expiry must stay representable for tokens issued now
        if Utc::now().checked_add_signed(ttl).is_none() {
            return Err(TokenError::InvalidConfig(
                "token TTL overflows the expiry timestamp".to_string(),
            ));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            ttl,
        })
    }

    /// Issue a token for `subject`, valid for the configured TTL from now
    pub fn issue(&self, subject: &str) -> Result<String, TokenError> {
        self.issue_at(subject, Utc::now())
    }

    /// Issue a token as if it had been issued at `issued_at`
    pub fn issue_at(&self, subject: &str, issued_at: DateTime<Utc>) -> Result<String, TokenError> {
        let expires_at = issued_at
            .checked_add_signed(self.ttl)
            .ok_or_else(|| TokenError::Signing("expiry timestamp overflowed".to_string()))?;

        let claims = TokenClaims {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify signature and expiry, returning all claims
    pub fn decode(&self, token: &str) -> Result<TokenClaims, TokenError> {
        if token.is_empty() {
            return Err(TokenError::Missing);
        }

        let data = jsonwebtoken::decode::<TokenClaims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }

    /// Verify signature and expiry, returning the subject
    pub fn verify(&self, token: &str) -> Result<String, TokenError> {
        self.decode(token).map(|claims| claims.sub)
    }
}

impl fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("secret", &"[REDACTED]")
            .field("ttl", &self.ttl)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-signing-secret";

    fn issuer() -> TokenIssuer {
        TokenIssuer::new(SECRET, DEFAULT_TOKEN_TTL).unwrap()
    }

    /// Replace the first signature character with a different valid one
    fn tamper_signature(token: &str) -> String {
        let (head, signature) = token.rsplit_once('.').unwrap();
        let first = if signature.starts_with('A') { 'B' } else { 'A' };
        format!("{}.{}{}", head, first, &signature[1..])
    }

    #[test]
    fn test_issue_and_verify() {
        let issuer = issuer();
        let token = issuer.issue("user-42").unwrap();

        assert_eq!(token.split('.').count(), 3);
        assert_eq!(issuer.verify(&token).unwrap(), "user-42");
    }

    #[test]
    fn test_expiry_is_24_hours_after_issue() {
        let issuer = issuer();
        let issued_at = Utc::now();
        let token = issuer.issue_at("user-42", issued_at).unwrap();

        let claims = issuer.decode(&token).unwrap();
        assert_eq!(claims.iat, issued_at.timestamp());
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = issuer();
        let token = issuer
            .issue_at("user-42", Utc::now() - chrono::Duration::hours(25))
            .unwrap();

        assert_eq!(issuer.verify(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_tampered_signature_rejected() {
        let issuer = issuer();
        let token = issuer.issue("user-42").unwrap();

        assert_eq!(
            issuer.verify(&tamper_signature(&token)),
            Err(TokenError::BadSignature)
        );
    }

    #[test]
    fn test_swapped_payload_rejected() {
        let issuer = issuer();
        let mine = issuer.issue("user-1").unwrap();
        let theirs = issuer.issue("user-2").unwrap();

        let mine: Vec<&str> = mine.split('.').collect();
        let theirs: Vec<&str> = theirs.split('.').collect();
        let forged = format!("{}.{}.{}", mine[0], theirs[1], mine[2]);

        assert_eq!(issuer.verify(&forged), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_other_secret_rejected() {
        let other = TokenIssuer::new(b"another-secret", DEFAULT_TOKEN_TTL).unwrap();
        let token = other.issue("user-42").unwrap();

        assert_eq!(issuer().verify(&token), Err(TokenError::BadSignature));
    }

    #[test]
    fn test_garbage_is_malformed() {
        let issuer = issuer();
        assert_eq!(issuer.verify("abc"), Err(TokenError::Malformed));
        assert_eq!(issuer.verify("a.b.c"), Err(TokenError::Malformed));
        assert_eq!(issuer.verify(""), Err(TokenError::Missing));
    }

    #[test]
    fn test_empty_secret_rejected() {
        assert!(matches!(
            TokenIssuer::new(b"", DEFAULT_TOKEN_TTL),
            Err(TokenError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_unrepresentable_ttl_rejected() {
        let result = TokenIssuer::new(SECRET, Duration::from_secs(10_000_000_000_000));
        assert!(matches!(result, Err(TokenError::InvalidConfig(_))));
    }

    #[test]
    fn test_issue_near_max_time_fails_without_panic() {
        let issuer = issuer();
        let result = issuer.issue_at("user-42", DateTime::<Utc>::MAX_UTC);
        assert!(matches!(result, Err(TokenError::Signing(_))));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", issuer());
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("test-signing-secret"));
    }
}
