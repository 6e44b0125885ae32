//! Bearer token extraction
//!
//! Reads the `Authorization: Bearer <token>` request header.

use http::{HeaderMap, header};

use crate::token::TokenError;

/// Extract the bearer token from request headers
///
/// ## Returns
/// * `Ok(&str)` - The raw token
/// * `Err(TokenError::Missing)` - No `Authorization` header
/// * `Err(TokenError::Malformed)` - Header present but not a usable bearer credential
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, TokenError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(TokenError::Missing)?
        .to_str()
        .map_err(|_| TokenError::Malformed)?;

    let (scheme, token) = value.trim().split_once(' ').ok_or(TokenError::Malformed)?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(TokenError::Malformed);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(TokenError::Malformed);
    }

    Ok(token)
}
