//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entity::user::UserProfile;

// ============================================================================
// Register
// ============================================================================

/// Register request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

// ============================================================================
// Authenticate
// ============================================================================

/// Authenticate request
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticateRequest {
    pub email: String,
    pub password: String,
}

/// Authenticate response
#[derive(Debug, Clone, Serialize)]
pub struct AuthenticateResponse {
    pub token: String,
}

// ============================================================================
// Me
// ============================================================================

/// Me response
#[derive(Debug, Clone, Serialize)]
pub struct MeResponse {
    pub user: UserResponse,
}

/// Public user record. Has no password field.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.user_id.to_string(),
            name: profile.user_name.to_string(),
            email: profile.email.to_string(),
            created_at: profile.created_at,
        }
    }
}
