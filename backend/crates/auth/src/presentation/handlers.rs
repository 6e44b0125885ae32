//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderMap, StatusCode};
use std::sync::Arc;

use platform::bearer::extract_bearer_token;
use platform::token::TokenIssuer;

use crate::application::config::AuthConfig;
use crate::application::{
    AuthenticateInput, AuthenticateUseCase, FetchSelfUseCase, RegisterInput, RegisterUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{
    AuthenticateRequest, AuthenticateResponse, MeResponse, RegisterRequest,
};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenIssuer>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /users
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> AuthResult<StatusCode>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;

    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    use_case.execute(input).await?;

    Ok(StatusCode::CREATED)
}

// ============================================================================
// Authenticate
// ============================================================================

/// POST /authenticate
pub async fn authenticate<R>(
    State(state): State<AuthAppState<R>>,
    body: Result<Json<AuthenticateRequest>, JsonRejection>,
) -> AuthResult<Json<AuthenticateResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = body?;

    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.tokens.clone());

    let input = AuthenticateInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(AuthenticateResponse {
        token: output.token,
    }))
}

// ============================================================================
// Me
// ============================================================================

/// GET /me
pub async fn me<R>(
    State(state): State<AuthAppState<R>>,
    headers: HeaderMap,
) -> AuthResult<Json<MeResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let token = extract_bearer_token(&headers).map_err(AuthError::Unauthorized)?;

    let use_case = FetchSelfUseCase::new(state.repo.clone(), state.tokens.clone());
    let profile = use_case.execute(token).await?;

    Ok(Json(MeResponse {
        user: profile.into(),
    }))
}
