//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: AuthConfig) -> AuthResult<Router> {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
///
/// Fails if the config cannot produce a token issuer (empty secret).
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> AuthResult<Router>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let tokens = config.token_issuer()?;

    let state = AuthAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        tokens: Arc::new(tokens),
    };

    Ok(Router::new()
        .route("/users", post(handlers::register::<R>))
        .route("/authenticate", post(handlers::authenticate::<R>))
        .route("/me", get(handlers::me::<R>))
        .with_state(state))
}
