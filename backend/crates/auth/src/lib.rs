//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Endpoints
//! - `POST /users` registers a user with name, email and password
//! - `POST /authenticate` exchanges email and password for a bearer token
//! - `GET /me` returns the user the bearer token was issued for
//!
//! ## Security Model
//! - Passwords hashed with bcrypt (cost 6 by default)
//! - Stateless HS256 tokens with a 24 hour lifetime and the user id as subject
//! - Unknown email and wrong password share a status code
//! - Password hashes never appear in responses

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::memory::InMemoryUserRepository;
pub use infra::postgres::PgUserRepository;
pub use presentation::router::{auth_router, auth_router_generic};
