//! Application Layer
//!
//! Use cases and application services.

pub mod authenticate;
pub mod config;
pub mod fetch_self;
pub mod register;

// Re-exports
pub use authenticate::{AuthenticateInput, AuthenticateOutput, AuthenticateUseCase};
pub use config::AuthConfig;
pub use fetch_self::FetchSelfUseCase;
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
