//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Password hashing (bcrypt, configurable cost)
//! - Signed bearer tokens (HS256 JWT)
//! - `Authorization` header parsing

pub mod bearer;
pub mod password;
pub mod token;
