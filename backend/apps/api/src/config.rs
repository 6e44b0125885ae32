//! Server Configuration
//!
//! Read from environment variables (a `.env` file is loaded first).
//!
//! | Variable                   | Default   |
//! |----------------------------|-----------|
//! | `DATABASE_URL`             | required  |
//! | `JWT_SECRET`               | required in release builds |
//! | `HOST`                     | `0.0.0.0` |
//! | `PORT`                     | `3333`    |
//! | `PASSWORD_HASH_COST`       | `6`       |
//! | `TOKEN_TTL_SECS`           | `86400`   |
//! | `DATABASE_MAX_CONNECTIONS` | `5`       |

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::application::config::{MAX_PASSWORD_COST, MIN_PASSWORD_COST};

const DEFAULT_PORT: u16 = 3333;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub database_max_connections: u32,
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load from the process environment.
    /// Debug builds fall back to a random token secret.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok(), cfg!(debug_assertions))
    }

    /// Load using `lookup` to resolve variables
    pub fn from_lookup<F>(lookup: F, development: bool) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let host = parse_or(&lookup, "HOST", IpAddr::V4(Ipv4Addr::UNSPECIFIED))?;
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let database_max_connections =
            parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;

        let mut auth = match lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            Some(secret) => AuthConfig::with_secret(secret.into_bytes()),
            None if development => {
                tracing::warn!("JWT_SECRET not set, using a random secret");
                AuthConfig::development()
            }
            None => bail!("JWT_SECRET must be set"),
        };

        auth.password_cost = parse_or(&lookup, "PASSWORD_HASH_COST", auth.password_cost)?;
        if !(MIN_PASSWORD_COST..=MAX_PASSWORD_COST).contains(&auth.password_cost) {
            bail!("PASSWORD_HASH_COST must be between {MIN_PASSWORD_COST} and {MAX_PASSWORD_COST}");
        }

        let ttl_secs = parse_or(&lookup, "TOKEN_TTL_SECS", auth.token_ttl.as_secs())?;
        if ttl_secs == 0 {
            bail!("TOKEN_TTL_SECS must be positive");
        }
        auth.token_ttl = Duration::from_secs(ttl_secs);
        auth.token_issuer()
            .with_context(|| format!("invalid value for TOKEN_TTL_SECS: {ttl_secs}"))?;

        Ok(Self {
            database_url,
            host,
            port,
            database_max_connections,
            auth,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {key}: {raw:?}")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(
            lookup(&[("DATABASE_URL", "postgres://localhost/db"), ("JWT_SECRET", "s3cret")]),
            false,
        )
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3333");
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.auth.password_cost, 6);
        assert_eq!(config.auth.token_ttl, Duration::from_secs(86400));
        assert_eq!(config.auth.token_secret, b"s3cret".to_vec());
    }

    #[test]
    fn test_overrides() {
        let config = ServerConfig::from_lookup(
            lookup(&[
                ("DATABASE_URL", "postgres://localhost/db"),
                ("JWT_SECRET", "s3cret"),
                ("HOST", "127.0.0.1"),
                ("PORT", "8080"),
                ("PASSWORD_HASH_COST", "10"),
                ("TOKEN_TTL_SECS", "60"),
                ("DATABASE_MAX_CONNECTIONS", "20"),
            ]),
            false,
        )
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
        assert_eq!(config.auth.password_cost, 10);
        assert_eq!(config.auth.token_ttl, Duration::from_secs(60));
        assert_eq!(config.database_max_connections, 20);
    }

    #[test]
    fn test_database_url_required() {
        let result = ServerConfig::from_lookup(lookup(&[("JWT_SECRET", "s3cret")]), true);
        assert!(result.is_err());
    }

    #[test]
    fn test_secret_required_outside_development() {
        let vars = [("DATABASE_URL", "postgres://localhost/db")];
        assert!(ServerConfig::from_lookup(lookup(&vars), false).is_err());

        let dev = ServerConfig::from_lookup(lookup(&vars), true).unwrap();
        assert_eq!(dev.auth.token_secret.len(), 32);
    }

    #[test]
    fn test_invalid_values() {
        let base = [("DATABASE_URL", "postgres://localhost/db"), ("JWT_SECRET", "s3cret")];

        for (key, value) in [
            ("PORT", "not-a-port"),
            ("PASSWORD_HASH_COST", "3"),
            ("PASSWORD_HASH_COST", "32"),
            ("TOKEN_TTL_SECS", "0"),
            ("TOKEN_TTL_SECS", "10000000000000"),
            ("HOST", "localhost:80"),
        ] {
            let mut vars = base.to_vec();
            vars.push((key, value));
            assert!(
                ServerConfig::from_lookup(lookup(&vars), false).is_err(),
                "{key}={value}"
            );
        }
    }
}
