// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Rolegate Contributors

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment once at startup and is
//! immutable for the process lifetime.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `SECRET_KEY` | Token signing secret | Required |
//! | `ALGORITHM` | Signing algorithm (HS256, HS384, HS512) | `HS256` |
//! | `TOKEN_TTL_SECS` | Access token lifetime in seconds | `1800` |
//! | `USERS_FILE` | Path to the user directory JSON file | `users.json` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8000` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info` |
//!
//! `SECRET_KEY` must never be committed to source control. It is consumed by
//! key derivation at startup and never appears in a log event or response.

use std::env;
use std::time::Duration;

use jsonwebtoken::Algorithm;
use thiserror::Error;

/// Environment variable name for the token signing secret.
pub const SECRET_KEY_ENV: &str = "SECRET_KEY";

/// Environment variable name for the signing algorithm.
pub const ALGORITHM_ENV: &str = "ALGORITHM";

/// Environment variable name for the token lifetime in seconds.
pub const TOKEN_TTL_ENV: &str = "TOKEN_TTL_SECS";

/// Environment variable name for the user directory file path.
pub const USERS_FILE_ENV: &str = "USERS_FILE";

/// Default token lifetime: 30 minutes.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

/// Default user directory file path.
pub const DEFAULT_USERS_FILE: &str = "users.json";

/// Configuration errors reported at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{SECRET_KEY_ENV} must be set")]
    MissingSecret,

    #[error("unsupported signing algorithm {0:?} (expected HS256, HS384 or HS512)")]
    UnsupportedAlgorithm(String),

    #[error("invalid {TOKEN_TTL_ENV} value {0:?}: expected a positive number of seconds")]
    InvalidTtl(String),
}

/// Process-wide configuration, loaded once before the server starts.
#[derive(Debug, Clone)]
pub struct Config {
    /// Token signing secret. Held here only between load and key derivation.
    pub secret_key: String,
    /// Symmetric signing algorithm (HS family only).
    pub algorithm: Algorithm,
    /// Lifetime stamped into every issued token.
    pub token_ttl: Duration,
    /// Path to the user directory JSON file.
    pub users_file: String,
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret_key = env::var(SECRET_KEY_ENV).map_err(|_| ConfigError::MissingSecret)?;
        if secret_key.is_empty() {
            return Err(ConfigError::MissingSecret);
        }

        let algorithm = match env::var(ALGORITHM_ENV) {
            Ok(name) => parse_hs_algorithm(&name)?,
            Err(_) => Algorithm::HS256,
        };

        let token_ttl = match env::var(TOKEN_TTL_ENV) {
            Ok(raw) => {
                let secs: u64 = raw
                    .parse()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or(ConfigError::InvalidTtl(raw))?;
                Duration::from_secs(secs)
            }
            Err(_) => DEFAULT_TOKEN_TTL,
        };

        let users_file =
            env::var(USERS_FILE_ENV).unwrap_or_else(|_| DEFAULT_USERS_FILE.to_string());

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()
            .unwrap_or(8000);

        Ok(Self {
            secret_key,
            algorithm,
            token_ttl,
            users_file,
            host,
            port,
        })
    }
}

/// Parse an algorithm name, restricted to the symmetric HS family.
///
/// Asymmetric algorithms are rejected: this service both issues and verifies
/// its own tokens, and accepting an asymmetric name here would silently break
/// verification.
fn parse_hs_algorithm(name: &str) -> Result<Algorithm, ConfigError> {
    match name {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(ConfigError::UnsupportedAlgorithm(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hs_family_algorithms_parse() {
        assert_eq!(parse_hs_algorithm("HS256").unwrap(), Algorithm::HS256);
        assert_eq!(parse_hs_algorithm("HS384").unwrap(), Algorithm::HS384);
        assert_eq!(parse_hs_algorithm("HS512").unwrap(), Algorithm::HS512);
    }

    #[test]
    fn asymmetric_algorithms_are_rejected() {
        assert!(matches!(
            parse_hs_algorithm("RS256"),
            Err(ConfigError::UnsupportedAlgorithm(_))
        ));
        assert!(matches!(
            parse_hs_algorithm("none"),
            Err(ConfigError::UnsupportedAlgorithm(_))
        ));
    }

    #[test]
    fn default_ttl_is_thirty_minutes() {
        assert_eq!(DEFAULT_TOKEN_TTL, Duration::from_secs(1800));
    }
}
