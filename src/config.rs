// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.

use crate::services::password::PASSWORD_HASH_COST;
use chrono::Duration;
use std::env;
use std::path::PathBuf;

/// Default location of the JSON document.
pub const DEFAULT_DB_PATH: &str = "database.json";

/// Session tokens never outlive the 24 hour refresh token that renews them.
pub const MAX_SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Path of the JSON document holding chirps, users and refresh tokens
    pub db_path: PathBuf,
    /// Lifetime of session tokens minted at login and refresh
    pub session_ttl: Duration,
    /// bcrypt cost for new password hashes (lowered only in tests)
    pub password_hash_cost: u32,

    // --- Secrets ---
    /// HS256 signing secret for session tokens (raw bytes)
    pub jwt_signing_key: Vec<u8>,
    /// API key the payment provider presents on webhook calls
    pub polka_api_key: String,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self::test_default()
    }
}

impl Config {
    /// Deterministic configuration for tests.
    pub fn test_default() -> Self {
        Self {
            port: 8080,
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            session_ttl: Duration::hours(1),
            password_hash_cost: 4,
            jwt_signing_key: b"test_jwt_key_32_bytes_minimum!!".to_vec(),
            polka_api_key: "test_polka_key".to_string(),
        }
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: parse_var("PORT", 8080)?,
            db_path: env::var("DB_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_DB_PATH)),
            session_ttl: session_ttl_from_env()?,
            password_hash_cost: PASSWORD_HASH_COST,

            jwt_signing_key: env::var("JWT_SECRET")
                .map_err(|_| ConfigError::Missing("JWT_SECRET"))?
                .into_bytes(),
            polka_api_key: env::var("POLKA_API_KEY")
                .or_else(|_| env::var("POLKA_KEY"))
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("POLKA_API_KEY"))?,
        })
    }
}

/// Parse an optional numeric variable, falling back to `default` when unset.
fn parse_var<T: std::str::FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(name)),
        Err(_) => Ok(default),
    }
}

/// `SESSION_TTL_SECS`, which must lie in `1..=MAX_SESSION_TTL_SECS`.
fn session_ttl_from_env() -> Result<Duration, ConfigError> {
    let secs: i64 = parse_var("SESSION_TTL_SECS", 3600)?;
    if !(1..=MAX_SESSION_TTL_SECS).contains(&secs) {
        return Err(ConfigError::Invalid("SESSION_TTL_SECS"));
    }
    Duration::try_seconds(secs).ok_or(ConfigError::Invalid("SESSION_TTL_SECS"))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
