// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session token issuance and refresh token lifecycle.
//!
//! Session tokens are HS256 JWTs verified without a storage lookup.
//! Refresh tokens are opaque hex strings backed by the document store.

use crate::db::{RefreshTokenRepository, UserRepository};
use crate::error::{AppError, Result};
use crate::models::User;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use ring::rand::{SecureRandom, SystemRandom};
use serde::{Deserialize, Serialize};

/// Issuer claim written into and required from every session token.
pub const TOKEN_ISSUER: &str = "chirpy";

/// Refresh tokens live for a fixed 24 hours.
pub const REFRESH_TOKEN_TTL_HOURS: i64 = 24;

/// Random bytes per refresh token (hex-encoded to 64 characters).
const REFRESH_TOKEN_BYTES: usize = 32;

/// Session token claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (stringified user id)
    pub sub: String,
    /// Issuer, always [`TOKEN_ISSUER`]
    pub iss: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Result of revoking a refresh token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevokeOutcome {
    /// The token existed and was deleted.
    Revoked,
    /// No such token was stored.
    Unknown,
}

/// Mints and verifies session tokens; mints, resolves and revokes refresh
/// tokens.
#[derive(Clone)]
pub struct SessionIssuer {
    signing_key: Vec<u8>,
    users: UserRepository,
    refresh_tokens: RefreshTokenRepository,
    rng: SystemRandom,
}

impl SessionIssuer {
    pub fn new(
        signing_key: &[u8],
        users: UserRepository,
        refresh_tokens: RefreshTokenRepository,
    ) -> Self {
        Self {
            signing_key: signing_key.to_vec(),
            users,
            refresh_tokens,
            rng: SystemRandom::new(),
        }
    }

    // ─── Session Tokens ──────────────────────────────────────────

    /// Sign a session token for `user_id` valid for `ttl` from now.
    pub fn mint_session_token(&self, user_id: u64, ttl: Duration) -> Result<String> {
        let now = Utc::now();
        let expires_at = now.checked_add_signed(ttl).ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "Session token lifetime out of range: {}s",
                ttl.num_seconds()
            ))
        })?;
        let claims = Claims {
            sub: user_id.to_string(),
            iss: TOKEN_ISSUER.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(&self.signing_key),
        )
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to sign session token: {}", e)))
    }

    /// Verify signature, expiry and issuer; return the subject claim.
    pub fn verify_session_token(&self, token: &str) -> Result<String> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(&self.signing_key),
            &validation,
        )
        .map_err(|e| {
            tracing::debug!(error = %e, "Session token rejected");
            AppError::Unauthorized("Invalid or expired session token".to_string())
        })?;

        Ok(data.claims.sub)
    }

    /// Verify a session token and parse its subject as a user id.
    ///
    /// This issuer always writes an integer subject, so a non-integer one is
    /// an internal error rather than an authentication failure.
    pub fn authenticate(&self, token: &str) -> Result<u64> {
        let subject = self.verify_session_token(token)?;
        subject.parse().map_err(|_| {
            AppError::Internal(anyhow::anyhow!(
                "Session token subject is not a user id: {}",
                subject
            ))
        })
    }

    // ─── Refresh Tokens ──────────────────────────────────────────

    /// Generate and store a refresh token for `user_id`.
    pub fn mint_refresh_token(&self, user_id: u64) -> Result<String> {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        self.rng
            .fill(&mut bytes)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("System RNG failure")))?;
        let token = hex::encode(bytes);

        let expires_at = Utc::now() + Duration::hours(REFRESH_TOKEN_TTL_HOURS);
        self.refresh_tokens.store(&token, user_id, expires_at)?;

        tracing::info!(user_id, expires_at = %expires_at, "Refresh token issued");
        Ok(token)
    }

    /// Resolve a refresh token to its owner.
    ///
    /// Unknown tokens, expired tokens and tokens whose owner no longer
    /// exists are all authentication failures.
    pub fn resolve_user(&self, refresh_token: &str) -> Result<User> {
        let record = self.refresh_tokens.get(refresh_token).map_err(|e| match e {
            AppError::NotFound(_) => AppError::Unauthorized("Unknown refresh token".to_string()),
            other => other,
        })?;

        if record.is_expired_at(Utc::now()) {
            tracing::warn!(user_id = record.user_id, "Expired refresh token presented");
            return Err(AppError::Unauthorized("Refresh token expired".to_string()));
        }

        self.users.get_by_id(record.user_id).map_err(|e| match e {
            AppError::NotFound(_) => {
                tracing::warn!(user_id = record.user_id, "Refresh token owner missing");
                AppError::Unauthorized("Unknown refresh token".to_string())
            }
            other => other,
        })
    }

    /// Delete a refresh token. Unknown tokens are not an error here; the
    /// caller decides what [`RevokeOutcome::Unknown`] means.
    pub fn revoke(&self, refresh_token: &str) -> Result<RevokeOutcome> {
        if self.refresh_tokens.revoke(refresh_token)? {
            tracing::info!("Refresh token revoked");
            Ok(RevokeOutcome::Revoked)
        } else {
            tracing::debug!("Revoke requested for unknown refresh token");
            Ok(RevokeOutcome::Unknown)
        }
    }
}
