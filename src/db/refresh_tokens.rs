// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Refresh token repository.

use crate::db::JsonStore;
use crate::error::{AppError, Result};
use crate::models::RefreshToken;
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Refresh token operations over the shared store.
#[derive(Debug, Clone)]
pub struct RefreshTokenRepository {
    store: Arc<JsonStore>,
}

impl RefreshTokenRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// Store `token` for `user_id`, replacing any record with the same token.
    pub fn store(
        &self,
        token: &str,
        user_id: u64,
        expires_at: DateTime<Utc>,
    ) -> Result<RefreshToken> {
        self.store.update(|doc| {
            let record = RefreshToken {
                user_id,
                token: token.to_string(),
                expires_at,
            };
            doc.refresh_tokens
                .insert(record.token.clone(), record.clone());
            Ok(record)
        })
    }

    /// Look up a token record. Expiry is not checked here.
    pub fn get(&self, token: &str) -> Result<RefreshToken> {
        self.store.read(|doc| {
            doc.refresh_tokens
                .get(token)
                .cloned()
                .ok_or_else(|| AppError::NotFound("Refresh token not found".to_string()))
        })
    }

    /// Delete `token`. Always succeeds; returns whether it was present.
    pub fn revoke(&self, token: &str) -> Result<bool> {
        self.store
            .update(|doc| Ok(doc.refresh_tokens.remove(token).is_some()))
    }
}
