// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! One-way password hashing (bcrypt).
//!
//! bcrypt at cost 14 takes on the order of a second, so async callers should
//! run these functions on a blocking thread.

use crate::error::{AppError, Result};

/// Work factor for stored password hashes.
pub const PASSWORD_HASH_COST: u32 = 14;

/// Hash `password` at [`PASSWORD_HASH_COST`].
pub fn hash_password(password: &str) -> Result<String> {
    hash_password_with_cost(password, PASSWORD_HASH_COST)
}

/// Hash `password` at an explicit bcrypt cost.
pub fn hash_password_with_cost(password: &str, cost: u32) -> Result<String> {
    bcrypt::hash(password, cost)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))
}

/// Check `password` against `hash`.
///
/// bcrypt compares digests in constant time. A malformed hash is reported
/// the same way as a wrong password.
pub fn verify_password(password: &str, hash: &str) -> Result<()> {
    match bcrypt::verify(password, hash) {
        Ok(true) => Ok(()),
        Ok(false) => Err(AppError::Unauthorized("Incorrect password".to_string())),
        Err(e) => {
            tracing::warn!(error = %e, "Stored password hash could not be parsed");
            Err(AppError::Unauthorized("Incorrect password".to_string()))
        }
    }
}
