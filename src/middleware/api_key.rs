// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API key gate for payment provider webhooks.

use crate::error::AppError;
use crate::middleware::auth::authorization_credential;
use crate::AppState;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;
use subtle::ConstantTimeEq;

/// Require `Authorization: ApiKey <key>` matching the configured key.
pub async fn require_polka_key(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let presented = authorization_credential(request.headers(), "ApiKey")?;

    if !keys_match(presented, &state.config.polka_api_key) {
        tracing::warn!("Blocked webhook request with incorrect API key");
        return Err(AppError::Unauthorized("Incorrect API key".to_string()));
    }

    Ok(next.run(request).await)
}

/// Constant-time key comparison.
fn keys_match(presented: &str, expected: &str) -> bool {
    !expected.is_empty() && bool::from(presented.as_bytes().ct_eq(expected.as_bytes()))
}
