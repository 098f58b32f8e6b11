// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session token authentication middleware.

use crate::error::AppError;
use crate::AppState;
use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Authenticated user extracted from the session token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: u64,
}

/// Extract the credential from `Authorization: <scheme> <credential>`.
pub fn authorization_credential<'a>(
    headers: &'a HeaderMap,
    scheme: &str,
) -> Result<&'a str, AppError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or_else(|| AppError::Unauthorized("No authorization header".to_string()))?
        .to_str()
        .map_err(|_| AppError::Unauthorized("Malformed authorization header".to_string()))?;

    match value.split_once(' ') {
        Some((s, credential)) if s == scheme && !credential.is_empty() => Ok(credential.trim()),
        _ => Err(AppError::Unauthorized(
            "Malformed authorization header".to_string(),
        )),
    }
}

/// Extract a bearer token (session or refresh token).
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AppError> {
    authorization_credential(headers, "Bearer")
}

/// Middleware that requires a valid session token.
///
/// On success the [`AuthUser`] is available to handlers as an extension.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers())?;

    let user_id = state.sessions.authenticate(token).map_err(|e| {
        if let AppError::Unauthorized(reason) = &e {
            tracing::warn!(reason = %reason, "Rejected session token");
        }
        e
    })?;

    request.extensions_mut().insert(AuthUser { user_id });

    Ok(next.run(request).await)
}
