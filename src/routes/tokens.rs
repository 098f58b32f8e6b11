// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Login, session refresh and refresh token revocation.

use crate::error::{AppError, Result};
use crate::middleware::auth::bearer_token;
use crate::routes::run_blocking;
use crate::routes::users::Credentials;
use crate::services::{verify_password, RevokeOutcome};
use crate::AppState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/login", post(login))
        .route("/api/refresh", post(refresh))
        .route("/api/revoke", post(revoke))
}

/// Successful login: user view plus both credentials.
#[derive(Serialize)]
pub struct LoginResponse {
    pub id: u64,
    pub email: String,
    pub is_chirpy_red: bool,
    pub token: String,
    pub refresh_token: String,
}

/// Check email and password, then mint a session token and a refresh token.
///
/// Unknown email and wrong password produce the same response.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<LoginResponse>> {
    let (user, token, refresh_token) = run_blocking(move || {
        let user = state.users.get_by_email(&credentials.email).map_err(|e| match e {
            AppError::NotFound(_) => {
                AppError::Unauthorized("Incorrect email or password".to_string())
            }
            other => other,
        })?;

        verify_password(&credentials.password, &user.password_hash).map_err(|e| match e {
            AppError::Unauthorized(_) => {
                tracing::warn!(user_id = user.id, "Login failed: incorrect password");
                AppError::Unauthorized("Incorrect email or password".to_string())
            }
            other => other,
        })?;

        let token = state
            .sessions
            .mint_session_token(user.id, state.config.session_ttl)?;
        let refresh_token = state.sessions.mint_refresh_token(user.id)?;
        Ok((user, token, refresh_token))
    })
    .await?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        id: user.id,
        email: user.email,
        is_chirpy_red: user.is_upgraded,
        token,
        refresh_token,
    }))
}

#[derive(Serialize)]
pub struct RefreshResponse {
    pub token: String,
}

/// Exchange a refresh token for a new session token.
async fn refresh(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<RefreshResponse>> {
    let refresh_token = bearer_token(&headers)?.to_string();
    let token = run_blocking(move || {
        let user = state.sessions.resolve_user(&refresh_token)?;
        state
            .sessions
            .mint_session_token(user.id, state.config.session_ttl)
    })
    .await?;

    Ok(Json(RefreshResponse { token }))
}

/// Revoke a refresh token. Unknown tokens are treated as already revoked.
async fn revoke(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Result<StatusCode> {
    let refresh_token = bearer_token(&headers)?.to_string();

    match run_blocking(move || state.sessions.revoke(&refresh_token)).await? {
        RevokeOutcome::Revoked | RevokeOutcome::Unknown => Ok(StatusCode::NO_CONTENT),
    }
}
