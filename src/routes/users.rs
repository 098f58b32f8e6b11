// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User account routes.

use crate::error::Result;
use crate::middleware::auth::AuthUser;
use crate::models::UserView;
use crate::routes::run_blocking;
use crate::services::password::hash_password_with_cost;
use crate::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    routing::{post, put},
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/users", post(create_user))
}

pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/users", put(update_user))
}

/// Email/password body shared by account creation and update.
#[derive(Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Register a new account.
async fn create_user(
    State(state): State<Arc<AppState>>,
    Json(credentials): Json<Credentials>,
) -> Result<(StatusCode, Json<UserView>)> {
    let cost = state.config.password_hash_cost;
    let password = credentials.password;
    let user = run_blocking(move || {
        let password_hash = hash_password_with_cost(&password, cost)?;
        state.users.create(&credentials.email, &password_hash)
    })
    .await?;

    Ok((StatusCode::CREATED, Json(UserView::from(&user))))
}

/// Replace the session user's email and password.
async fn update_user(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<UserView>> {
    let cost = state.config.password_hash_cost;
    let password = credentials.password;
    let updated = run_blocking(move || {
        let password_hash = hash_password_with_cost(&password, cost)?;
        state
            .users
            .update_profile(user.user_id, &credentials.email, &password_hash)
    })
    .await?;

    Ok(Json(UserView::from(&updated)))
}
