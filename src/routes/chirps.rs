// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chirp routes.

use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::models::Chirp;
use crate::routes::run_blocking;
use crate::services::clean_chirp_body;
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, post},
    Extension, Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Routes readable without a session.
pub fn public_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/chirps", get(list_chirps))
        .route("/api/chirps/{chirp_id}", get(get_chirp))
}

/// Routes that require a session; the auth middleware is applied in routes/mod.rs.
pub fn protected_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/chirps", post(create_chirp))
        .route("/api/chirps/{chirp_id}", delete(delete_chirp))
}

#[derive(Deserialize)]
struct CreateChirpRequest {
    body: String,
}

/// Create a chirp authored by the session user.
async fn create_chirp(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Json(request): Json<CreateChirpRequest>,
) -> Result<(StatusCode, Json<Chirp>)> {
    let body = clean_chirp_body(&request.body)?;
    let chirp = run_blocking(move || state.chirps.create(&body, user.user_id)).await?;

    Ok((StatusCode::CREATED, Json(chirp)))
}

#[derive(Deserialize)]
struct ListChirpsQuery {
    /// Only chirps by this author
    author_id: Option<u64>,
    /// "asc" (default) or "desc" by id
    sort: Option<String>,
}

/// List chirps sorted by id.
async fn list_chirps(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListChirpsQuery>,
) -> Result<Json<Vec<Chirp>>> {
    let descending = match query.sort.as_deref() {
        None | Some("asc") => false,
        Some("desc") => true,
        Some(other) => {
            return Err(AppError::BadRequest(format!(
                "Invalid 'sort' parameter: {}",
                other
            )))
        }
    };

    let mut chirps = run_blocking(move || match query.author_id {
        Some(author_id) => state.chirps.list_by_author(author_id),
        None => state.chirps.list_all(),
    })
    .await?;

    chirps.sort_by_key(|chirp| chirp.id);
    if descending {
        chirps.reverse();
    }

    Ok(Json(chirps))
}

async fn get_chirp(
    State(state): State<Arc<AppState>>,
    Path(chirp_id): Path<u64>,
) -> Result<Json<Chirp>> {
    let chirp = run_blocking(move || state.chirps.get_by_id(chirp_id)).await?;
    Ok(Json(chirp))
}

/// Delete a chirp. Only its author may do so.
async fn delete_chirp(
    State(state): State<Arc<AppState>>,
    Extension(user): Extension<AuthUser>,
    Path(chirp_id): Path<u64>,
) -> Result<StatusCode> {
    run_blocking(move || state.chirps.delete_authored_by(chirp_id, user.user_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
