// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP route handlers.

pub mod chirps;
pub mod tokens;
pub mod users;
pub mod webhook;

use crate::error::{AppError, Result};
use crate::middleware::{require_auth, require_polka_key};
use crate::AppState;
use axum::{middleware, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check response
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/api/healthz", get(health_check))
        .merge(chirps::public_routes())
        .merge(users::public_routes())
        .merge(tokens::routes());

    // Protected routes (session token required)
    let protected_routes = Router::new()
        .merge(chirps::protected_routes())
        .merge(users::protected_routes())
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Webhooks (payment provider API key required)
    let webhook_routes = webhook::routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), require_polka_key));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(webhook_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Run blocking work off the async runtime: bcrypt, and store calls that wait
/// on the document lock and the file system.
pub(crate) async fn run_blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Blocking task failed: {}", e)))?
}
