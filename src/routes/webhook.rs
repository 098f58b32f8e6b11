// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Webhook routes for payment provider events.

use crate::error::Result;
use crate::routes::run_blocking;
use crate::AppState;
use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::Deserialize;
use std::sync::Arc;

/// The only event this service acts on.
const USER_UPGRADED_EVENT: &str = "user.upgraded";

/// Webhook routes; the API key middleware is applied in routes/mod.rs.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/polka/webhooks", post(handle_event))
}

#[derive(Deserialize, Debug)]
struct WebhookEvent {
    event: String,
    data: WebhookData,
}

#[derive(Deserialize, Debug)]
struct WebhookData {
    user_id: u64,
}

/// Handle an incoming event. Events other than upgrades are acknowledged
/// and ignored.
async fn handle_event(
    State(state): State<Arc<AppState>>,
    Json(event): Json<WebhookEvent>,
) -> Result<StatusCode> {
    if event.event != USER_UPGRADED_EVENT {
        tracing::debug!(event = %event.event, "Ignoring webhook event");
        return Ok(StatusCode::NO_CONTENT);
    }

    let user_id = event.data.user_id;
    run_blocking(move || state.users.mark_upgraded(user_id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
