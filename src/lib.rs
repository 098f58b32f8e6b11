// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Chirpy: a small social-posting backend.
//!
//! This crate stores chirps, users and refresh tokens in a single JSON
//! document and gates writes behind bcrypt passwords, signed session tokens
//! and opaque refresh tokens.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use config::Config;
use db::{ChirpRepository, JsonStore, RefreshTokenRepository, UserRepository};
use services::SessionIssuer;
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<JsonStore>,
    pub chirps: ChirpRepository,
    pub users: UserRepository,
    pub sessions: SessionIssuer,
}

impl AppState {
    /// Wire repositories and the session issuer over one store.
    pub fn new(config: Config, store: Arc<JsonStore>) -> Self {
        let users = UserRepository::new(store.clone());
        let sessions = SessionIssuer::new(
            &config.jwt_signing_key,
            users.clone(),
            RefreshTokenRepository::new(store.clone()),
        );

        Self {
            chirps: ChirpRepository::new(store.clone()),
            users,
            sessions,
            store,
            config,
        }
    }
}
