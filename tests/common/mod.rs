// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chirpy::config::Config;
use chirpy::db::{ChirpRepository, JsonStore, RefreshTokenRepository, UserRepository};
use chirpy::routes::create_router;
use chirpy::services::SessionIssuer;
use chirpy::AppState;
use std::sync::Arc;
use tempfile::TempDir;

/// Signing key used by every test issuer.
#[allow(dead_code)]
pub const TEST_SIGNING_KEY: &[u8] = b"test_signing_key_32_bytes_long!!";

/// A store in its own temp directory. Keep the `TempDir` alive for the test.
#[allow(dead_code)]
pub fn test_store() -> (TempDir, Arc<JsonStore>) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let store = JsonStore::initialize(dir.path().join("database.json"))
        .expect("Failed to initialize store");
    (dir, Arc::new(store))
}

/// Repositories and issuer sharing one fresh store.
#[allow(dead_code)]
pub struct TestRepos {
    pub dir: TempDir,
    pub store: Arc<JsonStore>,
    pub chirps: ChirpRepository,
    pub users: UserRepository,
    pub refresh_tokens: RefreshTokenRepository,
    pub sessions: SessionIssuer,
}

#[allow(dead_code)]
pub fn test_repos() -> TestRepos {
    let (dir, store) = test_store();
    let users = UserRepository::new(store.clone());
    let refresh_tokens = RefreshTokenRepository::new(store.clone());
    let sessions = SessionIssuer::new(TEST_SIGNING_KEY, users.clone(), refresh_tokens.clone());

    TestRepos {
        dir,
        chirps: ChirpRepository::new(store.clone()),
        store,
        users,
        refresh_tokens,
        sessions,
    }
}

/// Create a test app over a fresh store.
/// Returns the router, the shared state and the temp dir holding the store.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>, TempDir) {
    let (dir, store) = test_store();
    let config = Config {
        db_path: store.path().to_path_buf(),
        ..Config::test_default()
    };

    let state = Arc::new(AppState::new(config, store));
    (create_router(state.clone()), state, dir)
}
