// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session issuer tests: session token verification and the refresh token
//! lifecycle (issue → resolve → revoke / expire).

use chirpy::db::{RefreshTokenRepository, UserRepository};
use chirpy::error::AppError;
use chirpy::services::{RevokeOutcome, SessionIssuer};
use chrono::{Duration, Utc};

mod common;

#[test]
fn test_session_token_roundtrip() {
    let repos = common::test_repos();

    let token = repos
        .sessions
        .mint_session_token(7, Duration::hours(1))
        .unwrap();

    assert_eq!(repos.sessions.verify_session_token(&token).unwrap(), "7");
    assert_eq!(repos.sessions.authenticate(&token).unwrap(), 7);
}

#[test]
fn test_expired_session_token_rejected() {
    let repos = common::test_repos();

    let token = repos
        .sessions
        .mint_session_token(7, Duration::seconds(-5))
        .unwrap();

    assert!(matches!(
        repos.sessions.verify_session_token(&token),
        Err(AppError::Unauthorized(_))
    ));
}

#[test]
fn test_foreign_secret_rejected() {
    let repos = common::test_repos();
    let (_dir, other_store) = common::test_store();
    let other = SessionIssuer::new(
        b"a_completely_different_secret!!!",
        UserRepository::new(other_store.clone()),
        RefreshTokenRepository::new(other_store),
    );

    let token = other.mint_session_token(1, Duration::hours(1)).unwrap();

    assert!(matches!(
        repos.sessions.verify_session_token(&token),
        Err(AppError::Unauthorized(_))
    ));
}

#[test]
fn test_garbage_token_rejected() {
    let repos = common::test_repos();

    for token in ["", "not-a-jwt", "a.b.c"] {
        assert!(matches!(
            repos.sessions.verify_session_token(token),
            Err(AppError::Unauthorized(_))
        ));
    }
}

#[test]
fn test_refresh_token_resolves_owner() {
    let repos = common::test_repos();
    let alice = repos.users.create("alice@example.com", "hash").unwrap();

    let token = repos.sessions.mint_refresh_token(alice.id).unwrap();

    assert_eq!(repos.sessions.resolve_user(&token).unwrap(), alice);

    let record = repos.refresh_tokens.get(&token).unwrap();
    assert_eq!(record.user_id, alice.id);
    let ttl = record.expires_at - Utc::now();
    assert!(ttl > Duration::hours(23) && ttl <= Duration::hours(24));
}

#[test]
fn test_revoked_refresh_token_rejected() {
    let repos = common::test_repos();
    let alice = repos.users.create("alice@example.com", "hash").unwrap();
    let token = repos.sessions.mint_refresh_token(alice.id).unwrap();

    assert_eq!(repos.sessions.revoke(&token).unwrap(), RevokeOutcome::Revoked);

    assert!(matches!(
        repos.sessions.resolve_user(&token),
        Err(AppError::Unauthorized(_))
    ));
    assert_eq!(repos.sessions.revoke(&token).unwrap(), RevokeOutcome::Unknown);
}

#[test]
fn test_expired_refresh_token_rejected() {
    let repos = common::test_repos();
    let alice = repos.users.create("alice@example.com", "hash").unwrap();
    repos
        .refresh_tokens
        .store("deadbeef", alice.id, Utc::now() - Duration::seconds(1))
        .unwrap();

    assert!(matches!(
        repos.sessions.resolve_user("deadbeef"),
        Err(AppError::Unauthorized(_))
    ));
}

#[test]
fn test_refresh_token_for_missing_user_rejected() {
    let repos = common::test_repos();
    let token = repos.sessions.mint_refresh_token(99).unwrap();

    assert!(matches!(
        repos.sessions.resolve_user(&token),
        Err(AppError::Unauthorized(_))
    ));
}

#[test]
fn test_unknown_refresh_token_rejected() {
    let repos = common::test_repos();

    assert!(matches!(
        repos.sessions.resolve_user("0000"),
        Err(AppError::Unauthorized(_))
    ));
}

#[test]
fn test_repository_revoke_always_succeeds() {
    let repos = common::test_repos();

    assert!(!repos.refresh_tokens.revoke("never-issued").unwrap());

    repos
        .refresh_tokens
        .store("cafe", 1, Utc::now() + Duration::hours(1))
        .unwrap();
    assert!(repos.refresh_tokens.revoke("cafe").unwrap());
    assert!(matches!(
        repos.refresh_tokens.get("cafe"),
        Err(AppError::NotFound(_))
    ));
}
