// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Middleware modules (session authentication, webhook API key).

pub mod api_key;
pub mod auth;

pub use api_key::require_polka_key;
pub use auth::require_auth;
