// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Database layer (single JSON document).
//!
//! Every repository operation is one atomic load→mutate→save cycle through
//! [`JsonStore`].

pub mod chirps;
pub mod refresh_tokens;
pub mod store;
pub mod users;

pub use chirps::ChirpRepository;
pub use refresh_tokens::RefreshTokenRepository;
pub use store::JsonStore;
pub use users::UserRepository;
