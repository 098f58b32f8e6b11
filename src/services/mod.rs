// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - credentials, sessions, content rules.

pub mod moderation;
pub mod password;
pub mod session;

pub use moderation::clean_chirp_body;
pub use password::{hash_password, verify_password};
pub use session::{Claims, RevokeOutcome, SessionIssuer};
