// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The single persisted aggregate.

use super::{Chirp, RefreshToken, User};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything the store persists, serialized as one JSON object.
///
/// Maps are ordered so that saving an unchanged document reproduces the same
/// bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub chirps: BTreeMap<u64, Chirp>,
    #[serde(default)]
    pub users: BTreeMap<u64, User>,
    #[serde(default)]
    pub refresh_tokens: BTreeMap<String, RefreshToken>,
}

impl Document {
    /// Id the next created chirp receives.
    pub fn next_chirp_id(&self) -> u64 {
        self.chirps.len() as u64 + 1
    }

    /// Id the next created user receives.
    pub fn next_user_id(&self) -> u64 {
        self.users.len() as u64 + 1
    }

    /// Find a user by exact (case-sensitive) email.
    pub fn find_user_by_email(&self, email: &str) -> Option<&User> {
        self.users.values().find(|user| user.email == email)
    }

    /// Remove chirp `id` and shift every higher id down by one so the ids
    /// stay `1..=count`. Returns the removed chirp.
    pub fn remove_chirp_compacting(&mut self, id: u64) -> Option<Chirp> {
        let removed = self.chirps.remove(&id)?;

        let shifted: Vec<Chirp> = self
            .chirps
            .split_off(&id)
            .into_values()
            .map(|mut chirp| {
                chirp.id -= 1;
                chirp
            })
            .collect();

        for chirp in shifted {
            self.chirps.insert(chirp.id, chirp);
        }

        Some(removed)
    }
}
