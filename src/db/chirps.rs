// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chirp repository.
//!
//! Chirp ids always form the contiguous range `1..=count`: creation appends
//! `count + 1`, and deleting id `k` renumbers every chirp above `k` down by
//! one. API responses depend on this, so it is not an optimization detail.

use crate::db::JsonStore;
use crate::error::{AppError, Result};
use crate::models::Chirp;
use std::sync::Arc;

/// Chirp operations over the shared store.
#[derive(Debug, Clone)]
pub struct ChirpRepository {
    store: Arc<JsonStore>,
}

impl ChirpRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// Create a chirp with the next id in the contiguous range.
    ///
    /// Body validation is the caller's job; `author_id` is not checked.
    pub fn create(&self, body: &str, author_id: u64) -> Result<Chirp> {
        let chirp = self.store.update(|doc| {
            let chirp = Chirp {
                id: doc.next_chirp_id(),
                body: body.to_string(),
                author_id,
            };
            doc.chirps.insert(chirp.id, chirp.clone());
            Ok(chirp)
        })?;

        tracing::info!(chirp_id = chirp.id, author_id, "Chirp created");
        Ok(chirp)
    }

    /// All chirps. Callers sort as they need.
    pub fn list_all(&self) -> Result<Vec<Chirp>> {
        self.store
            .read(|doc| Ok(doc.chirps.values().cloned().collect()))
    }

    /// Chirps written by `author_id`; `NotFound` when there are none.
    pub fn list_by_author(&self, author_id: u64) -> Result<Vec<Chirp>> {
        let chirps: Vec<Chirp> = self.store.read(|doc| {
            Ok(doc
                .chirps
                .values()
                .filter(|chirp| chirp.author_id == author_id)
                .cloned()
                .collect())
        })?;

        if chirps.is_empty() {
            return Err(AppError::NotFound(format!(
                "No chirps by author {}",
                author_id
            )));
        }
        Ok(chirps)
    }

    pub fn get_by_id(&self, id: u64) -> Result<Chirp> {
        self.store.read(|doc| {
            doc.chirps
                .get(&id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("Chirp {} not found", id)))
        })
    }

    /// Delete chirp `id` and compact the ids above it.
    ///
    /// O(n) in the number of chirps. A missing id leaves the store unchanged.
    pub fn delete_by_id(&self, id: u64) -> Result<()> {
        let removed = self.store.update(|doc| {
            doc.remove_chirp_compacting(id)
                .ok_or_else(|| AppError::NotFound(format!("Chirp {} not found", id)))
        })?;

        tracing::info!(
            chirp_id = id,
            author_id = removed.author_id,
            "Chirp deleted, higher ids renumbered"
        );
        Ok(())
    }

    /// Delete chirp `id` only if `author_id` wrote it.
    ///
    /// The ownership check and the delete share one critical section, so a
    /// concurrent renumbering cannot make this remove someone else's chirp.
    pub fn delete_authored_by(&self, id: u64, author_id: u64) -> Result<()> {
        self.store.update(|doc| {
            let chirp = doc
                .chirps
                .get(&id)
                .ok_or_else(|| AppError::NotFound(format!("Chirp {} not found", id)))?;

            if chirp.author_id != author_id {
                tracing::warn!(
                    chirp_id = id,
                    user_id = author_id,
                    owner_id = chirp.author_id,
                    "Refused to delete another user's chirp"
                );
                return Err(AppError::Forbidden(
                    "You may only delete your own chirps".to_string(),
                ));
            }

            doc.remove_chirp_compacting(id);
            Ok(())
        })?;

        tracing::info!(chirp_id = id, author_id, "Chirp deleted, higher ids renumbered");
        Ok(())
    }
}
