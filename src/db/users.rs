// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User repository.

use crate::db::JsonStore;
use crate::error::{AppError, Result};
use crate::models::User;
use std::sync::Arc;

/// User operations over the shared store.
#[derive(Debug, Clone)]
pub struct UserRepository {
    store: Arc<JsonStore>,
}

impl UserRepository {
    pub fn new(store: Arc<JsonStore>) -> Self {
        Self { store }
    }

    /// Create a user; `Conflict` if the email is already registered.
    pub fn create(&self, email: &str, password_hash: &str) -> Result<User> {
        let user = self.store.update(|doc| {
            if doc.find_user_by_email(email).is_some() {
                return Err(AppError::Conflict(format!(
                    "User with email {} already exists",
                    email
                )));
            }

            let user = User {
                id: doc.next_user_id(),
                email: email.to_string(),
                password_hash: password_hash.to_string(),
                token: String::new(),
                is_upgraded: false,
            };
            doc.users.insert(user.id, user.clone());
            Ok(user)
        })?;

        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    pub fn get_by_id(&self, id: u64) -> Result<User> {
        self.store.read(|doc| {
            doc.users
                .get(&id)
                .cloned()
                .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
        })
    }

    /// Exact, case-sensitive email lookup.
    pub fn get_by_email(&self, email: &str) -> Result<User> {
        self.store.read(|doc| {
            doc.find_user_by_email(email)
                .cloned()
                .ok_or_else(|| AppError::NotFound("No user with that email".to_string()))
        })
    }

    /// Replace email and password hash, keeping the upgrade flag.
    ///
    /// The new email must not belong to a different user.
    pub fn update_profile(&self, id: u64, email: &str, password_hash: &str) -> Result<User> {
        let user = self.store.update(|doc| {
            if !doc.users.contains_key(&id) {
                return Err(AppError::NotFound(format!("User {} not found", id)));
            }

            if doc
                .find_user_by_email(email)
                .is_some_and(|other| other.id != id)
            {
                return Err(AppError::Conflict(format!(
                    "User with email {} already exists",
                    email
                )));
            }

            let user = doc
                .users
                .get_mut(&id)
                .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;
            user.email = email.to_string();
            user.password_hash = password_hash.to_string();
            Ok(user.clone())
        })?;

        tracing::info!(user_id = id, "User profile updated");
        Ok(user)
    }

    /// Flag the user as upgraded. Idempotent.
    pub fn mark_upgraded(&self, id: u64) -> Result<()> {
        let was_upgraded = self.store.update(|doc| {
            let user = doc
                .users
                .get_mut(&id)
                .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))?;
            let was_upgraded = user.is_upgraded;
            user.is_upgraded = true;
            Ok(was_upgraded)
        })?;

        if was_upgraded {
            tracing::debug!(user_id = id, "User already upgraded");
        } else {
            tracing::info!(user_id = id, "User upgraded");
        }
        Ok(())
    }
}
