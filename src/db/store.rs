// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Whole-file JSON document store.
//!
//! The store owns the path of the document and a reader/writer lock. Readers
//! share the lock; writers hold it exclusively for the entire
//! load→mutate→save sequence so that concurrent repository calls cannot lose
//! each other's updates.

use crate::error::{AppError, Result};
use crate::models::Document;
use parking_lot::RwLock;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// JSON file store for the [`Document`].
#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    lock: RwLock<()>,
}

impl JsonStore {
    /// Open the store at `path`, writing an empty document if no file exists.
    ///
    /// An existing file is parsed once so that a corrupt document fails here
    /// instead of on the first request.
    pub fn initialize(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
            lock: RwLock::new(()),
        };

        {
            let _guard = store.lock.write();
            match fs::metadata(&store.path) {
                Ok(_) => {
                    let document = store.read_document()?;
                    tracing::info!(
                        path = %store.path.display(),
                        chirps = document.chirps.len(),
                        users = document.users.len(),
                        refresh_tokens = document.refresh_tokens.len(),
                        "Opened existing document store"
                    );
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    store.write_document(&Document::default())?;
                    tracing::info!(path = %store.path.display(), "Created empty document store");
                }
                Err(e) => return Err(AppError::Io(e)),
            }
        }

        Ok(store)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and deserialize the current document.
    pub fn load(&self) -> Result<Document> {
        let _guard = self.lock.read();
        self.read_document()
    }

    /// Serialize `document` and replace the file with it.
    pub fn save(&self, document: &Document) -> Result<()> {
        let _guard = self.lock.write();
        self.write_document(document)
    }

    /// Run `f` against a snapshot of the document under the shared lock.
    pub fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Document) -> Result<T>,
    {
        let _guard = self.lock.read();
        let document = self.read_document()?;
        f(&document)
    }

    /// Load, mutate and save as one critical section.
    ///
    /// The document is written back only if `f` succeeds; an error from `f`
    /// leaves the file untouched.
    pub fn update<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Document) -> Result<T>,
    {
        let _guard = self.lock.write();
        let mut document = self.read_document()?;
        let value = f(&mut document)?;
        self.write_document(&document)?;
        Ok(value)
    }

    /// End the store's lifecycle.
    ///
    /// Waits for in-flight operations holding the lock, then drops the store.
    pub fn close(self) {
        let _guard = self.lock.write();
        tracing::info!(path = %self.path.display(), "Document store closed");
    }

    // ─── Unlocked helpers (caller holds the lock) ───────────────

    fn read_document(&self) -> Result<Document> {
        let data = fs::read(&self.path)?;
        serde_json::from_slice(&data).map_err(|e| {
            AppError::Corruption(format!("{}: {}", self.path.display(), e))
        })
    }

    /// Write to a sibling temp file, then rename over the document so a
    /// reader never sees a partial file.
    fn write_document(&self, document: &Document) -> Result<()> {
        let data = serde_json::to_vec(document)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Serialize document: {}", e)))?;

        let tmp_path = self.tmp_path();
        {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(&data)?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
