// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Chirp body cleaning and validation, applied before a chirp is stored.

use crate::error::{AppError, Result};

/// Maximum body length in characters, measured after masking.
pub const MAX_CHIRP_LENGTH: usize = 140;

/// Words replaced by [`MASK`], matched case-insensitively.
const PROFANE_WORDS: [&str; 3] = ["kerfuffle", "sharbert", "fornax"];

const MASK: &str = "****";

/// Mask profane words in a space-separated body.
///
/// Only whole words are matched, so punctuation attached to a word
/// (`"fornax!"`) keeps it from being masked.
pub fn mask_profanity(body: &str) -> String {
    body.split(' ')
        .map(|word| {
            let lower = word.to_lowercase();
            if PROFANE_WORDS.contains(&lower.as_str()) {
                MASK
            } else {
                word
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Mask the body and enforce the length limit.
pub fn clean_chirp_body(body: &str) -> Result<String> {
    let cleaned = mask_profanity(body);
    if cleaned.chars().count() > MAX_CHIRP_LENGTH {
        return Err(AppError::BadRequest("Chirp is too long".to_string()));
    }
    Ok(cleaned)
}
