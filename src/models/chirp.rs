//! Chirp model for storage and API.

use serde::{Deserialize, Serialize};

/// A short text post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chirp {
    /// Position in the contiguous id range `1..=count` (also the map key)
    pub id: u64,
    /// Masked body text, at most 140 characters
    pub body: String,
    /// Id of the authoring user
    pub author_id: u64,
}
