//! Refresh token model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque storage-backed credential used to mint new session tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Owning user
    pub user_id: u64,
    /// Hex-encoded random token (also the map key)
    pub token: String,
    /// Absolute expiry (serialized as RFC3339)
    pub expires_at: DateTime<Utc>,
}

impl RefreshToken {
    /// A token is invalid once `now` is strictly past its expiry.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }
}
