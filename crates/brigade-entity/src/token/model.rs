//! Revoked session token entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A session token invalidated before its natural expiry.
///
/// Entries exist only for tokens revoked while still valid; once
/// `expires_at` passes, the entry is redundant (the token would fail
/// expiry validation anyway) and is removed by the periodic sweep.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RevokedToken {
    /// The exact signed token value.
    pub token: String,
    /// The token's own natural expiry.
    pub expires_at: DateTime<Utc>,
}
