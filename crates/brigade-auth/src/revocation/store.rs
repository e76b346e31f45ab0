//! Revocation store trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use brigade_core::result::AppResult;
use brigade_entity::token::RevokedToken;

/// Denylist of session tokens invalidated before their natural expiry.
///
/// The token format is stateless, so the codec alone cannot invalidate an
/// outstanding token; the ledger records the exact signed value until its
/// own expiry would reject it anyway.
///
/// `purge_expired` may run concurrently with `is_revoked` lookups without
/// locking: only strictly expired entries are removed, and those can never
/// correspond to tokens that would still pass expiry verification.
#[async_trait]
pub trait RevocationStore: Send + Sync + 'static {
    /// Record a revocation entry, keyed by the exact signed token value.
    /// Re-revoking the same token is a no-op, not an error.
    async fn revoke(&self, entry: RevokedToken) -> AppResult<()>;

    /// Check whether a token is on the denylist.
    async fn is_revoked(&self, token: &str) -> AppResult<bool>;

    /// Delete all entries whose expiry has passed. Returns the removed count.
    async fn purge_expired(&self, now: DateTime<Utc>) -> AppResult<u64>;
}
