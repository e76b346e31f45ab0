//! In-memory revocation store for single-node deployments and tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::debug;

use brigade_core::result::AppResult;
use brigade_entity::token::RevokedToken;

use super::store::RevocationStore;

/// In-memory revocation ledger using a Tokio mutex for thread safety.
///
/// Suitable for single-node deployments only; entries do not survive a
/// process restart, which shortens revocations to the token TTL at worst.
#[derive(Debug, Clone, Default)]
pub struct MemoryRevocationStore {
    /// Revoked token values keyed to their natural expiry.
    entries: Arc<Mutex<HashMap<String, DateTime<Utc>>>>,
}

impl MemoryRevocationStore {
    /// Creates a new empty in-memory revocation store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Whether the ledger holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl RevocationStore for MemoryRevocationStore {
    async fn revoke(&self, entry: RevokedToken) -> AppResult<()> {
        let mut entries = self.entries.lock().await;
        // Idempotent: keep the expiry recorded at first revocation.
        entries.entry(entry.token).or_insert(entry.expires_at);
        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> AppResult<bool> {
        Ok(self.entries.lock().await.contains_key(token))
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, expires_at| *expires_at > now);
        let removed = (before - entries.len()) as u64;
        if removed > 0 {
            debug!(removed, "Purged expired revocation entries");
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn entry(token: &str, expires_at: DateTime<Utc>) -> RevokedToken {
        RevokedToken {
            token: token.to_string(),
            expires_at,
        }
    }

    #[tokio::test]
    async fn test_revoke_is_idempotent() {
        let store = MemoryRevocationStore::new();
        let exp = Utc::now() + Duration::hours(1);

        store.revoke(entry("tok", exp)).await.unwrap();
        store.revoke(entry("tok", exp)).await.unwrap();

        assert!(store.is_revoked("tok").await.unwrap());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_purge_removes_only_strictly_expired() {
        let store = MemoryRevocationStore::new();
        let now = Utc::now();

        store.revoke(entry("dead", now - Duration::seconds(1))).await.unwrap();
        store.revoke(entry("boundary", now)).await.unwrap();
        store.revoke(entry("live", now + Duration::hours(1))).await.unwrap();

        let removed = store.purge_expired(now).await.unwrap();
        assert_eq!(removed, 2);
        assert!(!store.is_revoked("dead").await.unwrap());
        assert!(!store.is_revoked("boundary").await.unwrap());
        assert!(store.is_revoked("live").await.unwrap());
    }

    #[tokio::test]
    async fn test_purge_on_empty_store() {
        let store = MemoryRevocationStore::new();
        assert_eq!(store.purge_expired(Utc::now()).await.unwrap(), 0);
        assert!(store.is_empty().await);
    }
}
