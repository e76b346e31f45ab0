//! PostgreSQL-backed revocation store wrapping the database repository.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use brigade_core::result::AppResult;
use brigade_database::repositories::RevokedTokenRepository;
use brigade_entity::token::RevokedToken;

use super::store::RevocationStore;

/// Revocation store persisted in the `revoked_tokens` table.
///
/// Concurrency control is provided by the database; the store issues only
/// single-row reads and writes.
#[derive(Debug, Clone)]
pub struct DatabaseRevocationStore {
    /// Revoked token repository.
    repo: Arc<RevokedTokenRepository>,
}

impl DatabaseRevocationStore {
    /// Creates a new database-backed revocation store.
    pub fn new(repo: Arc<RevokedTokenRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl RevocationStore for DatabaseRevocationStore {
    async fn revoke(&self, entry: RevokedToken) -> AppResult<()> {
        self.repo.insert(&entry).await
    }

    async fn is_revoked(&self, token: &str) -> AppResult<bool> {
        self.repo.exists(token).await
    }

    async fn purge_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        self.repo.purge_expired(now).await
    }
}
