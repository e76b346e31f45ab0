//! Revoked token repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use brigade_core::error::{AppError, ErrorKind};
use brigade_core::result::AppResult;
use brigade_entity::token::RevokedToken;

/// Repository for the revoked-token denylist.
#[derive(Debug, Clone)]
pub struct RevokedTokenRepository {
    pool: PgPool,
}

impl RevokedTokenRepository {
    /// Create a new revoked token repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a revocation entry. Re-recording the same token is a no-op.
    pub async fn insert(&self, entry: &RevokedToken) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO revoked_tokens (token, expires_at) VALUES ($1, $2) \
             ON CONFLICT (token) DO NOTHING",
        )
        .bind(&entry.token)
        .bind(entry.expires_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to record revoked token", e)
        })?;
        Ok(())
    }

    /// Check whether a token is on the denylist.
    pub async fn exists(&self, token: &str) -> AppResult<bool> {
        let found: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM revoked_tokens WHERE token = $1")
                .bind(token)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to check revoked token", e)
                })?;
        Ok(found.is_some())
    }

    /// Delete all entries whose expiry has passed. Returns the removed count.
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at <= $1")
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to purge revoked tokens", e)
            })?;

        Ok(result.rows_affected())
    }
}
