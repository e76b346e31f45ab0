//! Award repository implementation.

use sqlx::PgPool;

use brigade_core::error::{AppError, ErrorKind};
use brigade_core::result::AppResult;
use brigade_entity::award::Award;

/// Repository for award badge queries.
#[derive(Debug, Clone)]
pub struct AwardRepository {
    pool: PgPool,
}

impl AwardRepository {
    /// Create a new award repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every badge in the awards scheme.
    pub async fn find_all(&self) -> AppResult<Vec<Award>> {
        sqlx::query_as::<_, Award>("SELECT * FROM awards ORDER BY badge_name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list awards", e))
    }
}
