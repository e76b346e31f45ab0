//! Administrative catalogue queries.

use sqlx::PgPool;

use brigade_core::error::{AppError, ErrorKind};
use brigade_core::result::AppResult;

/// Repository for administrative catalogue lookups.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    pool: PgPool,
}

impl AdminRepository {
    /// Create a new admin repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List the user-facing table names in the public schema.
    pub async fn list_table_names(&self) -> AppResult<Vec<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT table_name FROM information_schema.tables \
             WHERE table_schema = 'public' AND table_type = 'BASE TABLE' \
             ORDER BY table_name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list tables", e))
    }
}
