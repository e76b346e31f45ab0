//! Uniform inspection repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use brigade_core::error::{AppError, ErrorKind};
use brigade_core::result::AppResult;
use brigade_entity::account::{AccountBrief, BoyBrief};
use brigade_entity::inspection::InspectionRecord;

/// Flat join row produced by the summary query.
#[derive(Debug, FromRow)]
struct InspectionJoinRow {
    id: Uuid,
    score: Option<i32>,
    assessed_date: Option<DateTime<Utc>>,
    boy_id: Uuid,
    boy_name: String,
    boy_level: Option<i16>,
    assessor_id: Option<Uuid>,
    assessor_name: Option<String>,
}

/// Repository for uniform inspection queries.
#[derive(Debug, Clone)]
pub struct InspectionRepository {
    pool: PgPool,
}

impl InspectionRepository {
    /// Create a new inspection repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All inspection entries joined with boy and assessor details.
    pub async fn find_records(&self) -> AppResult<Vec<InspectionRecord>> {
        let rows = sqlx::query_as::<_, InspectionJoinRow>(
            "SELECT i.id, i.score, i.assessed_date, \
                    b.id AS boy_id, b.account_name AS boy_name, b.level AS boy_level, \
                    a.id AS assessor_id, a.account_name AS assessor_name \
             FROM uniform_inspections i \
             JOIN accounts b ON b.id = i.boy_id \
             LEFT JOIN accounts a ON a.id = i.assessor_id \
             ORDER BY i.created_at ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list inspections", e)
        })?;

        Ok(rows.into_iter().map(Self::into_record).collect())
    }

    fn into_record(row: InspectionJoinRow) -> InspectionRecord {
        let assessor = match (row.assessor_id, row.assessor_name) {
            (Some(id), Some(account_name)) => Some(AccountBrief { id, account_name }),
            _ => None,
        };
        InspectionRecord {
            id: row.id,
            score: row.score,
            assessed_date: row.assessed_date,
            boy: BoyBrief {
                id: row.boy_id,
                account_name: row.boy_name,
                level: row.boy_level,
            },
            assessor,
        }
    }
}
