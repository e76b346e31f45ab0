//! Account repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use brigade_core::error::{AppError, ErrorKind};
use brigade_core::result::AppResult;
use brigade_entity::account::{Account, BoyBrief, NewAccount, Role};

/// Repository for account CRUD and query operations.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    /// Create a new account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an account by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by id", e)
            })
    }

    /// Find an account by login name (case-insensitive).
    pub async fn find_by_user_name(&self, user_name: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE LOWER(user_name) = LOWER($1)")
            .bind(user_name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by user name", e)
            })
    }

    /// Fetch a batch of accounts by id.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Account>> {
        sqlx::query_as::<_, Account>(
            "SELECT * FROM accounts WHERE id = ANY($1) ORDER BY account_name ASC",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to fetch accounts", e))
    }

    /// List non-graduated accounts holding the given role.
    pub async fn find_by_role(&self, role: Role) -> AppResult<Vec<Account>> {
        sqlx::query_as::<_, Account>(
            "SELECT * FROM accounts WHERE role = $1 AND graduated = FALSE \
             ORDER BY account_name ASC",
        )
        .bind(role)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list accounts by role", e)
        })
    }

    /// List graduated accounts.
    pub async fn find_graduated(&self) -> AppResult<Vec<Account>> {
        sqlx::query_as::<_, Account>(
            "SELECT * FROM accounts WHERE graduated = TRUE ORDER BY account_name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list graduated accounts", e)
        })
    }

    /// List the non-graduated Boy roster used in inspection summaries.
    pub async fn find_boy_roster(&self) -> AppResult<Vec<BoyBrief>> {
        sqlx::query_as::<_, BoyBrief>(
            "SELECT id, account_name, level FROM accounts \
             WHERE role = 'boy' AND graduated = FALSE ORDER BY account_name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list Boy roster", e))
    }

    /// Create a new account.
    pub async fn create(&self, data: &NewAccount) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "INSERT INTO accounts (account_name, user_name, password_hash, role, rank, level, \
                                   class_group, credentials_note, honorific, appointment, \
                                   roll_call, graduated) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING *",
        )
        .bind(&data.account_name)
        .bind(&data.user_name)
        .bind(&data.password_hash)
        .bind(data.role)
        .bind(&data.rank)
        .bind(data.level)
        .bind(&data.class_group)
        .bind(&data.credentials_note)
        .bind(data.honorific)
        .bind(&data.appointment)
        .bind(data.roll_call)
        .bind(data.graduated)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("accounts_user_name_key") =>
            {
                AppError::conflict(format!("User name '{}' already exists", data.user_name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create account", e),
        })
    }

    /// Write back every mutable column of an account.
    ///
    /// The caller merges partial updates into the full record first, so
    /// cleared optional fields (e.g. a rank set to NIL) land as NULL.
    pub async fn update(&self, account: &Account) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "UPDATE accounts SET account_name = $2, user_name = $3, password_hash = $4, \
                                 role = $5, rank = $6, level = $7, class_group = $8, \
                                 credentials_note = $9, honorific = $10, appointment = $11, \
                                 roll_call = $12, graduated = $13, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(account.id)
        .bind(&account.account_name)
        .bind(&account.user_name)
        .bind(&account.password_hash)
        .bind(account.role)
        .bind(&account.rank)
        .bind(account.level)
        .bind(&account.class_group)
        .bind(&account.credentials_note)
        .bind(account.honorific)
        .bind(&account.appointment)
        .bind(account.roll_call)
        .bind(account.graduated)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("accounts_user_name_key") =>
            {
                AppError::conflict(format!("User name '{}' already exists", account.user_name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update account", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Account {} not found", account.id)))
    }

    /// Update an account's login name and/or password hash.
    pub async fn update_credentials(
        &self,
        account_id: Uuid,
        user_name: Option<&str>,
        password_hash: Option<&str>,
    ) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "UPDATE accounts SET user_name = COALESCE($2, user_name), \
                                 password_hash = COALESCE($3, password_hash), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(account_id)
        .bind(user_name)
        .bind(password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("accounts_user_name_key") =>
            {
                AppError::conflict("User name already exists".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update credentials", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Account {account_id} not found")))
    }

    /// Delete an account by ID.
    pub async fn delete(&self, account_id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(account_id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete account", e)
            })?;

        Ok(result.rows_affected() > 0)
    }
}
