//! Administrative catalogue and maintenance operations.

use std::sync::Arc;

use brigade_auth::session::Authenticator;
use brigade_core::result::AppResult;
use brigade_database::repositories::AdminRepository;

/// Handles administrative lookups and on-demand maintenance.
#[derive(Debug, Clone)]
pub struct AdminService {
    /// Admin catalogue repository.
    repo: Arc<AdminRepository>,
    /// Authenticator, for the revocation ledger sweep.
    authenticator: Arc<Authenticator>,
}

impl AdminService {
    /// Creates a new admin service.
    pub fn new(repo: Arc<AdminRepository>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repo,
            authenticator,
        }
    }

    /// Lists the user-facing table names in the public schema.
    pub async fn list_tables(&self) -> AppResult<Vec<String>> {
        self.repo.list_table_names().await
    }

    /// Runs the revocation ledger sweep on demand. Returns the number of
    /// entries removed.
    pub async fn purge_expired_tokens(&self) -> AppResult<u64> {
        Ok(self.authenticator.purge_expired_tokens().await?)
    }
}
