//! Credential lookup seam over account storage.

use std::sync::Arc;

use async_trait::async_trait;

use brigade_core::result::AppResult;
use brigade_database::repositories::AccountRepository;
use brigade_entity::account::Account;

/// Read access to stored credentials, abstracted so the
/// [`Authenticator`](crate::session::Authenticator) can run against the
/// database in production and an in-memory fixture in tests.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Look up exactly one account by login name (case-insensitive).
    async fn find_by_user_name(&self, user_name: &str) -> AppResult<Option<Account>>;
}

/// Credential store backed by the accounts table.
#[derive(Debug, Clone)]
pub struct DatabaseCredentialStore {
    /// Account repository.
    repo: Arc<AccountRepository>,
}

impl DatabaseCredentialStore {
    /// Creates a new database-backed credential store.
    pub fn new(repo: Arc<AccountRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CredentialStore for DatabaseCredentialStore {
    async fn find_by_user_name(&self, user_name: &str) -> AppResult<Option<Account>> {
        self.repo.find_by_user_name(user_name).await
    }
}
