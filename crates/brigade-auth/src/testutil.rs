//! In-memory fixtures for exercising the auth core without a database.
//!
//! Shared between this crate's unit and integration tests. Gated behind
//! the `testutil` cargo feature so the fixtures never reach production
//! builds; integration tests pick the feature up through the crate's
//! self dev-dependency.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;
use uuid::Uuid;

use brigade_core::result::AppResult;
use brigade_entity::account::{Account, Role};

use crate::session::CredentialStore;

/// Credential store holding accounts in a map keyed by lowercase user name.
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    accounts: Arc<Mutex<HashMap<String, Account>>>,
}

impl MemoryCredentialStore {
    /// Creates an empty in-memory credential store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an account, keyed by its user name.
    pub async fn insert(&self, account: Account) {
        self.accounts
            .lock()
            .await
            .insert(account.user_name.to_lowercase(), account);
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn find_by_user_name(&self, user_name: &str) -> AppResult<Option<Account>> {
        Ok(self
            .accounts
            .lock()
            .await
            .get(&user_name.to_lowercase())
            .cloned())
    }
}

/// Builds an account record with sensible defaults for tests.
///
/// The password hash is a placeholder; tests that exercise login replace
/// it with a real Argon2 digest.
pub fn fixture_account(user_name: &str, role: Role, appointment: Option<&str>) -> Account {
    let now = Utc::now();
    Account {
        id: Uuid::new_v4(),
        account_name: user_name.to_string(),
        user_name: user_name.to_string(),
        password_hash: String::new(),
        role,
        rank: None,
        level: None,
        class_group: None,
        credentials_note: None,
        honorific: None,
        appointment: appointment.map(String::from),
        roll_call: true,
        graduated: false,
        created_at: now,
        updated_at: now,
    }
}
