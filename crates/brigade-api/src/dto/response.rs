//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use brigade_entity::account::{Account, Honorific, Role};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Account record as returned to clients. Never carries the hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    /// Account ID.
    pub id: Uuid,
    /// Full display name.
    pub account_name: String,
    /// Login name.
    pub user_name: String,
    /// Role.
    pub role: Role,
    /// Uniformed rank.
    pub rank: Option<String>,
    /// Programme level.
    pub level: Option<i16>,
    /// Class or squad grouping.
    pub class_group: Option<String>,
    /// Credentials note.
    pub credentials_note: Option<String>,
    /// Honorific prefix.
    pub honorific: Option<Honorific>,
    /// Appointment held.
    pub appointment: Option<String>,
    /// Roll call flag.
    pub roll_call: bool,
    /// Graduated flag.
    pub graduated: bool,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last updated.
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            account_name: account.account_name,
            user_name: account.user_name,
            role: account.role,
            rank: account.rank,
            level: account.level,
            class_group: account.class_group,
            credentials_note: account.credentials_note,
            honorific: account.honorific,
            appointment: account.appointment,
            roll_call: account.roll_call,
            graduated: account.graduated,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Session token.
    pub token: String,
    /// When the session naturally expires.
    pub expires_at: DateTime<Utc>,
    /// The authenticated account.
    pub account: AccountResponse,
}

/// Session probe response; 200 either way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    /// Whether the presented token currently resolves.
    pub valid: bool,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Count response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountResponse {
    /// Count value.
    pub count: u64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
