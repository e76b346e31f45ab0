//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::honorific::Honorific;
use super::role::Role;

/// A registered member account in the company records.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Unique account identifier.
    pub id: Uuid,
    /// Full display name.
    pub account_name: String,
    /// Unique login name.
    pub user_name: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Member role (RBAC).
    pub role: Role,
    /// Uniformed rank held by the member, if any.
    pub rank: Option<String>,
    /// Programme level (1 through 4).
    pub level: Option<i16>,
    /// Class or squad grouping.
    pub class_group: Option<String>,
    /// Free-form credentials note (qualifications, certifications).
    pub credentials_note: Option<String>,
    /// Honorific prefix for staff display names.
    pub honorific: Option<Honorific>,
    /// Appointment held by the member, if any.
    pub appointment: Option<String>,
    /// Whether the member is counted in roll call.
    pub roll_call: bool,
    /// Whether the member has graduated out of the company.
    pub graduated: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Check if the member currently holds an appointment.
    pub fn holds_appointment(&self) -> bool {
        self.appointment.is_some()
    }

    /// Check if this account has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAccount {
    /// Full display name.
    pub account_name: String,
    /// Desired login name.
    pub user_name: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role.
    pub role: Role,
    /// Uniformed rank, if any.
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
}

/// Minimal account projection used in cross-record listings.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AccountBrief {
    /// Account identifier.
    pub id: Uuid,
    /// Full display name.
    pub account_name: String,
}

/// Projection of a Boy account used in inspection rosters.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BoyBrief {
    /// Account identifier.
    pub id: Uuid,
    /// Full display name.
    pub account_name: String,
    /// Programme level.
    pub level: Option<i16>,
}
