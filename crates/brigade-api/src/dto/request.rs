//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use brigade_entity::account::{Honorific, Role};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login name.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create account request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAccountRequest {
    /// Full display name.
    #[validate(length(min = 1, max = 255))]
    pub account_name: String,
    /// Desired login name.
    #[validate(length(min = 3, max = 100))]
    pub user_name: String,
    /// Password. The configured minimum length is enforced in the
    /// account service, where the policy value is available.
    #[validate(length(min = 1))]
    pub password: String,
    /// Assigned role.
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
    pub roll_call: Option<bool>,
    /// Graduated flag.
    pub graduated: Option<bool>,
}

/// Partial account update request body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    pub account_name: Option<String>,
    pub user_name: Option<String>,
    /// Non-empty replaces the password; empty or absent leaves it.
    pub password: Option<String>,
    pub role: Option<Role>,
    /// The literal `"NIL"` clears the stored rank.
    pub rank: Option<String>,
    pub level: Option<i16>,
    pub class_group: Option<String>,
    pub credentials_note: Option<String>,
    pub honorific: Option<Honorific>,
    pub appointment: Option<String>,
    pub roll_call: Option<bool>,
    pub graduated: Option<bool>,
}

/// Own-credentials update request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCredentialsRequest {
    /// New login name.
    pub user_name: Option<String>,
    /// New password.
    pub password: Option<String>,
}

/// Query string for batch account fetches: `?ids=<uuid>,<uuid>,...`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountIdsQuery {
    /// Comma-separated account IDs.
    pub ids: String,
}

impl AccountIdsQuery {
    /// Parses the comma-separated list, rejecting malformed entries.
    pub fn parse(&self) -> Result<Vec<Uuid>, uuid::Error> {
        self.ids
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(|s| s.trim().parse())
            .collect()
    }
}

/// Create appointment request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAppointmentRequest {
    /// Unique appointment title.
    #[validate(length(min = 1, max = 255))]
    pub appointment_name: String,
    /// Role tier the appointment belongs to.
    pub role: Role,
    /// Account taking the appointment.
    pub account_id: Uuid,
}

/// Appointment reassignment request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReassignAppointmentRequest {
    /// Account taking over the appointment.
    pub account_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_ids_query_parse() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let query = AccountIdsQuery {
            ids: format!("{a}, {b}"),
        };
        assert_eq!(query.parse().unwrap(), vec![a, b]);

        let empty = AccountIdsQuery { ids: String::new() };
        assert!(empty.parse().unwrap().is_empty());

        let bad = AccountIdsQuery {
            ids: "not-a-uuid".to_string(),
        };
        assert!(bad.parse().is_err());
    }
}
