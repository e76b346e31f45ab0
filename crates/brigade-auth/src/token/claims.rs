//! Claims payload embedded in every session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use brigade_entity::account::Role;

/// Decoded payload of a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject — the account ID.
    pub sub: Uuid,
    /// Account role at the time of issuance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Returns the account ID from the subject claim.
    pub fn account_id(&self) -> Uuid {
        self.sub
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Checks whether this token has passed its natural expiry.
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_helpers() {
        let now = Utc::now().timestamp();
        let live = Claims {
            sub: Uuid::new_v4(),
            role: Some(Role::Officer),
            iat: now,
            exp: now + 600,
        };
        assert!(!live.is_expired());
        assert_eq!(live.expires_at().timestamp(), now + 600);

        let stale = Claims {
            sub: Uuid::new_v4(),
            role: None,
            iat: now - 7200,
            exp: now - 1,
        };
        assert!(stale.is_expired());
    }
}
