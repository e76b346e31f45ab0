//! Member role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles available in the RBAC system.
///
/// Roles are ordered by privilege level: Admin > Officer > Primer > Boy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "member_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full system administrator.
    Admin,
    /// Commissioned officer running the company.
    Officer,
    /// Senior member assisting the officers.
    Primer,
    /// Ordinary member.
    Boy,
}

impl Role {
    /// Roles allowed to read the staff-facing record listings.
    pub const STAFF: &'static [Role] = &[Role::Admin, Role::Officer, Role::Primer];

    /// Roles allowed to create accounts and manage appointments.
    pub const OFFICERS: &'static [Role] = &[Role::Admin, Role::Officer];

    /// Return the hierarchy rank (higher = more privileged).
    pub fn rank(&self) -> u8 {
        match self {
            Self::Admin => 4,
            Self::Officer => 3,
            Self::Primer => 2,
            Self::Boy => 1,
        }
    }

    /// Check if this role has at least the given role's privileges.
    pub fn has_at_least(&self, other: &Role) -> bool {
        self.rank() >= other.rank()
    }

    /// Check if this role is an admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Check if this role is a primer or higher.
    pub fn is_staff(&self) -> bool {
        self.has_at_least(&Self::Primer)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Officer => "officer",
            Self::Primer => "primer",
            Self::Boy => "boy",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = brigade_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "officer" => Ok(Self::Officer),
            "primer" => Ok(Self::Primer),
            "boy" => Ok(Self::Boy),
            _ => Err(brigade_core::AppError::validation(format!(
                "Invalid member role: '{s}'. Expected one of: admin, officer, primer, boy"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_ordering() {
        assert!(Role::Admin.has_at_least(&Role::Boy));
        assert!(Role::Admin.has_at_least(&Role::Admin));
        assert!(Role::Officer.has_at_least(&Role::Primer));
        assert!(!Role::Boy.has_at_least(&Role::Primer));
        assert!(!Role::Primer.has_at_least(&Role::Officer));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("OFFICER".parse::<Role>().unwrap(), Role::Officer);
        assert!("corporal".parse::<Role>().is_err());
    }

    #[test]
    fn test_staff_membership() {
        assert!(Role::Primer.is_staff());
        assert!(!Role::Boy.is_staff());
        assert!(!Role::STAFF.contains(&Role::Boy));
        assert!(Role::OFFICERS.contains(&Role::Admin));
    }
}
