//! Role-set and hierarchy authorization checks.
//!
//! All checks are pure functions of already-resolved identity data: no
//! I/O, and the only failure outcomes are [`AuthError::MissingRole`] and
//! [`AuthError::Forbidden`].

use brigade_entity::account::{Account, Role};

use crate::error::AuthError;
use crate::session::Identity;

/// Evaluates whether a resolved identity may perform a requested action.
#[derive(Debug, Clone, Default)]
pub struct Authorizer;

impl Authorizer {
    /// Creates a new authorizer.
    pub fn new() -> Self {
        Self
    }

    /// Checks that the identity carries a role and that it is a member of
    /// the allowed set. Returns the role on success.
    pub fn authorize(&self, identity: &Identity, allowed: &[Role]) -> Result<Role, AuthError> {
        let role = identity.role.ok_or(AuthError::MissingRole)?;
        if allowed.contains(&role) {
            Ok(role)
        } else {
            Err(AuthError::Forbidden)
        }
    }

    /// Same check against an account's authoritative stored role.
    pub fn authorize_account(&self, account: &Account, allowed: &[Role]) -> Result<(), AuthError> {
        if allowed.contains(&account.role) {
            Ok(())
        } else {
            Err(AuthError::Forbidden)
        }
    }

    /// Role-set check that also admits a Boy holding an appointment.
    ///
    /// Used for member-facing records (e.g. the awards scheme) where an
    /// appointment confers elevated standing within the Boy role.
    pub fn authorize_member(&self, account: &Account, allowed: &[Role]) -> Result<(), AuthError> {
        if allowed.contains(&account.role)
            || (account.role == Role::Boy && account.holds_appointment())
        {
            Ok(())
        } else {
            Err(AuthError::Forbidden)
        }
    }

    /// Hierarchy guard for destructive cross-account operations.
    ///
    /// The actor may act on the target only when its rank is at least the
    /// target's. A Boy actor without an appointment may never act on
    /// another account, regardless of rank equality.
    pub fn authorize_hierarchy(&self, actor: &Account, target: &Account) -> Result<(), AuthError> {
        if actor.role == Role::Boy && !actor.holds_appointment() {
            return Err(AuthError::Forbidden);
        }
        if actor.role.has_at_least(&target.role) {
            Ok(())
        } else {
            Err(AuthError::Forbidden)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::fixture_account;
    use uuid::Uuid;

    fn identity(role: Option<Role>) -> Identity {
        Identity {
            id: Uuid::new_v4(),
            role,
        }
    }

    #[test]
    fn test_authorize_role_set() {
        let authorizer = Authorizer::new();

        assert_eq!(
            authorizer
                .authorize(&identity(Some(Role::Officer)), Role::STAFF)
                .unwrap(),
            Role::Officer
        );
        assert!(matches!(
            authorizer.authorize(&identity(Some(Role::Boy)), Role::STAFF),
            Err(AuthError::Forbidden)
        ));
        assert!(matches!(
            authorizer.authorize(&identity(None), Role::STAFF),
            Err(AuthError::MissingRole)
        ));
    }

    #[test]
    fn test_authorize_member_admits_appointed_boy() {
        let authorizer = Authorizer::new();
        let appointed = fixture_account("appointed", Role::Boy, Some("Duty NCO"));
        let plain = fixture_account("plain", Role::Boy, None);

        assert!(authorizer.authorize_member(&appointed, Role::STAFF).is_ok());
        assert!(matches!(
            authorizer.authorize_member(&plain, Role::STAFF),
            Err(AuthError::Forbidden)
        ));
    }

    #[test]
    fn test_hierarchy_matrix() {
        let authorizer = Authorizer::new();
        let admin = fixture_account("admin", Role::Admin, None);
        let officer = fixture_account("officer", Role::Officer, None);
        let primer = fixture_account("primer", Role::Primer, None);
        let boy = fixture_account("boy", Role::Boy, None);

        // Officer may act on Boy or Primer, not Admin.
        assert!(authorizer.authorize_hierarchy(&officer, &boy).is_ok());
        assert!(authorizer.authorize_hierarchy(&officer, &primer).is_ok());
        assert!(authorizer.authorize_hierarchy(&officer, &officer).is_ok());
        assert!(matches!(
            authorizer.authorize_hierarchy(&officer, &admin),
            Err(AuthError::Forbidden)
        ));

        assert!(authorizer.authorize_hierarchy(&admin, &officer).is_ok());
        assert!(matches!(
            authorizer.authorize_hierarchy(&primer, &officer),
            Err(AuthError::Forbidden)
        ));
    }

    #[test]
    fn test_boy_without_appointment_acts_on_no_one() {
        let authorizer = Authorizer::new();
        let plain = fixture_account("plain", Role::Boy, None);
        let other = fixture_account("other", Role::Boy, None);
        let appointed = fixture_account("appointed", Role::Boy, Some("Colour Bearer"));

        assert!(matches!(
            authorizer.authorize_hierarchy(&plain, &other),
            Err(AuthError::Forbidden)
        ));
        // An appointment restores the ordinary rank comparison.
        assert!(authorizer.authorize_hierarchy(&appointed, &other).is_ok());
    }
}
