//! Authentication and authorization error taxonomy.

use thiserror::Error;

use brigade_core::error::AppError;

/// Every way an authentication or authorization check can fail.
///
/// All variants are terminal for the current request; nothing here is
/// retried. Storage faults travel in the separate [`AuthError::Store`]
/// channel so infrastructure failures are never reported as credential
/// or permission problems.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown user name or wrong password. The two cases are deliberately
    /// indistinguishable to prevent user-name enumeration.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// No session token was presented.
    #[error("Missing session token")]
    MissingToken,

    /// The token could not be parsed or its signature did not verify.
    #[error("Malformed session token")]
    MalformedToken,

    /// The token's expiry has passed.
    #[error("Session token has expired")]
    Expired,

    /// The token was invalidated before its natural expiry.
    #[error("Session token has been revoked")]
    TokenRevoked,

    /// The resolved identity carries no role claim.
    #[error("Identity has no assigned role")]
    MissingRole,

    /// The identity's role does not permit the requested operation.
    #[error("Insufficient privileges for this operation")]
    Forbidden,

    /// A storage-layer fault surfaced during an auth operation.
    #[error(transparent)]
    Store(#[from] AppError),
}

impl AuthError {
    /// Whether this failure denies access (as opposed to an
    /// infrastructure fault).
    pub fn is_denial(&self) -> bool {
        !matches!(self, Self::Store(_))
    }
}

impl From<jsonwebtoken::errors::Error> for AuthError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => Self::Expired,
            _ => Self::MalformedToken,
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials
            | AuthError::MissingToken
            | AuthError::MalformedToken
            | AuthError::Expired
            | AuthError::TokenRevoked => AppError::authentication(err.to_string()),
            AuthError::MissingRole | AuthError::Forbidden => {
                AppError::authorization(err.to_string())
            }
            AuthError::Store(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brigade_core::error::ErrorKind;

    #[test]
    fn test_denials_map_to_auth_kinds() {
        let err: AppError = AuthError::TokenRevoked.into();
        assert_eq!(err.kind, ErrorKind::Authentication);

        let err: AppError = AuthError::Forbidden.into();
        assert_eq!(err.kind, ErrorKind::Authorization);
    }

    #[test]
    fn test_store_faults_pass_through_unchanged() {
        let inner = AppError::database("connection reset");
        let err: AppError = AuthError::Store(inner).into();
        assert_eq!(err.kind, ErrorKind::Database);
    }

    #[test]
    fn test_jwt_error_mapping() {
        let expired = jsonwebtoken::errors::Error::from(
            jsonwebtoken::errors::ErrorKind::ExpiredSignature,
        );
        assert!(matches!(AuthError::from(expired), AuthError::Expired));

        let garbage =
            jsonwebtoken::errors::Error::from(jsonwebtoken::errors::ErrorKind::InvalidToken);
        assert!(matches!(AuthError::from(garbage), AuthError::MalformedToken));
    }
}
