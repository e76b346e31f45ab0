//! Session token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use brigade_core::config::auth::AuthConfig;

use super::claims::Claims;
use crate::error::AuthError;

/// Verifies session token signatures and expiry.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self::from_secret(&config.jwt_secret)
    }

    /// Creates a decoder directly from a signing secret.
    pub fn from_secret(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        // Zero leeway: a token one second past its expiry must fail.
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and verifies a session token.
    ///
    /// Fails with [`AuthError::MalformedToken`] when the token cannot be
    /// parsed or its signature does not match, and [`AuthError::Expired`]
    /// when `exp` has passed. Revocation is checked separately by the
    /// [`Authenticator`](crate::session::Authenticator); the token format
    /// itself is stateless and cannot be invalidated here.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::encoder::TokenEncoder;
    use brigade_entity::account::Role;
    use chrono::Duration;
    use uuid::Uuid;

    const SECRET: &str = "unit-test-secret";

    #[test]
    fn test_round_trip() {
        let encoder = TokenEncoder::with_ttl(SECRET, Duration::hours(3));
        let decoder = TokenDecoder::from_secret(SECRET);
        let id = Uuid::new_v4();

        let issued = encoder.issue(id, Some(Role::Primer)).unwrap();
        let claims = decoder.verify(&issued.token).unwrap();

        assert_eq!(claims.sub, id);
        assert_eq!(claims.role, Some(Role::Primer));
        assert_eq!(claims.exp, issued.expires_at.timestamp());
    }

    #[test]
    fn test_expired_token_rejected() {
        let encoder = TokenEncoder::with_ttl(SECRET, Duration::seconds(-1));
        let decoder = TokenDecoder::from_secret(SECRET);

        let issued = encoder.issue(Uuid::new_v4(), Some(Role::Boy)).unwrap();
        assert!(matches!(
            decoder.verify(&issued.token),
            Err(AuthError::Expired)
        ));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let encoder = TokenEncoder::with_ttl("other-secret", Duration::hours(3));
        let decoder = TokenDecoder::from_secret(SECRET);

        let issued = encoder.issue(Uuid::new_v4(), None).unwrap();
        assert!(matches!(
            decoder.verify(&issued.token),
            Err(AuthError::MalformedToken)
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        let decoder = TokenDecoder::from_secret(SECRET);
        assert!(matches!(
            decoder.verify("not.a.token"),
            Err(AuthError::MalformedToken)
        ));
        assert!(matches!(decoder.verify(""), Err(AuthError::MalformedToken)));
    }

    #[test]
    fn test_tampered_payload_rejected() {
        let encoder = TokenEncoder::with_ttl(SECRET, Duration::hours(3));
        let decoder = TokenDecoder::from_secret(SECRET);

        let issued = encoder.issue(Uuid::new_v4(), Some(Role::Boy)).unwrap();
        let mut parts: Vec<&str> = issued.token.split('.').collect();
        let forged = "eyJzdWIiOiIwMDAwMDAwMC0wMDAwLTAwMDAtMDAwMC0wMDAwMDAwMDAwMDAifQ";
        parts[1] = forged;
        let tampered = parts.join(".");

        assert!(matches!(
            decoder.verify(&tampered),
            Err(AuthError::MalformedToken)
        ));
    }
}
