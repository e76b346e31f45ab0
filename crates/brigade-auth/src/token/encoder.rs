//! Session token creation with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use brigade_core::config::auth::AuthConfig;
use brigade_core::error::AppError;
use brigade_entity::account::Role;

use super::claims::Claims;
use crate::error::AuthError;

/// A freshly issued session token together with its expiry.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// The signed token value.
    pub token: String,
    /// When the token naturally expires.
    pub expires_at: DateTime<Utc>,
}

/// Creates signed session tokens (HMAC-SHA256).
///
/// The signing secret is process-wide state loaded once from configuration
/// at startup. It is never rotated at runtime; rotation would invalidate
/// every outstanding session.
#[derive(Clone)]
pub struct TokenEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Session token TTL.
    ttl: Duration,
}

impl std::fmt::Debug for TokenEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenEncoder").field("ttl", &self.ttl).finish()
    }
}

impl TokenEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            ttl: Duration::hours(config.token_ttl_hours as i64),
        }
    }

    /// Creates an encoder with an explicit TTL, bypassing configuration.
    pub fn with_ttl(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issues a signed session token for the given identity.
    pub fn issue(&self, account_id: Uuid, role: Option<Role>) -> Result<IssuedToken, AuthError> {
        let now = Utc::now();
        let expires_at = now + self.ttl;

        let claims = Claims {
            sub: account_id,
            role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to sign session token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }
}
