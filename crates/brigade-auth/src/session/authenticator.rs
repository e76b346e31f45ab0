//! Authentication orchestration — login, resolve, logout, purge.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use brigade_entity::account::{Account, Role};
use brigade_entity::token::RevokedToken;

use crate::error::AuthError;
use crate::password::PasswordHasher;
use crate::revocation::RevocationStore;
use crate::token::{TokenDecoder, TokenEncoder};
use crate::token::encoder::IssuedToken;

use super::store::CredentialStore;

/// Resolved principal derived from a valid session token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Account ID from the token's subject claim.
    pub id: Uuid,
    /// Role carried by the token, when one was embedded at issuance.
    pub role: Option<Role>,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The issued session token with its expiry.
    pub issued: IssuedToken,
    /// The authenticated account.
    pub account: Account,
}

/// Orchestrates credential verification, token issuance, and token
/// resolution against the revocation ledger.
#[derive(Clone)]
pub struct Authenticator {
    /// Credential lookup.
    credentials: Arc<dyn CredentialStore>,
    /// Revocation ledger.
    revocations: Arc<dyn RevocationStore>,
    /// Token signer.
    encoder: TokenEncoder,
    /// Token verifier.
    decoder: TokenDecoder,
    /// Password hasher.
    hasher: PasswordHasher,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("encoder", &self.encoder)
            .field("decoder", &self.decoder)
            .finish()
    }
}

impl Authenticator {
    /// Creates a new authenticator with all required dependencies.
    pub fn new(
        credentials: Arc<dyn CredentialStore>,
        revocations: Arc<dyn RevocationStore>,
        encoder: TokenEncoder,
        decoder: TokenDecoder,
        hasher: PasswordHasher,
    ) -> Self {
        Self {
            credentials,
            revocations,
            encoder,
            decoder,
            hasher,
        }
    }

    /// Performs the login flow:
    ///
    /// 1. Look up exactly one credential record by user name
    /// 2. Verify the password against the stored hash
    /// 3. Issue a session token scoped to the account and its current role
    ///
    /// Unknown user and wrong password both fail with the same
    /// [`AuthError::InvalidCredentials`]; the caller cannot tell them
    /// apart. Storage faults propagate separately and are never folded
    /// into the credential failure.
    pub async fn login(&self, user_name: &str, password: &str) -> Result<LoginOutcome, AuthError> {
        // Step 1: Find account
        let account = match self.credentials.find_by_user_name(user_name).await? {
            Some(account) => account,
            None => {
                debug!(user_name, "Login attempt for unknown user");
                return Err(AuthError::InvalidCredentials);
            }
        };

        // Step 2: Verify password
        if !self.hasher.verify_password(password, &account.password_hash) {
            debug!(user_name, "Login attempt with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        // Step 3: Issue token
        let issued = self.encoder.issue(account.id, Some(account.role))?;

        info!(account_id = %account.id, role = %account.role, "Login successful");
        Ok(LoginOutcome { issued, account })
    }

    /// Resolves a presented token to an identity.
    ///
    /// Runs, in order: presence check, signature/expiry verification,
    /// revocation check. Every check is evaluated on every call;
    /// short-circuits on the first failure.
    pub async fn resolve(&self, token: Option<&str>) -> Result<Identity, AuthError> {
        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => return Err(AuthError::MissingToken),
        };

        let claims = self.decoder.verify(token)?;

        if self.revocations.is_revoked(token).await? {
            return Err(AuthError::TokenRevoked);
        }

        Ok(Identity {
            id: claims.sub,
            role: claims.role,
        })
    }

    /// Revokes a token so it can never be used again before its natural
    /// expiry. Idempotent under repeated calls.
    ///
    /// A token that has already expired naturally is not recorded: an
    /// entry exists in the ledger only for tokens invalidated while still
    /// valid. Malformed tokens still fail.
    pub async fn logout(&self, token: &str) -> Result<(), AuthError> {
        let claims = match self.decoder.verify(token) {
            Ok(claims) => claims,
            // Natural expiry already rejects the token everywhere.
            Err(AuthError::Expired) => return Ok(()),
            Err(e) => return Err(e),
        };

        self.revocations
            .revoke(RevokedToken {
                token: token.to_string(),
                expires_at: claims.expires_at(),
            })
            .await?;

        info!(account_id = %claims.sub, "Session revoked");
        Ok(())
    }

    /// Removes expired entries from the revocation ledger. Returns the
    /// number of entries removed.
    pub async fn purge_expired_tokens(&self) -> Result<u64, AuthError> {
        let removed = self.revocations.purge_expired(Utc::now()).await?;
        if removed > 0 {
            info!(removed, "Purged expired revocation entries");
        }
        Ok(removed)
    }
}
