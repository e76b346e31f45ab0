//! End-to-end tests for the authentication core against in-memory stores.

use std::sync::Arc;

use chrono::Duration;

use brigade_auth::error::AuthError;
use brigade_auth::password::PasswordHasher;
use brigade_auth::revocation::{MemoryRevocationStore, RevocationStore};
use brigade_auth::session::Authenticator;
use brigade_auth::testutil::{MemoryCredentialStore, fixture_account};
use brigade_auth::token::{TokenDecoder, TokenEncoder};
use brigade_entity::account::Role;
use brigade_entity::token::RevokedToken;

const SECRET: &str = "integration-test-secret";

struct Harness {
    authenticator: Authenticator,
    credentials: MemoryCredentialStore,
    revocations: MemoryRevocationStore,
    hasher: PasswordHasher,
}

impl Harness {
    fn new() -> Self {
        Self::with_ttl(Duration::hours(3))
    }

    fn with_ttl(ttl: Duration) -> Self {
        let credentials = MemoryCredentialStore::new();
        let revocations = MemoryRevocationStore::new();
        let hasher = PasswordHasher::new();

        let authenticator = Authenticator::new(
            Arc::new(credentials.clone()),
            Arc::new(revocations.clone()),
            TokenEncoder::with_ttl(SECRET, ttl),
            TokenDecoder::from_secret(SECRET),
            hasher.clone(),
        );

        Self {
            authenticator,
            credentials,
            revocations,
            hasher,
        }
    }

    async fn seed_account(&self, user_name: &str, password: &str, role: Role) -> uuid::Uuid {
        let mut account = fixture_account(user_name, role, None);
        account.password_hash = self.hasher.hash_password(password).unwrap();
        let id = account.id;
        self.credentials.insert(account).await;
        id
    }
}

#[tokio::test]
async fn test_login_then_resolve_returns_same_identity() {
    let harness = Harness::new();
    let id = harness.seed_account("alice", "correct", Role::Officer).await;

    let outcome = harness.authenticator.login("alice", "correct").await.unwrap();
    let identity = harness
        .authenticator
        .resolve(Some(&outcome.issued.token))
        .await
        .unwrap();

    assert_eq!(identity.id, id);
    assert_eq!(identity.role, Some(Role::Officer));
}

#[tokio::test]
async fn test_login_is_case_insensitive_on_user_name() {
    let harness = Harness::new();
    harness.seed_account("Alice", "correct", Role::Admin).await;

    assert!(harness.authenticator.login("alice", "correct").await.is_ok());
    assert!(harness.authenticator.login("ALICE", "correct").await.is_ok());
}

#[tokio::test]
async fn test_unknown_user_and_wrong_password_are_indistinguishable() {
    let harness = Harness::new();
    harness.seed_account("bob", "correct", Role::Boy).await;

    let unknown = harness
        .authenticator
        .login("nobody", "correct")
        .await
        .unwrap_err();
    let wrong = harness
        .authenticator
        .login("bob", "incorrect")
        .await
        .unwrap_err();

    assert!(matches!(unknown, AuthError::InvalidCredentials));
    assert!(matches!(wrong, AuthError::InvalidCredentials));
    assert_eq!(unknown.to_string(), wrong.to_string());
}

#[tokio::test]
async fn test_missing_token_rejected() {
    let harness = Harness::new();

    assert!(matches!(
        harness.authenticator.resolve(None).await,
        Err(AuthError::MissingToken)
    ));
    assert!(matches!(
        harness.authenticator.resolve(Some("")).await,
        Err(AuthError::MissingToken)
    ));
}

#[tokio::test]
async fn test_malformed_token_rejected() {
    let harness = Harness::new();

    assert!(matches!(
        harness.authenticator.resolve(Some("garbage")).await,
        Err(AuthError::MalformedToken)
    ));
}

#[tokio::test]
async fn test_expired_token_rejected_regardless_of_revocation() {
    let harness = Harness::with_ttl(Duration::seconds(-1));
    harness.seed_account("carol", "correct", Role::Primer).await;

    let outcome = harness.authenticator.login("carol", "correct").await.unwrap();
    let token = &outcome.issued.token;

    assert!(matches!(
        harness.authenticator.resolve(Some(token)).await,
        Err(AuthError::Expired)
    ));

    // Revoking after the fact changes nothing: expiry wins.
    harness
        .revocations
        .revoke(RevokedToken {
            token: token.clone(),
            expires_at: outcome.issued.expires_at,
        })
        .await
        .unwrap();
    assert!(matches!(
        harness.authenticator.resolve(Some(token)).await,
        Err(AuthError::Expired)
    ));
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let harness = Harness::new();
    harness.seed_account("dave", "correct", Role::Officer).await;

    let outcome = harness.authenticator.login("dave", "correct").await.unwrap();
    let token = &outcome.issued.token;

    harness.authenticator.logout(token).await.unwrap();
    harness.authenticator.logout(token).await.unwrap();

    assert!(matches!(
        harness.authenticator.resolve(Some(token)).await,
        Err(AuthError::TokenRevoked)
    ));
    assert_eq!(harness.revocations.len().await, 1);
}

#[tokio::test]
async fn test_logout_of_expired_token_records_nothing() {
    let harness = Harness::with_ttl(Duration::seconds(-1));
    harness.seed_account("erin", "correct", Role::Boy).await;

    let outcome = harness.authenticator.login("erin", "correct").await.unwrap();
    harness.authenticator.logout(&outcome.issued.token).await.unwrap();

    assert!(harness.revocations.is_empty().await);
}

#[tokio::test]
async fn test_logout_of_malformed_token_fails() {
    let harness = Harness::new();

    assert!(matches!(
        harness.authenticator.logout("garbage").await,
        Err(AuthError::MalformedToken)
    ));
}

#[tokio::test]
async fn test_purge_keeps_live_revocations_effective() {
    let harness = Harness::new();
    harness.seed_account("frank", "correct", Role::Primer).await;

    let outcome = harness.authenticator.login("frank", "correct").await.unwrap();
    let token = outcome.issued.token.clone();
    harness.authenticator.logout(&token).await.unwrap();

    // The entry's expiry is three hours out, so the purge removes nothing.
    let removed = harness.authenticator.purge_expired_tokens().await.unwrap();
    assert_eq!(removed, 0);

    assert!(matches!(
        harness.authenticator.resolve(Some(&token)).await,
        Err(AuthError::TokenRevoked)
    ));
}

#[tokio::test]
async fn test_purge_drops_expired_entries() {
    let harness = Harness::new();
    let now = chrono::Utc::now();

    harness
        .revocations
        .revoke(RevokedToken {
            token: "stale-token".to_string(),
            expires_at: now - Duration::hours(1),
        })
        .await
        .unwrap();

    let removed = harness.authenticator.purge_expired_tokens().await.unwrap();
    assert_eq!(removed, 1);
    assert!(harness.revocations.is_empty().await);
}

#[tokio::test]
async fn test_end_to_end_login_resolve_logout() {
    let harness = Harness::new();
    let id = harness.seed_account("alice", "correct", Role::Admin).await;

    let outcome = harness.authenticator.login("alice", "correct").await.unwrap();
    let token = outcome.issued.token.clone();

    let identity = harness.authenticator.resolve(Some(&token)).await.unwrap();
    assert_eq!(identity.id, id);

    harness.authenticator.logout(&token).await.unwrap();

    assert!(matches!(
        harness.authenticator.resolve(Some(&token)).await,
        Err(AuthError::TokenRevoked)
    ));
}
