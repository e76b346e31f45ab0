//! # brigade-auth
//!
//! Authentication and authorization core for Brigade Hub.
//!
//! ## Modules
//!
//! - `token` — signed session token issuance and verification
//! - `password` — Argon2id password hashing and verification
//! - `revocation` — denylist of tokens invalidated before natural expiry
//! - `session` — credential lookup and the login/resolve/logout orchestration
//! - `rbac` — role-set and hierarchy authorization checks
//!
//! Every protected operation in the application goes through exactly one
//! [`Authenticator::resolve`] call followed by one [`Authorizer`] check;
//! handlers never parse tokens themselves.

pub mod error;
pub mod password;
pub mod rbac;
pub mod revocation;
pub mod session;
#[cfg(any(test, feature = "testutil"))]
pub mod testutil;
pub mod token;

pub use error::AuthError;
pub use password::PasswordHasher;
pub use rbac::Authorizer;
pub use revocation::{DatabaseRevocationStore, MemoryRevocationStore, RevocationStore};
pub use session::{Authenticator, CredentialStore, DatabaseCredentialStore, Identity};
pub use token::{Claims, TokenDecoder, TokenEncoder};
