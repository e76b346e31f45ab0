//! Session lifecycle — credential lookup and login/resolve/logout.

pub mod authenticator;
pub mod store;

pub use authenticator::{Authenticator, Identity, LoginOutcome};
pub use store::{CredentialStore, DatabaseCredentialStore};
