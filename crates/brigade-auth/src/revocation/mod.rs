//! Revocation ledger — the denylist of tokens invalidated before expiry.

pub mod database;
pub mod memory;
pub mod store;

pub use database::DatabaseRevocationStore;
pub use memory::MemoryRevocationStore;
pub use store::RevocationStore;
