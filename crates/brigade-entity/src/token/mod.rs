//! Revoked token domain entities.

pub mod model;

pub use model::RevokedToken;
