//! # brigade-api
//!
//! HTTP API layer for Brigade Hub. Builds the Axum router, maps domain
//! errors to HTTP responses, and hosts the handlers and extractors that
//! sit between the wire and the service layer.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
