//! Administrative maintenance service.

pub mod service;

pub use service::AdminService;
