//! Uniform inspection domain service.

pub mod service;

pub use service::InspectionService;
