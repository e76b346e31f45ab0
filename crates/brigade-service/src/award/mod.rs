//! Award scheme domain service.

pub mod service;

pub use service::AwardService;
