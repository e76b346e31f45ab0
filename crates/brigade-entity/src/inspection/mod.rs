//! Uniform inspection domain entities.

pub mod model;

pub use model::{InspectionRecord, InspectionSummary};
