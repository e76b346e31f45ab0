//! Appointment domain service.

pub mod service;

pub use service::AppointmentService;
