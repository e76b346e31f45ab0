//! # brigade-service
//!
//! Domain services for Brigade Hub records. Each service orchestrates
//! repository calls for one aggregate and applies the validation and
//! privilege rules that sit between the HTTP handlers and storage.
//!
//! Authorization role-set checks live in the API layer; services enforce
//! only the rules that need stored data (hierarchy guards, uniqueness).

pub mod account;
pub mod admin;
pub mod appointment;
pub mod award;
pub mod inspection;

pub use account::AccountService;
pub use admin::AdminService;
pub use appointment::AppointmentService;
pub use award::AwardService;
pub use inspection::InspectionService;
