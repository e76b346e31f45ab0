//! Repository implementations for all Brigade Hub entities.

pub mod account;
pub mod admin;
pub mod appointment;
pub mod award;
pub mod inspection;
pub mod revoked_token;

pub use account::AccountRepository;
pub use admin::AdminRepository;
pub use appointment::AppointmentRepository;
pub use award::AwardRepository;
pub use inspection::InspectionRepository;
pub use revoked_token::RevokedTokenRepository;
