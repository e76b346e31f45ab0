//! Account domain service.

pub mod service;

pub use service::{AccountService, CreateAccountInput, UpdateAccountInput};
