//! HTTP request handlers, one module per domain.

pub mod account;
pub mod admin;
pub mod appointment;
pub mod auth;
pub mod award;
pub mod health;
pub mod inspection;
