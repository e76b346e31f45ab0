//! # brigade-entity
//!
//! Domain entity models for Brigade Hub. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod account;
pub mod appointment;
pub mod award;
pub mod inspection;
pub mod token;
