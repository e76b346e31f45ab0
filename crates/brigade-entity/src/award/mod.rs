//! Award domain entities.

pub mod model;

pub use model::{Award, Mastery};
