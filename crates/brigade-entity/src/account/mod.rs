//! Account domain entities.

pub mod honorific;
pub mod model;
pub mod role;

pub use honorific::Honorific;
pub use model::{Account, AccountBrief, BoyBrief, NewAccount};
pub use role::Role;
