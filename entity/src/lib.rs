//! SeaORM entity definitions for the registro database schema.

pub mod client;
pub mod group;
pub mod prelude;
pub mod user;
pub mod user_group;
