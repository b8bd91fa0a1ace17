//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let client = factory::client::create_client(&db).await?;
//!     let user = factory::user::create_user(&db).await?;
//!
//!     // Create a user already assigned to a group
//!     let (user, group, membership) = factory::helpers::create_user_in_group(&db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod group;
pub mod helpers;
pub mod user;
