//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository)
//! layer. They own validation, uniqueness-conflict mapping, referential
//! integrity of memberships, and the transactions that keep multi-step
//! deletes atomic. Services work with domain models; DTO conversion happens
//! in the controllers.

pub mod auth;
pub mod client;
pub mod group;
pub mod kpi;
pub mod membership;
pub mod user;
