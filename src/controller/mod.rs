//! HTTP request handlers.
//!
//! Controllers validate access through the auth guard, convert DTOs to
//! parameter models, call the service layer, and convert the result back to
//! DTOs. Status codes follow the usual REST conventions: 201 on create,
//! 204 on delete, errors per `AppError`.

pub mod auth;
pub mod client;
pub mod group;
pub mod user;
