//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic
//! for transforming errors into HTTP responses. The `AppError` enum is the
//! top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod validation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    error::{auth::AuthError, config::ConfigError, validation::ValidationError},
    model::api::ErrorDto,
};

/// Top-level application error type.
///
/// Aggregates all error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for
/// automatic conversion. `AuthError` handles its own response mapping; the
/// domain variants carry the status mapping of the API:
/// validation → 400, not-found and empty dataset → 404, conflict → 409,
/// everything else → 500 with details logged server-side only.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication error; delegates to `AuthError::into_response()`.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Record validation failure (missing fields, email/phone format,
    /// age/birth-date mismatch). Results in 400 Bad Request.
    #[error(transparent)]
    ValidationErr(#[from] ValidationError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Socket bind or serve error during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A requested entity does not exist.
    ///
    /// Results in 404 Not Found; the body carries "{entity} not found" to
    /// match the API's message shape, the id is only logged.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// A storage uniqueness constraint was violated.
    ///
    /// Results in 409 Conflict naming the conflicting field.
    #[error("{field} already exists")]
    Conflict { field: &'static str },

    /// KPI aggregation was requested with zero stored clients.
    ///
    /// Results in 404 Not Found; the population statistics are undefined
    /// over an empty dataset.
    #[error("No clients available to compute KPI")]
    EmptyDataset,

    /// Password hashing or hash parsing failed.
    ///
    /// Results in 500 Internal Server Error; the detail is logged.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The message is logged but a
    /// generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation failures
/// - 404 Not Found - For missing entities and the empty KPI dataset
/// - 409 Conflict - For uniqueness violations
/// - 500 Internal Server Error - For storage, session, and hashing failures
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::ValidationErr(err) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: err.to_string(),
                }),
            )
                .into_response(),
            Self::NotFound { entity, id } => {
                tracing::debug!("{} {} not found", entity, id);
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: format!("{} not found", entity),
                    }),
                )
                    .into_response()
            }
            Self::Conflict { field } => (
                StatusCode::CONFLICT,
                Json(ErrorDto {
                    error: format!("{} already exists", field),
                }),
            )
                .into_response(),
            Self::EmptyDataset => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto {
                    error: "No clients available to compute KPI".to_string(),
                }),
            )
                .into_response(),
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorDto {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal
/// Server Error response.
///
/// Logs the error message and returns a generic body so implementation
/// details never leak to the client.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
