use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login failed: unknown username or wrong password.
    ///
    /// The two cases share one message so a caller cannot probe which
    /// usernames exist. Results in 401 Unauthorized.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Login refused because the account is disabled.
    ///
    /// Logged, but the caller sees the same message as
    /// `InvalidCredentials` so the response does not reveal account
    /// state. Results in 401 Unauthorized.
    #[error("User account is disabled")]
    Disabled,

    /// A protected route was called without a logged-in session.
    ///
    /// Results in 401 Unauthorized.
    #[error("Authentication required")]
    NotLoggedIn,

    /// The session references a user id that no longer exists, e.g. the
    /// account was deleted while the session was still live.
    ///
    /// Results in 401 Unauthorized with the generic message.
    #[error("Session user {0} no longer exists")]
    SessionUserMissing(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// All variants map to 401 Unauthorized with one of two generic bodies:
/// login failures share the `InvalidCredentials` message, session failures
/// share the `NotLoggedIn` message. `Disabled` and `SessionUserMissing`
/// are logged with their detail before being collapsed.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::Disabled => {
                tracing::debug!("Login refused for disabled account");
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Invalid username or password".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::NotLoggedIn => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication required".to_string(),
                }),
            )
                .into_response(),
            Self::SessionUserMissing(id) => {
                tracing::debug!("Session references missing user {}", id);
                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Authentication required".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
