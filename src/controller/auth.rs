use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    error::AppError,
    model::{
        api::ErrorDto,
        user::{LoginDto, UserDto},
    },
    service::{auth::AuthService, membership::MembershipService},
    state::AppState,
};

/// Session key holding the authenticated user's id.
pub static SESSION_AUTH_USER_ID: &str = "auth:user_id";
/// Session key holding the authenticated username, for log context.
pub static SESSION_AUTH_USERNAME: &str = "auth:username";

pub static AUTH_TAG: &str = "auth";

#[utoipa::path(
    post,
    path = "/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Successfully logged in", body = UserDto),
        (status = 401, description = "Invalid credentials or disabled account", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.username, &payload.password)
        .await?;

    session.insert(SESSION_AUTH_USER_ID, user.id).await?;
    session
        .insert(SESSION_AUTH_USERNAME, user.username.clone())
        .await?;

    tracing::info!("User {} logged in", user.username);

    let groups = MembershipService::new(&state.db)
        .groups_for_user(user.id)
        .await?;
    let groups = groups.into_iter().map(|group| group.into_dto()).collect();

    Ok((StatusCode::OK, Json(user.into_dto(groups))))
}

#[utoipa::path(
    post,
    path = "/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Session cleared"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    session.flush().await?;

    Ok(StatusCode::NO_CONTENT)
}
