use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::AuthGuard,
    model::{
        api::ErrorDto,
        client::{ClientDto, CreateClientDto, UpdateClientDto},
        kpi::AgeKpiDto,
    },
    service::{client::ClientService, kpi::KpiService},
    state::AppState,
};

pub static CLIENT_TAG: &str = "client";

#[utoipa::path(
    post,
    path = "/api/v1/clients",
    tag = CLIENT_TAG,
    request_body = CreateClientDto,
    responses(
        (status = 201, description = "Successfully created client", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_client(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let client = ClientService::new(&state.db, state.validate_on_update)
        .create_client(payload.into_param())
        .await?;

    Ok((StatusCode::CREATED, Json(client.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/v1/clients",
    tag = CLIENT_TAG,
    responses(
        (status = 200, description = "Successfully retrieved clients", body = Vec<ClientDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_clients(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let clients = ClientService::new(&state.db, state.validate_on_update)
        .get_all_clients()
        .await?;

    let dtos: Vec<ClientDto> = clients.into_iter().map(|client| client.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/v1/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved client", body = ClientDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let client = ClientService::new(&state.db, state.validate_on_update)
        .get_client(id)
        .await?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/v1/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    request_body = UpdateClientDto,
    responses(
        (status = 200, description = "Successfully updated client", body = ClientDto),
        (status = 400, description = "Invalid client data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 409, description = "Email already registered", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_client(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateClientDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let client = ClientService::new(&state.db, state.validate_on_update)
        .update_client(id, payload.into_param())
        .await?;

    Ok((StatusCode::OK, Json(client.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/v1/clients/{id}",
    tag = CLIENT_TAG,
    params(
        ("id" = i32, Path, description = "Client ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted client"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Client not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_client(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    ClientService::new(&state.db, state.validate_on_update)
        .delete_client(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/v1/clients/kpi",
    tag = CLIENT_TAG,
    responses(
        (status = 200, description = "Age statistics over all clients", body = AgeKpiDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "No clients stored", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_client_kpi(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require().await?;

    let kpi = KpiService::new(&state.db).client_age_kpi().await?;

    Ok((StatusCode::OK, Json(kpi.into_dto())))
}
