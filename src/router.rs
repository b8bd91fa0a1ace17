use axum::{
    routing::{get, post, put},
    Router,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    controller::{auth, client, group, user},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::login,
        auth::logout,
        client::create_client,
        client::get_all_clients,
        client::get_client,
        client::update_client,
        client::delete_client,
        client::get_client_kpi,
        user::create_user,
        user::get_all_users,
        user::get_user,
        user::update_user,
        user::delete_user,
        user::enable_user,
        user::disable_user,
        user::reset_password,
        user::get_user_groups,
        user::assign_group,
        user::remove_group,
        group::create_group,
        group::get_all_groups,
        group::get_group,
        group::delete_group,
    ),
    info(
        title = "Client registry API",
        description = "Client records with validation and age KPIs, plus user accounts and group memberships."
    )
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    // The kpi route must be registered; it does not collide with `{id}`
    // because the path segment is static.
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route(
            "/api/v1/clients",
            post(client::create_client).get(client::get_all_clients),
        )
        .route("/api/v1/clients/kpi", get(client::get_client_kpi))
        .route(
            "/api/v1/clients/{id}",
            get(client::get_client)
                .put(client::update_client)
                .delete(client::delete_client),
        )
        .route(
            "/api/v1/users",
            post(user::create_user).get(user::get_all_users),
        )
        .route(
            "/api/v1/users/{id}",
            get(user::get_user)
                .put(user::update_user)
                .delete(user::delete_user),
        )
        .route("/api/v1/users/{id}/enable", put(user::enable_user))
        .route("/api/v1/users/{id}/disable", put(user::disable_user))
        .route("/api/v1/users/{id}/reset_password", put(user::reset_password))
        .route("/api/v1/users/{id}/groups", get(user::get_user_groups))
        .route(
            "/api/v1/users/{id}/groups/{group_id}",
            post(user::assign_group).delete(user::remove_group),
        )
        .route(
            "/api/v1/groups",
            post(group::create_group).get(group::get_all_groups),
        )
        .route(
            "/api/v1/groups/{id}",
            get(group::get_group).delete(group::delete_group),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
