use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        configuration::{ConfigurationDto, UpdateConfigurationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::configuration::ConfigurationService,
        state::AppState,
    },
};

/// Tag for grouping configuration endpoints in OpenAPI documentation
pub static CONFIGURATION_TAG: &str = "configuration";

#[utoipa::path(
    get,
    path = "/api/configurations",
    tag = CONFIGURATION_TAG,
    responses(
        (status = 200, description = "All configuration values", body = Vec<ConfigurationDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_configurations(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let configurations = ConfigurationService::new(&state.db).find_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            configurations
                .into_iter()
                .map(|c| c.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/configurations/{id}",
    tag = CONFIGURATION_TAG,
    params(("id" = i32, Path, description = "Configuration ID")),
    responses(
        (status = 200, description = "The configuration value", body = ConfigurationDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Configuration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_configuration(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let configuration = ConfigurationService::new(&state.db).find_one(id).await?;

    Ok((StatusCode::OK, Json(configuration.into_dto())))
}

/// Change a pricing value.
///
/// Takes effect for every stay priced afterwards; existing invoices keep their price.
///
/// # Access Control
/// - `Admin` - Only admins can change configuration
#[utoipa::path(
    patch,
    path = "/api/configurations/{id}",
    tag = CONFIGURATION_TAG,
    params(("id" = i32, Path, description = "Configuration ID")),
    request_body = UpdateConfigurationDto,
    responses(
        (status = 200, description = "Updated configuration value", body = ConfigurationDto),
        (status = 400, description = "Negative or non-finite value", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Configuration not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_configuration(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateConfigurationDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let configuration = ConfigurationService::new(&state.db)
        .update(id, payload.config_value)
        .await?;

    Ok((StatusCode::OK, Json(configuration.into_dto())))
}
