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
        room_type::{CreateRoomTypeDto, RoomTypeDto, UpdateRoomTypeDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::room_type::{CreateRoomTypeParams, UpdateRoomTypeParams},
        service::room_type::RoomTypeService,
        state::AppState,
    },
};

/// Tag for grouping room type endpoints in OpenAPI documentation
pub static ROOM_TYPE_TAG: &str = "room_type";

/// Create a room type.
///
/// # Access Control
/// - `Admin` - Only admins can create room types
#[utoipa::path(
    post,
    path = "/api/room-types",
    tag = ROOM_TYPE_TAG,
    request_body = CreateRoomTypeDto,
    responses(
        (status = 201, description = "Room type created", body = RoomTypeDto),
        (status = 400, description = "Invalid payload or duplicate name", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room_type(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRoomTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let room_type = RoomTypeService::new(&state.db)
        .create(CreateRoomTypeParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(room_type.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/room-types",
    tag = ROOM_TYPE_TAG,
    responses(
        (status = 200, description = "All room types", body = Vec<RoomTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_types(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let room_types = RoomTypeService::new(&state.db).find_all().await?;

    Ok((
        StatusCode::OK,
        Json(
            room_types
                .into_iter()
                .map(|r| r.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

#[utoipa::path(
    get,
    path = "/api/room-types/{id}",
    tag = ROOM_TYPE_TAG,
    params(("id" = i32, Path, description = "Room type ID")),
    responses(
        (status = 200, description = "The room type", body = RoomTypeDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room_type = RoomTypeService::new(&state.db).find_one(id).await?;

    Ok((StatusCode::OK, Json(room_type.into_dto())))
}

/// Update a room type.
///
/// # Access Control
/// - `Admin` - Only admins can update room types
#[utoipa::path(
    patch,
    path = "/api/room-types/{id}",
    tag = ROOM_TYPE_TAG,
    params(("id" = i32, Path, description = "Room type ID")),
    request_body = UpdateRoomTypeDto,
    responses(
        (status = 200, description = "Updated room type", body = RoomTypeDto),
        (status = 400, description = "Invalid payload or duplicate name", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoomTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let room_type = RoomTypeService::new(&state.db)
        .update(UpdateRoomTypeParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(room_type.into_dto())))
}

/// Delete a room type.
///
/// Refused while live rooms still use it.
///
/// # Access Control
/// - `Admin` - Only admins can delete room types
#[utoipa::path(
    delete,
    path = "/api/room-types/{id}",
    tag = ROOM_TYPE_TAG,
    params(("id" = i32, Path, description = "Room type ID")),
    responses(
        (status = 200, description = "Deleted room type", body = RoomTypeDto),
        (status = 400, description = "Room type still in use", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let room_type = RoomTypeService::new(&state.db).remove(id).await?;

    Ok((StatusCode::OK, Json(room_type.into_dto())))
}
