use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        room::{CreateRoomDto, RoomDto, SearchRoomsDto, UpdateRoomDto, UpdateRoomStatusDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::room::{CreateRoomParams, RoomSearchParams, RoomStatus, UpdateRoomParams},
        service::room::RoomService,
        state::AppState,
    },
};

/// Tag for grouping room endpoints in OpenAPI documentation
pub static ROOM_TAG: &str = "room";

/// Create a room.
///
/// New rooms start out `available`.
///
/// # Access Control
/// - `Admin` - Only admins can create rooms
#[utoipa::path(
    post,
    path = "/api/rooms",
    tag = ROOM_TAG,
    request_body = CreateRoomDto,
    responses(
        (status = 201, description = "Room created", body = RoomDto),
        (status = 400, description = "Invalid payload or duplicate room number", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Room type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let room = RoomService::new(&state.db)
        .create_room(CreateRoomParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(room.into_dto())))
}

/// List rooms.
///
/// Text filters match case-insensitive substrings, `price` matches the room type price.
#[utoipa::path(
    get,
    path = "/api/rooms",
    tag = ROOM_TAG,
    params(
        ("room_number" = Option<String>, Query, description = "Room number contains"),
        ("room_type_name" = Option<String>, Query, description = "Room type name contains"),
        ("status" = Option<String>, Query, description = "Status contains"),
        ("price" = Option<f64>, Query, description = "Exact room type price")
    ),
    responses(
        (status = 200, description = "Matching rooms", body = Vec<RoomDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_rooms(
    State(state): State<AppState>,
    Query(search): Query<SearchRoomsDto>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = RoomService::new(&state.db)
        .find_all(RoomSearchParams::from_dto(search))
        .await?;

    Ok((
        StatusCode::OK,
        Json(rooms.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "The room", body = RoomDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let Some(room) = RoomService::new(&state.db).find_one(id).await? else {
        return Err(AppError::NotFound(format!("Room with id '{}' not found.", id)));
    };

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Update a room.
///
/// # Access Control
/// - `Admin` - Only admins can update rooms
#[utoipa::path(
    patch,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpdateRoomDto,
    responses(
        (status = 200, description = "Updated room", body = RoomDto),
        (status = 400, description = "Invalid payload or duplicate room number", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Room or room type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    payload.validate()?;

    let room = RoomService::new(&state.db)
        .update_room(UpdateRoomParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

/// Delete a room and return the remaining rooms.
///
/// # Access Control
/// - `Admin` - Only admins can delete rooms
#[utoipa::path(
    delete,
    path = "/api/rooms/{id}",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Remaining rooms", body = Vec<RoomDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let rooms = RoomService::new(&state.db).remove_room(id).await?;

    Ok((
        StatusCode::OK,
        Json(rooms.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Set the status of a room.
///
/// # Access Control
/// - `Admin` - Only admins can change room status
#[utoipa::path(
    patch,
    path = "/api/rooms/{id}/status",
    tag = ROOM_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpdateRoomStatusDto,
    responses(
        (status = 200, description = "Updated room", body = RoomDto),
        (status = 400, description = "Unknown status or room missing", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_room_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRoomStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let Some(status) = RoomStatus::parse(&payload.status) else {
        return Err(AppError::BadRequest(format!(
            "Unknown room status '{}'.",
            payload.status
        )));
    };

    let room = RoomService::new(&state.db)
        .update_status_of_room(id, status)
        .await?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}
