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
        user::{SearchUsersDto, UpdateUserDto, UserDto, UserTypeDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{UpdateUserParams, UserSearchParams},
        service::user::UserService,
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List guests.
///
/// Administrators are never listed. Text filters match case-insensitive substrings,
/// `status` matches exactly.
///
/// # Access Control
/// - `Admin` - Only admins can list users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(
        ("address" = Option<String>, Query, description = "Address contains"),
        ("email" = Option<String>, Query, description = "Email contains"),
        ("full_name" = Option<String>, Query, description = "Full name contains"),
        ("identity_number" = Option<String>, Query, description = "Identity number contains"),
        ("status" = Option<String>, Query, description = "`active` or `inactive`")
    ),
    responses(
        (status = 200, description = "Matching users", body = Vec<UserDto>),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
    Query(search): Query<SearchUsersDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db)
        .find_all(UserSearchParams::from_dto(search)?)
        .await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a user with profile.
///
/// # Access Control
/// - `SelfOrAdmin` - Guests can only read their own account
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Another user's account", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrAdmin(id)])
        .await?;

    let user = UserService::new(&state.db).get_profile_by_user_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update email or profile fields of a user.
///
/// # Access Control
/// - `SelfOrAdmin` - Guests can only update their own account
#[utoipa::path(
    patch,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated user", body = UserDto),
        (status = 400, description = "Empty update, invalid payload or email taken", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Another user's account", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::SelfOrAdmin(id)])
        .await?;

    payload.validate()?;

    let user = UserService::new(&state.db)
        .update_user(id, UpdateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Delete a user.
///
/// Deactivates and soft-deletes the profile, then returns the remaining guests.
///
/// # Access Control
/// - `Admin` - Only admins can delete users
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Remaining users", body = Vec<UserDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = UserService::new(&state.db).delete_user(id).await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a user type by name.
#[utoipa::path(
    get,
    path = "/api/user-types/{type_name}",
    tag = USER_TAG,
    params(("type_name" = String, Path, description = "`local` or `foreign`")),
    responses(
        (status = 200, description = "The user type", body = UserTypeDto),
        (status = 404, description = "User type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_type(
    State(state): State<AppState>,
    Path(type_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user_type = UserService::new(&state.db)
        .get_user_type_by_name(&type_name)
        .await?;

    Ok((StatusCode::OK, Json(user_type.into_dto())))
}
