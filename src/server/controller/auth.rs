use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        auth::{SignInDto, SignUpDto},
        user::UserDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::CreateUserParams,
        service::{auth::AuthService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new guest account.
///
/// Creates an active profile and a `user` account with the requested user type. The new
/// account is not signed in.
///
/// # Returns
/// - `201 Created` - The new user
/// - `400 Bad Request` - Invalid payload or email already used
/// - `404 Not Found` - Unknown user type
#[utoipa::path(
    post,
    path = "/api/auth/sign-up",
    tag = AUTH_TAG,
    request_body = SignUpDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Invalid payload or email already used", body = ErrorDto),
        (status = 404, description = "Unknown user type", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(payload): Json<SignUpDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AuthService::new(&state.db)
        .sign_up(CreateUserParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

/// Sign in with email and password.
///
/// On success the user id is stored in the session cookie.
///
/// # Returns
/// - `200 OK` - The signed-in user
/// - `401 Unauthorized` - Unknown email or wrong password
/// - `403 Forbidden` - Account deleted or inactive
#[utoipa::path(
    post,
    path = "/api/auth/sign-in",
    tag = AUTH_TAG,
    request_body = SignInDto,
    responses(
        (status = 200, description = "Signed in", body = UserDto),
        (status = 400, description = "Invalid payload", body = ErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "Account inactive", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_in(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SignInDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user_id = AuthService::new(&state.db)
        .sign_in(&payload.email, &payload.password)
        .await?;

    AuthSession::new(&session).set_user_id(user_id).await?;

    let user = UserService::new(&state.db)
        .get_profile_by_user_id(user_id)
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Sign out and drop the session.
#[utoipa::path(
    post,
    path = "/api/auth/sign-out",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Signed out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sign_out(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the signed-in user.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Signed-in user", body = UserDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let profile = UserService::new(&state.db)
        .get_profile_by_user_id(user.id)
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}
