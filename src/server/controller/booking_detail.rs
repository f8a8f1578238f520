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
        booking_detail::{BookingDetailDto, UpdateBookingDetailDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard,
        model::booking_detail::UpdateBookingDetailParams,
        service::booking_detail::BookingDetailService, state::AppState,
    },
};

/// Tag for grouping booking detail endpoints in OpenAPI documentation
pub static BOOKING_DETAIL_TAG: &str = "booking_detail";

#[utoipa::path(
    get,
    path = "/api/booking-details",
    tag = BOOKING_DETAIL_TAG,
    responses(
        (status = 200, description = "Own stays, all stays for admins", body = Vec<BookingDetailDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking_details(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let details = BookingDetailService::new(&state.db).find_all(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(details.into_iter().map(|d| d.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/booking-details/{id}",
    tag = BOOKING_DETAIL_TAG,
    params(("id" = i32, Path, description = "Booking detail ID")),
    responses(
        (status = 200, description = "The stay", body = BookingDetailDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Stay of another user", body = ErrorDto),
        (status = 404, description = "Booking detail not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking_detail(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let detail = BookingDetailService::new(&state.db)
        .find_one(id, user.id)
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Change a single stay.
///
/// The stay is repriced, its invoice updated and the total of its booking recomputed.
#[utoipa::path(
    patch,
    path = "/api/booking-details/{id}",
    tag = BOOKING_DETAIL_TAG,
    params(("id" = i32, Path, description = "Booking detail ID")),
    request_body = UpdateBookingDetailDto,
    responses(
        (status = 200, description = "Updated stay", body = BookingDetailDto),
        (status = 400, description = "Invalid stay or room unavailable", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Stay of another user", body = ErrorDto),
        (status = 404, description = "Booking detail or room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking_detail(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookingDetailDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    payload.validate()?;

    let detail = BookingDetailService::new(&state.db)
        .update(UpdateBookingDetailParams::from_dto(id, payload), user.id)
        .await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}
