use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, CreateBookingDto, DeleteBookingQuery, UpdateBookingDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{
            booking::{CreateBookingParams, UpdateBookingParams},
            booking_detail::{CreateBookingDetailParams, UpdateBookingDetailParams},
        },
        service::booking::BookingService,
        state::AppState,
        util::parse::parse_id_list,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "booking";

/// Book one or more rooms.
///
/// Every stay is priced and gets its own invoice; the booking total is their sum. Either all
/// stays are booked or none.
///
/// # Access Control
/// - Signed in
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Invalid stay, unavailable or duplicate room", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    payload.validate()?;

    let params = CreateBookingParams {
        details: payload
            .booking_details
            .into_iter()
            .map(CreateBookingDetailParams::from_dto)
            .collect(),
    };

    let booking = BookingService::new(&state.db)
        .create(params, user.id)
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

/// List bookings.
///
/// Guests see their own bookings, admins see every booking with its owner.
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "Bookings", body = Vec<BookingDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bookings = BookingService::new(&state.db).find_all(user.id).await?;

    Ok((
        StatusCode::OK,
        Json(bookings.into_iter().map(|b| b.into_dto()).collect::<Vec<_>>()),
    ))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    responses(
        (status = 200, description = "The booking", body = BookingDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Booking of another user", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking = BookingService::new(&state.db).find_one(id, user.id).await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Change stays of a booking.
///
/// Each listed detail must belong to the booking. The total is recomputed afterwards.
#[utoipa::path(
    patch,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingDto,
    responses(
        (status = 200, description = "Updated booking", body = BookingDto),
        (status = 400, description = "Invalid stay or detail not in booking", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Booking of another user", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    payload.validate()?;

    let params = UpdateBookingParams {
        booking_id: id,
        details: payload
            .booking_details
            .into_iter()
            .map(UpdateBookingDetailParams::from_item_dto)
            .collect(),
    };

    let booking = BookingService::new(&state.db)
        .update(params, user.id)
        .await?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

/// Remove stays from a booking, or the whole booking.
///
/// Without `booking_detail_ids` every stay is removed. Once no stay remains the booking is
/// deleted and `204 No Content` is returned.
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tag = BOOKING_TAG,
    params(
        ("id" = i32, Path, description = "Booking ID"),
        ("booking_detail_ids" = Option<String>, Query, description = "Comma separated detail ids")
    ),
    responses(
        (status = 200, description = "Booking with remaining stays", body = BookingDto),
        (status = 204, description = "Booking deleted"),
        (status = 400, description = "Malformed id list or detail not in booking", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Booking of another user", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_booking(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(query): Query<DeleteBookingQuery>,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let booking_detail_ids = match query.booking_detail_ids {
        Some(ids) => parse_id_list(&ids)?,
        None => Vec::new(),
    };

    let booking = BookingService::new(&state.db)
        .remove(id, user.id, booking_detail_ids)
        .await?;

    Ok(match booking {
        Some(booking) => (StatusCode::OK, Json(booking.into_dto())).into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    })
}
