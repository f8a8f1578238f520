use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::booking_detail::{BookingDetailDto, CreateBookingDetailDto};

/// Owner summary, only filled in for administrators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingOwnerDto {
    pub id: i32,
    pub email: String,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingDto {
    pub id: i32,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    pub owner: Option<BookingOwnerDto>,
    pub booking_details: Vec<BookingDetailDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateBookingDto {
    #[validate(length(min = 1), nested)]
    pub booking_details: Vec<CreateBookingDetailDto>,
}

/// Change to one detail of an existing booking.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateBookingDetailItemDto {
    pub id: i32,
    pub room_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[validate(range(min = 1))]
    pub number_of_guests: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateBookingDto {
    #[validate(length(min = 1), nested)]
    pub booking_details: Vec<UpdateBookingDetailItemDto>,
}

/// Query string of `DELETE /api/bookings/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeleteBookingQuery {
    /// Comma separated detail ids; when absent the whole booking is removed.
    pub booking_detail_ids: Option<String>,
}
