use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingDetailDto {
    pub id: i32,
    pub booking_id: Option<i32>,
    pub user_id: i32,
    pub room_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_guests: i32,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
}

/// One room reserved for a stay, as part of a booking request.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateBookingDetailDto {
    pub room_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[validate(range(min = 1))]
    pub number_of_guests: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateBookingDetailDto {
    pub room_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[validate(range(min = 1))]
    pub number_of_guests: Option<i32>,
}
