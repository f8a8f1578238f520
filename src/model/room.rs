use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::room_type::RoomTypeDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub room_number: String,
    pub status: String,
    pub note: Option<String>,
    pub room_type: RoomTypeDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateRoomDto {
    #[validate(length(min = 1))]
    pub room_number: String,
    pub room_type_id: i32,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateRoomDto {
    #[validate(length(min = 1))]
    pub room_number: Option<String>,
    pub room_type_id: Option<i32>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateRoomStatusDto {
    /// `available`, `booked` or `maintenance`.
    pub status: String,
}

/// Query string filters for listing rooms.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRoomsDto {
    pub room_number: Option<String>,
    pub room_type_name: Option<String>,
    pub status: Option<String>,
    pub price: Option<f64>,
}
