use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoomTypeDto {
    pub id: i32,
    pub name: String,
    pub room_price: f64,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateRoomTypeDto {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub room_price: f64,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateRoomTypeDto {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(range(min = 0.0))]
    pub room_price: Option<f64>,
    pub description: Option<String>,
}
