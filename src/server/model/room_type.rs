//! Room type domain models and parameters.

use crate::model::room_type::{CreateRoomTypeDto, RoomTypeDto, UpdateRoomTypeDto};

/// Catalog entry that fixes the nightly price of its rooms.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomType {
    pub id: i32,
    pub name: String,
    pub room_price: f64,
    pub description: Option<String>,
}

impl RoomType {
    pub fn from_entity(entity: entity::room_type::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            room_price: entity.room_price,
            description: entity.description,
        }
    }

    pub fn into_dto(self) -> RoomTypeDto {
        RoomTypeDto {
            id: self.id,
            name: self.name,
            room_price: self.room_price,
            description: self.description,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoomTypeParams {
    pub name: String,
    pub room_price: f64,
    pub description: Option<String>,
}

impl CreateRoomTypeParams {
    pub fn from_dto(dto: CreateRoomTypeDto) -> Self {
        Self {
            name: dto.name,
            room_price: dto.room_price,
            description: dto.description,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRoomTypeParams {
    pub id: i32,
    pub name: Option<String>,
    pub room_price: Option<f64>,
    pub description: Option<String>,
}

impl UpdateRoomTypeParams {
    pub fn from_dto(id: i32, dto: UpdateRoomTypeDto) -> Self {
        Self {
            id,
            name: dto.name,
            room_price: dto.room_price,
            description: dto.description,
        }
    }
}
