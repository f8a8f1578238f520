//! Room domain models and parameters.

use sea_orm::DbErr;

use crate::{
    model::room::{CreateRoomDto, RoomDto, SearchRoomsDto, UpdateRoomDto},
    server::model::room_type::RoomType,
};

/// Occupancy state of a room. Only `Available` rooms can be booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Available,
    Booked,
    Maintenance,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::Booked => "booked",
            Self::Maintenance => "maintenance",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "available" => Some(Self::Available),
            "booked" => Some(Self::Booked),
            "maintenance" => Some(Self::Maintenance),
            _ => None,
        }
    }
}

/// Room with its room type.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub room_number: String,
    pub status: RoomStatus,
    pub note: Option<String>,
    pub room_type: RoomType,
}

impl Room {
    /// Converts a room row and its room type to a domain model.
    ///
    /// # Returns
    /// - `Ok(Room)` - The converted room
    /// - `Err(DbErr::Custom)` - Unknown stored status
    pub fn from_entity(
        entity: entity::room::Model,
        room_type: entity::room_type::Model,
    ) -> Result<Self, DbErr> {
        let status = RoomStatus::parse(&entity.status)
            .ok_or_else(|| DbErr::Custom(format!("Unknown room status '{}'", entity.status)))?;

        Ok(Self {
            id: entity.id,
            room_number: entity.room_number,
            status,
            note: entity.note,
            room_type: RoomType::from_entity(room_type),
        })
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            room_number: self.room_number,
            status: self.status.as_str().to_string(),
            note: self.note,
            room_type: self.room_type.into_dto(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    pub room_number: String,
    pub room_type_id: i32,
    pub note: Option<String>,
}

impl CreateRoomParams {
    pub fn from_dto(dto: CreateRoomDto) -> Self {
        Self {
            room_number: dto.room_number,
            room_type_id: dto.room_type_id,
            note: dto.note,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateRoomParams {
    pub id: i32,
    pub room_number: Option<String>,
    pub room_type_id: Option<i32>,
    pub note: Option<String>,
}

impl UpdateRoomParams {
    pub fn from_dto(id: i32, dto: UpdateRoomDto) -> Self {
        Self {
            id,
            room_number: dto.room_number,
            room_type_id: dto.room_type_id,
            note: dto.note,
        }
    }
}

/// Filters for listing rooms. Text filters are case-insensitive substrings, `price`
/// matches the room type price exactly.
#[derive(Debug, Clone, Default)]
pub struct RoomSearchParams {
    pub room_number: Option<String>,
    pub room_type_name: Option<String>,
    pub status: Option<String>,
    pub price: Option<f64>,
}

impl RoomSearchParams {
    pub fn from_dto(dto: SearchRoomsDto) -> Self {
        Self {
            room_number: dto.room_number,
            room_type_name: dto.room_type_name,
            status: dto.status,
            price: dto.price,
        }
    }
}
