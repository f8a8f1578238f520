//! Booking detail domain models and parameters.
//!
//! A booking detail reserves one room for a date range. It may exist briefly without a
//! booking while a booking is being assembled; its price is mirrored by exactly one invoice.

use chrono::{DateTime, NaiveDate, Utc};

use crate::model::{
    booking::UpdateBookingDetailItemDto,
    booking_detail::{BookingDetailDto, CreateBookingDetailDto, UpdateBookingDetailDto},
};

#[derive(Debug, Clone, PartialEq)]
pub struct BookingDetail {
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

impl BookingDetail {
    pub fn from_entity(entity: entity::booking_detail::Model) -> Self {
        Self {
            id: entity.id,
            booking_id: entity.booking_id,
            user_id: entity.user_id,
            room_id: entity.room_id,
            start_date: entity.start_date,
            end_date: entity.end_date,
            number_of_guests: entity.number_of_guests,
            total_price: entity.total_price,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> BookingDetailDto {
        BookingDetailDto {
            id: self.id,
            booking_id: self.booking_id,
            user_id: self.user_id,
            room_id: self.room_id,
            start_date: self.start_date,
            end_date: self.end_date,
            number_of_guests: self.number_of_guests,
            total_price: self.total_price,
            created_at: self.created_at,
        }
    }
}

/// Requested stay in one room.
#[derive(Debug, Clone)]
pub struct CreateBookingDetailParams {
    pub room_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_guests: i32,
}

impl CreateBookingDetailParams {
    pub fn from_dto(dto: CreateBookingDetailDto) -> Self {
        Self {
            room_id: dto.room_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
            number_of_guests: dto.number_of_guests,
        }
    }
}

/// Partial change to a stay; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct UpdateBookingDetailParams {
    pub id: i32,
    pub room_id: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub number_of_guests: Option<i32>,
}

impl UpdateBookingDetailParams {
    pub fn from_dto(id: i32, dto: UpdateBookingDetailDto) -> Self {
        Self {
            id,
            room_id: dto.room_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
            number_of_guests: dto.number_of_guests,
        }
    }

    pub fn from_item_dto(dto: UpdateBookingDetailItemDto) -> Self {
        Self {
            id: dto.id,
            room_id: dto.room_id,
            start_date: dto.start_date,
            end_date: dto.end_date,
            number_of_guests: dto.number_of_guests,
        }
    }
}

/// Row data of a priced stay, used for inserts and updates.
#[derive(Debug, Clone)]
pub struct BookingDetailRecord {
    pub user_id: i32,
    pub room_id: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub number_of_guests: i32,
    pub total_price: f64,
}
