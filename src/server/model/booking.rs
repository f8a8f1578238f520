//! Booking domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::booking::{BookingDto, BookingOwnerDto},
    server::model::booking_detail::{
        BookingDetail, CreateBookingDetailParams, UpdateBookingDetailParams,
    },
};

/// Owner summary attached to bookings listed for an administrator.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingOwner {
    pub id: i32,
    pub email: String,
    pub full_name: String,
}

/// Booking with its live details.
///
/// `total_price` always equals the sum of the live details' invoice prices.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub total_price: f64,
    pub created_at: DateTime<Utc>,
    pub owner: Option<BookingOwner>,
    pub details: Vec<BookingDetail>,
}

impl Booking {
    pub fn from_entity(entity: entity::booking::Model, details: Vec<BookingDetail>) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            total_price: entity.total_price,
            created_at: entity.created_at,
            owner: None,
            details,
        }
    }

    pub fn with_owner(mut self, owner: BookingOwner) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            total_price: self.total_price,
            created_at: self.created_at,
            owner: self.owner.map(|owner| BookingOwnerDto {
                id: owner.id,
                email: owner.email,
                full_name: owner.full_name,
            }),
            booking_details: self
                .details
                .into_iter()
                .map(BookingDetail::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub details: Vec<CreateBookingDetailParams>,
}

#[derive(Debug, Clone)]
pub struct UpdateBookingParams {
    pub booking_id: i32,
    pub details: Vec<UpdateBookingDetailParams>,
}
