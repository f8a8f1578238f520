//! Invoice domain model.

use chrono::{DateTime, Utc};

use crate::model::invoice::InvoiceDto;

/// Price record of a single booking detail.
#[derive(Debug, Clone, PartialEq)]
pub struct Invoice {
    pub id: i32,
    pub booking_detail_id: i32,
    pub user_id: i32,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Invoice {
    pub fn from_entity(entity: entity::invoice::Model) -> Self {
        Self {
            id: entity.id,
            booking_detail_id: entity.booking_detail_id,
            user_id: entity.user_id,
            price: entity.price,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> InvoiceDto {
        InvoiceDto {
            id: self.id,
            booking_detail_id: self.booking_detail_id,
            user_id: self.user_id,
            price: self.price,
            created_at: self.created_at,
        }
    }
}
