//! Booking repository.
//!
//! Bookings are loaded together with their live details; details of several bookings are
//! fetched in a single query and grouped in memory.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::{
    data::booking_detail::BookingDetailRepository,
    model::{booking::Booking, booking_detail::BookingDetail},
};

pub struct BookingRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a booking without details.
    pub async fn create(&self, user_id: i32, total_price: f64) -> Result<Booking, DbErr> {
        let now = Utc::now();
        let booking = entity::booking::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            total_price: ActiveValue::Set(total_price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(booking, Vec::new()))
    }

    /// Finds a live booking with its live details.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let Some(booking) = entity::prelude::Booking::find_by_id(id)
            .filter(entity::booking::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let details = BookingDetailRepository::new(self.db)
            .find_by_booking_ids(vec![booking.id])
            .await?;

        Ok(Some(Booking::from_entity(booking, details)))
    }

    /// Lists live bookings with their details, restricted to one user when `user_id` is given.
    pub async fn find_all(&self, user_id: Option<i32>) -> Result<Vec<Booking>, DbErr> {
        let mut query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::DeletedAt.is_null())
            .order_by_asc(entity::booking::Column::Id);

        if let Some(user_id) = user_id {
            query = query.filter(entity::booking::Column::UserId.eq(user_id));
        }

        let bookings = query.all(self.db).await?;

        let mut details_by_booking: HashMap<i32, Vec<BookingDetail>> = HashMap::new();
        for detail in BookingDetailRepository::new(self.db)
            .find_by_booking_ids(bookings.iter().map(|b| b.id).collect())
            .await?
        {
            if let Some(booking_id) = detail.booking_id {
                details_by_booking.entry(booking_id).or_default().push(detail);
            }
        }

        Ok(bookings
            .into_iter()
            .map(|booking| {
                let details = details_by_booking.remove(&booking.id).unwrap_or_default();
                Booking::from_entity(booking, details)
            })
            .collect())
    }

    pub async fn update_total(&self, id: i32, total_price: f64) -> Result<(), DbErr> {
        let booking = self.find_entity(id).await?;

        let mut active = booking.into_active_model();
        active.total_price = ActiveValue::Set(total_price);
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        Ok(())
    }

    pub async fn soft_delete(&self, id: i32) -> Result<(), DbErr> {
        let booking = self.find_entity(id).await?;

        let now = Utc::now();
        let mut active = booking.into_active_model();
        active.deleted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await?;

        Ok(())
    }

    async fn find_entity(&self, id: i32) -> Result<entity::booking::Model, DbErr> {
        entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Booking {} not found", id)))
    }
}
