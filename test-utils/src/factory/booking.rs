//! Booking, booking detail and invoice factories.
//!
//! These insert rows directly and do not touch room status or recompute totals; use the
//! booking service when a test needs the full flow.

use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a booking owned by `user_id` with the given total.
pub async fn create_booking(
    db: &DatabaseConnection,
    user_id: i32,
    total_price: f64,
) -> Result<entity::booking::Model, DbErr> {
    let now = Utc::now();
    entity::booking::ActiveModel {
        user_id: ActiveValue::Set(user_id),
        total_price: ActiveValue::Set(total_price),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Factory for booking details. `build()` also inserts the matching invoice.
pub struct BookingDetailFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    room_id: i32,
    booking_id: Option<i32>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    number_of_guests: i32,
    total_price: f64,
}

impl<'a> BookingDetailFactory<'a> {
    /// Creates a factory for a two night stay of two guests priced at 300000.
    pub fn new(db: &'a DatabaseConnection, user_id: i32, room_id: i32) -> Self {
        let start_date = NaiveDate::from_ymd_opt(2030, 1, 10).unwrap_or_default();
        let end_date = NaiveDate::from_ymd_opt(2030, 1, 12).unwrap_or_default();
        Self {
            db,
            user_id,
            room_id,
            booking_id: None,
            start_date,
            end_date,
            number_of_guests: 2,
            total_price: 300_000.0,
        }
    }

    pub fn booking_id(mut self, booking_id: i32) -> Self {
        self.booking_id = Some(booking_id);
        self
    }

    pub fn dates(mut self, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self.end_date = end_date;
        self
    }

    pub fn number_of_guests(mut self, number_of_guests: i32) -> Self {
        self.number_of_guests = number_of_guests;
        self
    }

    pub fn total_price(mut self, total_price: f64) -> Self {
        self.total_price = total_price;
        self
    }

    /// Inserts the detail and its invoice.
    ///
    /// # Returns
    /// - `Ok((detail, invoice))` - Created rows
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(
        self,
    ) -> Result<(entity::booking_detail::Model, entity::invoice::Model), DbErr> {
        let now = Utc::now();
        let detail = entity::booking_detail::ActiveModel {
            booking_id: ActiveValue::Set(self.booking_id),
            user_id: ActiveValue::Set(self.user_id),
            room_id: ActiveValue::Set(self.room_id),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            number_of_guests: ActiveValue::Set(self.number_of_guests),
            total_price: ActiveValue::Set(self.total_price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let invoice = entity::invoice::ActiveModel {
            booking_detail_id: ActiveValue::Set(detail.id),
            user_id: ActiveValue::Set(self.user_id),
            price: ActiveValue::Set(self.total_price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok((detail, invoice))
    }
}

/// Creates a detail and invoice with default dates, guests and price.
pub async fn create_booking_detail(
    db: &DatabaseConnection,
    user_id: i32,
    room_id: i32,
) -> Result<(entity::booking_detail::Model, entity::invoice::Model), DbErr> {
    BookingDetailFactory::new(db, user_id, room_id).build().await
}
