//! Booking detail repository.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::booking_detail::{BookingDetail, BookingDetailRecord};

pub struct BookingDetailRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingDetailRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a detail that does not belong to a booking yet.
    pub async fn create(&self, record: BookingDetailRecord) -> Result<BookingDetail, DbErr> {
        let now = Utc::now();
        let detail = entity::booking_detail::ActiveModel {
            booking_id: ActiveValue::Set(None),
            user_id: ActiveValue::Set(record.user_id),
            room_id: ActiveValue::Set(record.room_id),
            start_date: ActiveValue::Set(record.start_date),
            end_date: ActiveValue::Set(record.end_date),
            number_of_guests: ActiveValue::Set(record.number_of_guests),
            total_price: ActiveValue::Set(record.total_price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(BookingDetail::from_entity(detail))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<BookingDetail>, DbErr> {
        let detail = entity::prelude::BookingDetail::find_by_id(id)
            .filter(entity::booking_detail::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(detail.map(BookingDetail::from_entity))
    }

    /// Lists live details, restricted to one user when `user_id` is given.
    pub async fn find_all(&self, user_id: Option<i32>) -> Result<Vec<BookingDetail>, DbErr> {
        let mut query = entity::prelude::BookingDetail::find()
            .filter(entity::booking_detail::Column::DeletedAt.is_null())
            .order_by_asc(entity::booking_detail::Column::Id);

        if let Some(user_id) = user_id {
            query = query.filter(entity::booking_detail::Column::UserId.eq(user_id));
        }

        let details = query.all(self.db).await?;

        Ok(details.into_iter().map(BookingDetail::from_entity).collect())
    }

    /// Lists the live details of the given bookings, ordered by id.
    pub async fn find_by_booking_ids(
        &self,
        booking_ids: Vec<i32>,
    ) -> Result<Vec<BookingDetail>, DbErr> {
        if booking_ids.is_empty() {
            return Ok(Vec::new());
        }

        let details = entity::prelude::BookingDetail::find()
            .filter(entity::booking_detail::Column::BookingId.is_in(booking_ids))
            .filter(entity::booking_detail::Column::DeletedAt.is_null())
            .order_by_asc(entity::booking_detail::Column::Id)
            .all(self.db)
            .await?;

        Ok(details.into_iter().map(BookingDetail::from_entity).collect())
    }

    /// Counts live details holding a room.
    pub async fn count_by_room(&self, room_id: i32) -> Result<u64, DbErr> {
        entity::prelude::BookingDetail::find()
            .filter(entity::booking_detail::Column::RoomId.eq(room_id))
            .filter(entity::booking_detail::Column::DeletedAt.is_null())
            .count(self.db)
            .await
    }

    /// Overwrites the stay of a live detail.
    ///
    /// # Returns
    /// - `Ok(Some(BookingDetail))` - Updated detail
    /// - `Ok(None)` - Detail not found or deleted
    /// - `Err(DbErr)` - Database error
    pub async fn update(
        &self,
        id: i32,
        record: BookingDetailRecord,
    ) -> Result<Option<BookingDetail>, DbErr> {
        let Some(detail) = entity::prelude::BookingDetail::find_by_id(id)
            .filter(entity::booking_detail::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = detail.into_active_model();
        active.room_id = ActiveValue::Set(record.room_id);
        active.start_date = ActiveValue::Set(record.start_date);
        active.end_date = ActiveValue::Set(record.end_date);
        active.number_of_guests = ActiveValue::Set(record.number_of_guests);
        active.total_price = ActiveValue::Set(record.total_price);
        active.updated_at = ActiveValue::Set(Utc::now());

        let detail = active.update(self.db).await?;

        Ok(Some(BookingDetail::from_entity(detail)))
    }

    /// Points the given details at a booking.
    pub async fn assign_to_booking(&self, ids: Vec<i32>, booking_id: i32) -> Result<(), DbErr> {
        if ids.is_empty() {
            return Ok(());
        }

        entity::prelude::BookingDetail::update_many()
            .col_expr(
                entity::booking_detail::Column::BookingId,
                Expr::value(booking_id),
            )
            .col_expr(
                entity::booking_detail::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .filter(entity::booking_detail::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn soft_delete(&self, ids: Vec<i32>) -> Result<(), DbErr> {
        if ids.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        entity::prelude::BookingDetail::update_many()
            .col_expr(entity::booking_detail::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::booking_detail::Column::UpdatedAt, Expr::value(now))
            .filter(entity::booking_detail::Column::Id.is_in(ids))
            .filter(entity::booking_detail::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(())
    }
}
