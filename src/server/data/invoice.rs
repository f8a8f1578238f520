//! Invoice repository.
//!
//! Each booking detail has exactly one invoice carrying the detail's price. Booking totals
//! are derived from the live invoices of live details.

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::invoice::Invoice;

pub struct InvoiceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InvoiceRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        booking_detail_id: i32,
        user_id: i32,
        price: f64,
    ) -> Result<Invoice, DbErr> {
        let now = Utc::now();
        let invoice = entity::invoice::ActiveModel {
            booking_detail_id: ActiveValue::Set(booking_detail_id),
            user_id: ActiveValue::Set(user_id),
            price: ActiveValue::Set(price),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Invoice::from_entity(invoice))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Invoice>, DbErr> {
        let invoice = entity::prelude::Invoice::find_by_id(id)
            .filter(entity::invoice::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(invoice.map(Invoice::from_entity))
    }

    /// Lists live invoices, restricted to one user when `user_id` is given.
    pub async fn find_all(&self, user_id: Option<i32>) -> Result<Vec<Invoice>, DbErr> {
        let mut query = entity::prelude::Invoice::find()
            .filter(entity::invoice::Column::DeletedAt.is_null())
            .order_by_asc(entity::invoice::Column::Id);

        if let Some(user_id) = user_id {
            query = query.filter(entity::invoice::Column::UserId.eq(user_id));
        }

        let invoices = query.all(self.db).await?;

        Ok(invoices.into_iter().map(Invoice::from_entity).collect())
    }

    /// Sets the price of the live invoice of a booking detail.
    pub async fn update_price(&self, booking_detail_id: i32, price: f64) -> Result<(), DbErr> {
        entity::prelude::Invoice::update_many()
            .col_expr(entity::invoice::Column::Price, Expr::value(price))
            .col_expr(entity::invoice::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::invoice::Column::BookingDetailId.eq(booking_detail_id))
            .filter(entity::invoice::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Sums the prices of the live invoices of the given details, `0.0` when none match.
    pub async fn sum_by_booking_detail_ids(&self, ids: Vec<i32>) -> Result<f64, DbErr> {
        if ids.is_empty() {
            return Ok(0.0);
        }

        let invoices = entity::prelude::Invoice::find()
            .filter(entity::invoice::Column::BookingDetailId.is_in(ids))
            .filter(entity::invoice::Column::DeletedAt.is_null())
            .all(self.db)
            .await?;

        Ok(invoices.iter().map(|invoice| invoice.price).sum())
    }

    pub async fn soft_delete_by_booking_detail_ids(&self, ids: Vec<i32>) -> Result<(), DbErr> {
        if ids.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        entity::prelude::Invoice::update_many()
            .col_expr(entity::invoice::Column::DeletedAt, Expr::value(now))
            .col_expr(entity::invoice::Column::UpdatedAt, Expr::value(now))
            .filter(entity::invoice::Column::BookingDetailId.is_in(ids))
            .filter(entity::invoice::Column::DeletedAt.is_null())
            .exec(self.db)
            .await?;

        Ok(())
    }
}
