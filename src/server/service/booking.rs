//! Booking service.
//!
//! A booking groups booking details and carries their summed price. Every write runs in a
//! single transaction: details, invoices, rooms and the booking total change together or
//! not at all.

use std::collections::HashSet;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{booking::BookingRepository, user::UserRepository},
    error::{internal::InternalError, AppError},
    model::{
        booking::{Booking, CreateBookingParams, UpdateBookingParams},
        user::UserAccount,
    },
    service::booking_detail::BookingDetailService,
};

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the caller's bookings. Administrators see every booking with its owner.
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - Live bookings with their live details
    /// - `Err(AppError::NotFound)` - Caller missing
    pub async fn find_all(&self, user_id: i32) -> Result<Vec<Booking>, AppError> {
        let user = require_user(self.db, user_id).await?;

        if !user.is_admin() {
            return Ok(BookingRepository::new(self.db)
                .find_all(Some(user.id))
                .await?);
        }

        let bookings = BookingRepository::new(self.db).find_all(None).await?;

        let owner_ids = bookings
            .iter()
            .map(|booking| booking.user_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        let owners = UserRepository::new(self.db).find_owners(owner_ids).await?;

        Ok(bookings
            .into_iter()
            .map(|booking| match owners.get(&booking.user_id) {
                Some(owner) => booking.with_owner(owner.clone()),
                None => booking,
            })
            .collect())
    }

    /// Reads one booking. Administrators also get its owner.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The booking with its live details
    /// - `Err(AppError::NotFound)` - Caller or booking missing
    /// - `Err(AppError::Forbidden)` - Booking belongs to another user and the caller is not admin
    pub async fn find_one(&self, id: i32, user_id: i32) -> Result<Booking, AppError> {
        let user = require_user(self.db, user_id).await?;
        let booking = require_booking(self.db, &user, id).await?;

        if !user.is_admin() {
            return Ok(booking);
        }

        let mut owners = UserRepository::new(self.db)
            .find_owners(vec![booking.user_id])
            .await?;

        Ok(match owners.remove(&booking.user_id) {
            Some(owner) => booking.with_owner(owner),
            None => booking,
        })
    }

    /// Creates every detail, then a booking totalling their prices.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The new booking with its details
    /// - `Err(AppError::BadRequest)` - No details, a room requested twice, or an invalid detail
    /// - `Err(AppError::NotFound)` - Caller or a room missing
    pub async fn create(
        &self,
        params: CreateBookingParams,
        user_id: i32,
    ) -> Result<Booking, AppError> {
        if params.details.is_empty() {
            return Err(AppError::BadRequest(
                "A booking needs at least one booking detail.".to_string(),
            ));
        }

        let mut rooms = HashSet::new();
        for detail in &params.details {
            if !rooms.insert(detail.room_id) {
                return Err(AppError::BadRequest(format!(
                    "Room with id '{}' is requested more than once.",
                    detail.room_id
                )));
            }
        }

        let user = require_user(self.db, user_id).await?;

        let txn = self.db.begin().await?;

        let detail_service = BookingDetailService::new(&txn);
        let mut details = Vec::with_capacity(params.details.len());
        for detail in params.details {
            details.push(detail_service.create(detail, user.id).await?);
        }

        let total_price = details.iter().map(|detail| detail.total_price).sum();

        let booking = BookingRepository::new(&txn)
            .create(user.id, total_price)
            .await?;
        detail_service
            .assign_to_booking(&details, booking.id)
            .await?;

        let booking = BookingRepository::new(&txn)
            .find_by_id(booking.id)
            .await?
            .ok_or_else(|| missing_after_write(booking.id))?;

        txn.commit().await?;

        tracing::info!(
            booking_id = booking.id,
            user_id = user.id,
            details = booking.details.len(),
            "Created booking"
        );

        Ok(booking)
    }

    /// Updates details of a booking and recomputes its total.
    ///
    /// # Returns
    /// - `Ok(Booking)` - The refreshed booking
    /// - `Err(AppError::NotFound)` - Caller, booking or a detail missing
    /// - `Err(AppError::Forbidden)` - Booking belongs to another user and the caller is not admin
    /// - `Err(AppError::BadRequest)` - A detail is not part of the booking, or is invalid
    pub async fn update(
        &self,
        params: UpdateBookingParams,
        user_id: i32,
    ) -> Result<Booking, AppError> {
        let user = require_user(self.db, user_id).await?;
        let booking = require_booking(self.db, &user, params.booking_id).await?;

        let detail_ids: HashSet<i32> = booking.details.iter().map(|detail| detail.id).collect();
        if let Some(foreign) = params
            .details
            .iter()
            .find(|detail| !detail_ids.contains(&detail.id))
        {
            return Err(AppError::BadRequest(format!(
                "Booking detail with id '{}' is not part of booking '{}'.",
                foreign.id, booking.id
            )));
        }

        let txn = self.db.begin().await?;

        let detail_service = BookingDetailService::new(&txn);
        for detail in params.details {
            detail_service.update_one(detail, user.id).await?;
        }
        detail_service.sync_booking_total(booking.id).await?;

        let booking = BookingRepository::new(&txn)
            .find_by_id(booking.id)
            .await?
            .ok_or_else(|| missing_after_write(booking.id))?;

        txn.commit().await?;

        Ok(booking)
    }

    /// Removes some or all details of a booking.
    ///
    /// An empty `booking_detail_ids` removes every detail. The booking itself is soft-deleted
    /// once no live detail remains.
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Booking still live, with the recomputed total
    /// - `Ok(None)` - Booking deleted
    /// - `Err(AppError::NotFound)` - Caller or booking missing
    /// - `Err(AppError::Forbidden)` - Booking belongs to another user and the caller is not admin
    /// - `Err(AppError::BadRequest)` - A detail id is not part of the booking
    pub async fn remove(
        &self,
        id: i32,
        user_id: i32,
        booking_detail_ids: Vec<i32>,
    ) -> Result<Option<Booking>, AppError> {
        let user = require_user(self.db, user_id).await?;
        let booking = require_booking(self.db, &user, id).await?;

        let live: HashSet<i32> = booking.details.iter().map(|detail| detail.id).collect();

        let to_remove: Vec<i32> = if booking_detail_ids.is_empty() {
            live.iter().copied().collect()
        } else {
            if let Some(foreign) = booking_detail_ids.iter().find(|id| !live.contains(id)) {
                return Err(AppError::BadRequest(format!(
                    "Booking detail with id '{}' is not part of booking '{}'.",
                    foreign, booking.id
                )));
            }
            booking_detail_ids
        };

        let remaining = live.len() - to_remove.iter().collect::<HashSet<_>>().len();

        let txn = self.db.begin().await?;

        BookingDetailService::new(&txn)
            .soft_delete(to_remove)
            .await?;

        let result = if remaining == 0 {
            BookingRepository::new(&txn).soft_delete(booking.id).await?;
            None
        } else {
            BookingDetailService::new(&txn)
                .sync_booking_total(booking.id)
                .await?;
            Some(
                BookingRepository::new(&txn)
                    .find_by_id(booking.id)
                    .await?
                    .ok_or_else(|| missing_after_write(booking.id))?,
            )
        };

        txn.commit().await?;

        tracing::info!(
            booking_id = booking.id,
            deleted = result.is_none(),
            "Removed booking details"
        );

        Ok(result)
    }
}

async fn require_user<C: ConnectionTrait>(db: &C, user_id: i32) -> Result<UserAccount, AppError> {
    UserRepository::new(db)
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found.", user_id)))
}

async fn require_booking<C: ConnectionTrait>(
    db: &C,
    user: &UserAccount,
    id: i32,
) -> Result<Booking, AppError> {
    let booking = BookingRepository::new(db)
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking with id '{}' not found.", id)))?;

    if !user.can_access(booking.user_id) {
        return Err(AppError::Forbidden(
            "This booking does not belong to you.".to_string(),
        ));
    }

    Ok(booking)
}

fn missing_after_write(id: i32) -> AppError {
    InternalError::MissingAfterWrite {
        entity: "Booking",
        id,
    }
    .into()
}
