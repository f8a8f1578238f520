//! Booking detail service.
//!
//! Creating or changing a detail validates the stay against the pricing rules, prices it,
//! keeps the detail's invoice in step and moves the room between `available` and `booked`.
//! Methods on the generic service never open a transaction themselves; the booking service
//! calls them inside its own transaction, and [`BookingDetailService::update`] wraps a
//! standalone change in one.

use std::collections::HashSet;

use chrono::NaiveDate;

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        booking::BookingRepository, booking_detail::BookingDetailRepository,
        invoice::InvoiceRepository, room::RoomRepository, user::UserRepository,
        user_type::UserTypeRepository,
    },
    error::AppError,
    model::{
        booking_detail::{
            BookingDetail, BookingDetailRecord, CreateBookingDetailParams,
            UpdateBookingDetailParams,
        },
        room::{Room, RoomStatus},
        user::UserAccount,
    },
    service::{configuration::ConfigurationService, invoice::InvoiceService},
};

pub struct BookingDetailService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> BookingDetailService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Prices and inserts an unassigned detail with its invoice and books the room.
    ///
    /// # Returns
    /// - `Ok(BookingDetail)` - The created detail
    /// - `Err(AppError::NotFound)` - User, user type or room missing
    /// - `Err(AppError::BadRequest)` - Room not available, invalid dates or guest count
    pub async fn create(
        &self,
        params: CreateBookingDetailParams,
        user_id: i32,
    ) -> Result<BookingDetail, AppError> {
        let user = self.require_user(user_id).await?;
        let room = self.require_room(params.room_id).await?;

        if room.status != RoomStatus::Available {
            return Err(AppError::BadRequest(format!(
                "Room '{}' is not available.",
                room.room_number
            )));
        }

        let total_price = self
            .price_stay(
                &room,
                user.user_type_id,
                params.start_date,
                params.end_date,
                params.number_of_guests,
            )
            .await?;

        let detail = BookingDetailRepository::new(self.db)
            .create(BookingDetailRecord {
                user_id: user.id,
                room_id: room.id,
                start_date: params.start_date,
                end_date: params.end_date,
                number_of_guests: params.number_of_guests,
                total_price,
            })
            .await?;

        InvoiceRepository::new(self.db)
            .create(detail.id, user.id, total_price)
            .await?;

        RoomRepository::new(self.db)
            .set_status(vec![room.id], RoomStatus::Booked)
            .await?;

        Ok(detail)
    }

    /// Changes a detail, re-prices it and resyncs the owning booking's total.
    ///
    /// The stay is priced with the user type of the detail's owner, also when an
    /// administrator makes the change.
    ///
    /// # Returns
    /// - `Ok(BookingDetail)` - The updated detail
    /// - `Err(AppError::NotFound)` - Caller, detail or new room missing
    /// - `Err(AppError::Forbidden)` - Detail belongs to another user and the caller is not admin
    /// - `Err(AppError::BadRequest)` - New room not available, invalid dates or guest count
    pub async fn update_one(
        &self,
        params: UpdateBookingDetailParams,
        user_id: i32,
    ) -> Result<BookingDetail, AppError> {
        let user = self.require_user(user_id).await?;
        let current = self.find_one_for(&user, params.id).await?;

        let room_id = params.room_id.unwrap_or(current.room_id);
        let room = self.require_room(room_id).await?;
        let room_changed = room_id != current.room_id;

        if room_changed && room.status != RoomStatus::Available {
            return Err(AppError::BadRequest(format!(
                "Room '{}' is not available.",
                room.room_number
            )));
        }

        let owner = self.require_user(current.user_id).await?;
        let start_date = params.start_date.unwrap_or(current.start_date);
        let end_date = params.end_date.unwrap_or(current.end_date);
        let number_of_guests = params.number_of_guests.unwrap_or(current.number_of_guests);

        let total_price = self
            .price_stay(
                &room,
                owner.user_type_id,
                start_date,
                end_date,
                number_of_guests,
            )
            .await?;

        let detail = BookingDetailRepository::new(self.db)
            .update(
                current.id,
                BookingDetailRecord {
                    user_id: current.user_id,
                    room_id,
                    start_date,
                    end_date,
                    number_of_guests,
                    total_price,
                },
            )
            .await?
            .ok_or_else(|| not_found(current.id))?;

        InvoiceRepository::new(self.db)
            .update_price(detail.id, total_price)
            .await?;

        if room_changed {
            let rooms = RoomRepository::new(self.db);
            rooms
                .set_status(vec![current.room_id], RoomStatus::Available)
                .await?;
            rooms.set_status(vec![room_id], RoomStatus::Booked).await?;
        }

        if let Some(booking_id) = detail.booking_id {
            self.sync_booking_total(booking_id).await?;
        }

        Ok(detail)
    }

    /// Attaches details to a booking.
    pub async fn assign_to_booking(
        &self,
        details: &[BookingDetail],
        booking_id: i32,
    ) -> Result<(), AppError> {
        let ids = details.iter().map(|detail| detail.id).collect();

        BookingDetailRepository::new(self.db)
            .assign_to_booking(ids, booking_id)
            .await?;

        Ok(())
    }

    /// Soft-deletes details and their invoices and releases their rooms.
    pub async fn soft_delete(&self, ids: Vec<i32>) -> Result<(), AppError> {
        let repo = BookingDetailRepository::new(self.db);

        let mut room_ids = HashSet::new();
        for id in &ids {
            if let Some(detail) = repo.find_by_id(*id).await? {
                room_ids.insert(detail.room_id);
            }
        }

        repo.soft_delete(ids.clone()).await?;
        InvoiceRepository::new(self.db)
            .soft_delete_by_booking_detail_ids(ids)
            .await?;
        RoomRepository::new(self.db)
            .set_status(room_ids.into_iter().collect(), RoomStatus::Available)
            .await?;

        Ok(())
    }

    /// Recomputes a booking's total from the invoices of its live details.
    ///
    /// # Returns
    /// - `Ok(f64)` - The new total
    pub async fn sync_booking_total(&self, booking_id: i32) -> Result<f64, AppError> {
        let detail_ids = BookingDetailRepository::new(self.db)
            .find_by_booking_ids(vec![booking_id])
            .await?
            .into_iter()
            .map(|detail| detail.id)
            .collect();

        let total = InvoiceService::new(self.db)
            .calculate_price_of_invoices_by_booking_detail_ids(detail_ids)
            .await?;

        BookingRepository::new(self.db)
            .update_total(booking_id, total)
            .await?;

        Ok(total)
    }

    /// Lists the caller's details, or every detail for an administrator.
    pub async fn find_all(&self, user_id: i32) -> Result<Vec<BookingDetail>, AppError> {
        let user = self.require_user(user_id).await?;

        let owner = if user.is_admin() { None } else { Some(user.id) };

        Ok(BookingDetailRepository::new(self.db).find_all(owner).await?)
    }

    pub async fn find_one(&self, id: i32, user_id: i32) -> Result<BookingDetail, AppError> {
        let user = self.require_user(user_id).await?;

        self.find_one_for(&user, id).await
    }

    async fn find_one_for(&self, user: &UserAccount, id: i32) -> Result<BookingDetail, AppError> {
        let detail = BookingDetailRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        if !user.can_access(detail.user_id) {
            return Err(AppError::Forbidden(
                "This booking detail does not belong to you.".to_string(),
            ));
        }

        Ok(detail)
    }

    async fn price_stay(
        &self,
        room: &Room,
        user_type_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
        number_of_guests: i32,
    ) -> Result<f64, AppError> {
        let user_type = UserTypeRepository::new(self.db)
            .find_by_id(user_type_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("User type with id '{}' not found.", user_type_id))
            })?;

        let rules = ConfigurationService::new(self.db).pricing_rules().await?;

        let nights = rules.validate_stay(start_date, end_date, number_of_guests)?;

        Ok(rules.price(
            room.room_type.room_price,
            nights,
            number_of_guests,
            user_type.surcharge_factor,
        ))
    }

    async fn require_user(&self, user_id: i32) -> Result<UserAccount, AppError> {
        UserRepository::new(self.db)
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User with id '{}' not found.", user_id)))
    }

    async fn require_room(&self, room_id: i32) -> Result<Room, AppError> {
        RoomRepository::new(self.db)
            .find_by_id(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room with id '{}' not found.", room_id)))
    }
}

impl<'a> BookingDetailService<'a, DatabaseConnection> {
    /// Runs [`update_one`](Self::update_one) in its own transaction.
    pub async fn update(
        &self,
        params: UpdateBookingDetailParams,
        user_id: i32,
    ) -> Result<BookingDetail, AppError> {
        let txn = self.db.begin().await?;

        let detail = BookingDetailService::new(&txn)
            .update_one(params, user_id)
            .await?;

        txn.commit().await?;

        Ok(detail)
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Booking detail with id '{}' not found.", id))
}
