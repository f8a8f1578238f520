use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::AppError,
    model::booking_detail::CreateBookingDetailParams,
};

mod booking;
mod room;
mod seeder;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2030, 6, day).unwrap()
}

/// Detail request for a stay from `start` to `end` of June 2030.
fn stay(room_id: i32, start: u32, end: u32, number_of_guests: i32) -> CreateBookingDetailParams {
    CreateBookingDetailParams {
        room_id,
        start_date: date(start),
        end_date: date(end),
        number_of_guests,
    }
}

/// Creates an available room priced at the factory default of 150000 per night.
async fn available_room(db: &DatabaseConnection) -> Result<entity::room::Model, AppError> {
    Ok(factory::room::create_room(db).await?)
}

async fn room_status(db: &DatabaseConnection, room_id: i32) -> Result<String, AppError> {
    use sea_orm::EntityTrait;

    Ok(entity::prelude::Room::find_by_id(room_id)
        .one(db)
        .await?
        .map(|room| room.status)
        .unwrap_or_default())
}
