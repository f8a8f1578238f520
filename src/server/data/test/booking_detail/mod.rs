use crate::server::{
    data::booking_detail::BookingDetailRepository, model::booking_detail::BookingDetailRecord,
};
use chrono::NaiveDate;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;
