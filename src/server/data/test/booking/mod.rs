use crate::server::data::{booking::BookingRepository, booking_detail::BookingDetailRepository};
use sea_orm::{DbErr, TransactionTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod find_all;
