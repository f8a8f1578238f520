use crate::server::data::invoice::InvoiceRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod sum_by_booking_detail_ids;
