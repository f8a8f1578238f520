use crate::server::{
    data::room::RoomRepository,
    model::room::{RoomSearchParams, RoomStatus},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod find_all;
mod set_status;
mod soft_delete;
