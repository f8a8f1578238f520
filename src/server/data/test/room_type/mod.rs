use crate::server::{
    data::room_type::RoomTypeRepository,
    model::room_type::{CreateRoomTypeParams, UpdateRoomTypeParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod name_taken;
mod update;
