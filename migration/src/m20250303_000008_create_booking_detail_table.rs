use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000004_create_user_table::User, m20250302_000006_create_room_table::Room,
    m20250303_000007_create_booking_table::Booking,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookingDetail::Table)
                    .if_not_exists()
                    .col(pk_auto(BookingDetail::Id))
                    .col(integer_null(BookingDetail::BookingId))
                    .col(integer(BookingDetail::UserId))
                    .col(integer(BookingDetail::RoomId))
                    .col(date(BookingDetail::StartDate))
                    .col(date(BookingDetail::EndDate))
                    .col(integer(BookingDetail::NumberOfGuests))
                    .col(double(BookingDetail::TotalPrice))
                    .col(
                        timestamp_with_time_zone(BookingDetail::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(BookingDetail::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(BookingDetail::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_detail_booking_id")
                            .from(BookingDetail::Table, BookingDetail::BookingId)
                            .to(Booking::Table, Booking::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_detail_user_id")
                            .from(BookingDetail::Table, BookingDetail::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_detail_room_id")
                            .from(BookingDetail::Table, BookingDetail::RoomId)
                            .to(Room::Table, Room::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookingDetail::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BookingDetail {
    Table,
    Id,
    BookingId,
    UserId,
    RoomId,
    StartDate,
    EndDate,
    NumberOfGuests,
    TotalPrice,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
