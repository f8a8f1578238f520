use sea_orm_migration::{prelude::*, schema::*};

use super::m20250303_000008_create_booking_detail_table::BookingDetail;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoice::Table)
                    .if_not_exists()
                    .col(pk_auto(Invoice::Id))
                    .col(integer(Invoice::BookingDetailId))
                    .col(integer(Invoice::UserId))
                    .col(double(Invoice::Price))
                    .col(
                        timestamp_with_time_zone(Invoice::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Invoice::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Invoice::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoice_booking_detail_id")
                            .from(Invoice::Table, Invoice::BookingDetailId)
                            .to(BookingDetail::Table, BookingDetail::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invoice::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invoice {
    Table,
    Id,
    BookingDetailId,
    UserId,
    Price,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
