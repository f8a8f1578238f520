use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profile::Table)
                    .if_not_exists()
                    .col(pk_auto(Profile::Id))
                    .col(string(Profile::FullName))
                    .col(string(Profile::Nationality))
                    .col(string(Profile::Status).default("active"))
                    .col(date(Profile::Dob))
                    .col(string(Profile::PhoneNumber))
                    .col(string(Profile::Address))
                    .col(string(Profile::IdentityNumber))
                    .col(
                        timestamp_with_time_zone(Profile::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Profile::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(Profile::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Profile {
    Table,
    Id,
    FullName,
    Nationality,
    Status,
    Dob,
    PhoneNumber,
    Address,
    IdentityNumber,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
