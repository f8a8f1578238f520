use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserType::Table)
                    .if_not_exists()
                    .col(pk_auto(UserType::Id))
                    .col(string_uniq(UserType::TypeName))
                    .col(string_null(UserType::Description))
                    .col(double(UserType::SurchargeFactor).default(1.0))
                    .col(
                        timestamp_with_time_zone(UserType::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(UserType::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(timestamp_with_time_zone_null(UserType::DeletedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserType {
    Table,
    Id,
    TypeName,
    Description,
    SurchargeFactor,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
