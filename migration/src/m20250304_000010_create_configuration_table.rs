use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Configuration::Table)
                    .if_not_exists()
                    .col(pk_auto(Configuration::Id))
                    .col(string_uniq(Configuration::ConfigName))
                    .col(double(Configuration::ConfigValue))
                    .col(
                        timestamp_with_time_zone(Configuration::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Configuration::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Configuration::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Configuration {
    Table,
    Id,
    ConfigName,
    ConfigValue,
    CreatedAt,
    UpdatedAt,
}
