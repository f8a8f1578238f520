pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_role_table;
mod m20250301_000002_create_user_type_table;
mod m20250301_000003_create_profile_table;
mod m20250301_000004_create_user_table;
mod m20250302_000005_create_room_type_table;
mod m20250302_000006_create_room_table;
mod m20250303_000007_create_booking_table;
mod m20250303_000008_create_booking_detail_table;
mod m20250303_000009_create_invoice_table;
mod m20250304_000010_create_configuration_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_role_table::Migration),
            Box::new(m20250301_000002_create_user_type_table::Migration),
            Box::new(m20250301_000003_create_profile_table::Migration),
            Box::new(m20250301_000004_create_user_table::Migration),
            Box::new(m20250302_000005_create_room_type_table::Migration),
            Box::new(m20250302_000006_create_room_table::Migration),
            Box::new(m20250303_000007_create_booking_table::Migration),
            Box::new(m20250303_000008_create_booking_detail_table::Migration),
            Box::new(m20250303_000009_create_invoice_table::Migration),
            Box::new(m20250304_000010_create_configuration_table::Migration),
        ]
    }
}
