use sea_orm::{EntityTrait, PaginatorTrait};

use super::*;
use crate::server::{
    error::config::ConfigError,
    service::{
        auth::AuthService,
        seeder::{SeedOptions, SeederService},
    },
};

fn options() -> SeedOptions {
    SeedOptions {
        admin_email: "admin@hotel.test".to_string(),
        admin_password: Some("admin-secret".to_string()),
    }
}

async fn counts(db: &DatabaseConnection) -> Result<[u64; 6], AppError> {
    Ok([
        entity::prelude::Role::find().count(db).await?,
        entity::prelude::UserType::find().count(db).await?,
        entity::prelude::User::find().count(db).await?,
        entity::prelude::Profile::find().count(db).await?,
        entity::prelude::Configuration::find().count(db).await?,
        entity::prelude::RoomType::find().count(db).await?,
    ])
}

/// Tests seeding an empty database.
///
/// Expected: two roles, two user types, one admin, three configurations, three room
/// types, and an admin that can sign in
#[tokio::test]
async fn seeds_reference_data() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    SeederService::new(db).run(&options()).await?;

    assert_eq!(counts(db).await?, [2, 2, 1, 1, 3, 3]);

    let admin_id = AuthService::new(db)
        .sign_in("admin@hotel.test", "admin-secret")
        .await?;
    let admin = crate::server::data::user::UserRepository::new(db)
        .find_by_id(admin_id)
        .await?
        .unwrap();
    assert!(admin.is_admin());

    Ok(())
}

/// Tests that running the seeder twice changes nothing the second time.
///
/// Expected: identical row counts after both runs
#[tokio::test]
async fn seeding_is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let seeder = SeederService::new(db);
    seeder.run(&options()).await?;
    let first = counts(db).await?;

    seeder.run(&options()).await?;
    let second = counts(db).await?;

    assert_eq!(first, second);

    Ok(())
}

/// Tests that existing reference rows are kept as they are.
///
/// Expected: the pre-existing configuration keeps its value
#[tokio::test]
async fn keeps_existing_rows() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_configuration(db, "max_guests_per_room", 5.0).await?;
    factory::user::create_admin(db).await?;

    SeederService::new(db)
        .run(&SeedOptions {
            admin_email: "admin@hotel.test".to_string(),
            admin_password: None,
        })
        .await?;

    let value = crate::server::service::configuration::ConfigurationService::new(db)
        .get_value("max_guests_per_room")
        .await?;
    assert_eq!(value, Some(5.0));
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}

/// Tests that a missing admin password aborts the whole run.
///
/// Expected: Err(ConfigErr) and nothing written
#[tokio::test]
async fn requires_admin_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SeederService::new(db)
        .run(&SeedOptions {
            admin_email: "admin@hotel.test".to_string(),
            admin_password: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(AppError::ConfigErr(ConfigError::MissingEnvVar(_)))
    ));
    assert_eq!(counts(db).await?, [0, 0, 0, 0, 0, 0]);

    Ok(())
}
