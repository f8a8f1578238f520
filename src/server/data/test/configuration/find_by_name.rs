use super::*;

/// Tests lookups by name and value updates.
///
/// Expected: Some for a stored name, None otherwise
#[tokio::test]
async fn finds_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Configuration)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stored = factory::create_configuration(db, "surcharge_rate", 0.25).await?;

    let repo = ConfigurationRepository::new(db);

    let found = repo.find_by_name("surcharge_rate").await?.unwrap();
    assert_eq!(found.id, stored.id);
    assert_eq!(found.config_value, 0.25);
    assert!(repo.find_by_name("missing").await?.is_none());

    let updated = repo.update_value(stored.id, 0.3).await?.unwrap();
    assert_eq!(updated.config_value, 0.3);
    assert!(repo.update_value(9999, 1.0).await?.is_none());

    Ok(())
}
