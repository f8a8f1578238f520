use super::*;

/// Tests building owner summaries for several users.
///
/// Expected: Ok with one entry per requested user carrying email and full name
#[tokio::test]
async fn maps_owners_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::UserFactory::new(db)
        .full_name("Pham Quoc Bao")
        .build()
        .await?;
    let second = factory::create_user(db).await?;
    factory::create_user(db).await?;

    let owners = UserRepository::new(db)
        .find_owners(vec![first.id, second.id])
        .await?;

    assert_eq!(owners.len(), 2);
    let owner = &owners[&first.id];
    assert_eq!(owner.email, first.email);
    assert_eq!(owner.full_name, "Pham Quoc Bao");

    assert!(UserRepository::new(db).find_owners(vec![]).await?.is_empty());

    Ok(())
}
