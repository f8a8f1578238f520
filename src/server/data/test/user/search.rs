use super::*;

/// Tests that the listing leaves administrators and deleted profiles out.
///
/// Expected: Ok with the single live guest
#[tokio::test]
async fn excludes_admins_and_deleted_profiles() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_user(db).await?;
    let gone = factory::create_user(db).await?;
    factory::user::create_admin(db).await?;

    let repo = UserRepository::new(db);
    repo.deactivate(gone.id).await?;

    let users = repo.search(&UserSearchParams::default()).await?;

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].id, guest.id);

    Ok(())
}

/// Tests the email and identity number filters.
///
/// Expected: Ok with matches regardless of case
#[tokio::test]
async fn matches_substrings_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::UserFactory::new(db)
        .email("Minh.Anh@Example.com")
        .identity_number("CCCD-0042")
        .build()
        .await?;
    factory::create_user(db).await?;

    let repo = UserRepository::new(db);

    let by_email = repo
        .search(&UserSearchParams {
            email: Some("minh.anh@".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_email.len(), 1);

    let by_identity = repo
        .search(&UserSearchParams {
            identity_number: Some("cccd".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_identity.len(), 1);
    assert_eq!(by_identity[0].email, "Minh.Anh@Example.com");

    let none = repo
        .search(&UserSearchParams {
            email: Some("nobody".to_string()),
            ..Default::default()
        })
        .await?;
    assert!(none.is_empty());

    Ok(())
}
