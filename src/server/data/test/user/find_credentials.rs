use super::*;

/// Tests loading credentials of an active account.
///
/// Expected: Ok(Some) with a bcrypt hash and `active` set
#[tokio::test]
async fn loads_active_credentials() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let credentials = UserRepository::new(db)
        .find_credentials(&user.email)
        .await?
        .unwrap();

    assert_eq!(credentials.id, user.id);
    assert!(credentials.active);
    assert!(bcrypt::verify(factory::user::DEFAULT_PASSWORD, &credentials.password_hash).unwrap());

    Ok(())
}

/// Tests that deactivated accounts are still found but flagged inactive.
///
/// Expected: Ok(Some) with `active` false
#[tokio::test]
async fn flags_deactivated_account() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = UserRepository::new(db);
    repo.deactivate(user.id).await?;

    let credentials = repo.find_credentials(&user.email).await?.unwrap();

    assert!(!credentials.active);

    Ok(())
}

/// Tests an unknown email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let credentials = UserRepository::new(db)
        .find_credentials("nobody@hotel.test")
        .await?;

    assert!(credentials.is_none());

    Ok(())
}
