use super::*;

/// Tests admin user successfully passes admin permission check.
///
/// Expected: Ok(UserAccount) with the admin role
#[tokio::test]
async fn grants_access_to_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_session()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().unwrap();

    let admin = factory::user::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    let user = result.unwrap();
    assert_eq!(user.id, admin.id);
    assert!(user.is_admin());

    Ok(())
}

/// Tests non-admin user is denied admin permission.
///
/// Expected: Err(AuthError::AccessDenied)
#[tokio::test]
async fn denies_access_to_non_admin_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_session()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::AccessDenied(user_id, message))) => {
            assert_eq!(user_id, user.id);
            assert!(message.contains("admin"));
        }
        other => panic!("Expected AccessDenied error, got: {:?}", other.map(|u| u.id)),
    }

    Ok(())
}

/// Tests that an empty session is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn fails_when_no_user_in_session() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_session()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session pointing at a missing user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_when_user_missing() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_session()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let session = test.sign_in(4242).await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests that a deleted account loses access on its next request.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn fails_for_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_session()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let session = test.sign_in(user.id).await.unwrap();
    crate::server::data::user::UserRepository::new(db)
        .deactivate(user.id)
        .await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(_)))
    ));

    Ok(())
}

/// Tests the self-or-admin permission.
///
/// Expected: Ok for the account owner and for an admin, AccessDenied for anyone else
#[tokio::test]
async fn self_or_admin_checks_owner() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_session()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;

    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    auth_session.set_user_id(owner.id).await?;
    assert!(guard
        .require(&[Permission::SelfOrAdmin(owner.id)])
        .await
        .is_ok());

    auth_session.set_user_id(stranger.id).await?;
    assert!(matches!(
        guard.require(&[Permission::SelfOrAdmin(owner.id)]).await,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    auth_session.set_user_id(admin.id).await?;
    assert!(guard
        .require(&[Permission::SelfOrAdmin(owner.id)])
        .await
        .is_ok());

    Ok(())
}

/// Tests that clearing the session signs the user out.
///
/// Expected: Ok(None) after clear
#[tokio::test]
async fn clear_removes_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_session()
        .build()
        .await
        .unwrap();
    let (_, session) = test.db_and_session().unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(7).await?;
    assert_eq!(auth_session.get_user_id().await?, Some(7));

    auth_session.clear().await?;
    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}

/// Tests that a session written under the shared user key is read back by `AuthSession`.
///
/// Expected: Ok(Some(user_id)) and the guard resolving that user
#[tokio::test]
async fn reads_user_signed_in_by_test_context() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_user_tables()
        .with_session()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let guest = factory::create_user(db).await?;
    let session = test.sign_in(guest.id).await.unwrap();

    assert_eq!(AuthSession::new(session).get_user_id().await?, Some(guest.id));

    let user = AuthGuard::new(db, session).require(&[]).await?;
    assert_eq!(user.id, guest.id);
    assert!(!user.is_admin());

    Ok(())
}

/// Tests that a context built without a session refuses to hand one out.
///
/// Expected: Err(TestError::MissingSession)
#[tokio::test]
async fn context_without_session_has_no_session() -> Result<(), AppError> {
    let test = TestBuilder::new().with_user_tables().build().await.unwrap();

    assert!(matches!(
        test.db_and_session(),
        Err(TestError::MissingSession)
    ));
    assert!(test.sign_in(1).await.is_err());

    Ok(())
}
