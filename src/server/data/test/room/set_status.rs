use super::*;

/// Tests changing the status of several rooms at once.
///
/// Expected: Ok with only the listed rooms updated
#[tokio::test]
async fn updates_listed_rooms() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_room(db).await?;
    let second = factory::create_room(db).await?;
    let untouched = factory::create_room(db).await?;

    let repo = RoomRepository::new(db);
    repo.set_status(vec![first.id, second.id], RoomStatus::Booked)
        .await?;

    assert_eq!(
        repo.find_by_id(first.id).await?.unwrap().status,
        RoomStatus::Booked
    );
    assert_eq!(
        repo.find_by_id(second.id).await?.unwrap().status,
        RoomStatus::Booked
    );
    assert_eq!(
        repo.find_by_id(untouched.id).await?.unwrap().status,
        RoomStatus::Available
    );

    Ok(())
}

/// Tests that an empty id list is a no-op.
///
/// Expected: Ok
#[tokio::test]
async fn accepts_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    RoomRepository::new(db)
        .set_status(vec![], RoomStatus::Maintenance)
        .await?;

    Ok(())
}
