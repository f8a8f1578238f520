use super::*;

/// Tests that a deleted room frees its number and disappears from reads.
///
/// Expected: Ok with the room hidden and the number reusable
#[tokio::test]
async fn hides_room_and_frees_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::room::RoomFactory::new(db)
        .room_number("404")
        .build()
        .await?;

    let repo = RoomRepository::new(db);
    assert!(repo.number_taken("404", None).await?);

    repo.soft_delete(room.id).await?;

    assert!(repo.find_by_id(room.id).await?.is_none());
    assert!(!repo.number_taken("404", None).await?);
    assert_eq!(repo.count_by_room_type(room.room_type_id).await?, 0);

    Ok(())
}
