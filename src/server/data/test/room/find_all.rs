use super::*;

/// Tests listing rooms with their room types.
///
/// Expected: Ok with every live room ordered by id
#[tokio::test]
async fn lists_rooms_with_types() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_room(db).await?;
    let second = factory::create_room(db).await?;

    let rooms = RoomRepository::new(db)
        .find_all(&RoomSearchParams::default())
        .await?;

    assert_eq!(rooms.len(), 2);
    assert_eq!(rooms[0].id, first.id);
    assert_eq!(rooms[1].id, second.id);
    assert_eq!(rooms[0].room_type.id, first.room_type_id);

    Ok(())
}

/// Tests the room number filter.
///
/// Expected: Ok with the rooms whose number contains the value
#[tokio::test]
async fn filters_by_room_number() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::room::RoomFactory::new(db)
        .room_number("A-101")
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .room_number("A-102")
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .room_number("B-201")
        .build()
        .await?;

    let rooms = RoomRepository::new(db)
        .find_all(&RoomSearchParams {
            room_number: Some("a-10".to_string()),
            ..Default::default()
        })
        .await?;

    assert_eq!(rooms.len(), 2);

    Ok(())
}
