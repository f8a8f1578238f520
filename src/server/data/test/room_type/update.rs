use super::*;

/// Tests that only the given fields change.
///
/// Expected: Ok(Some) with the new description and the old name and price
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::room_type::RoomTypeFactory::new(db)
        .name("Twin")
        .room_price(160_000.0)
        .build()
        .await?;

    let updated = RoomTypeRepository::new(db)
        .update(UpdateRoomTypeParams {
            id: room_type.id,
            name: None,
            room_price: None,
            description: Some("Two single beds".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Twin");
    assert_eq!(updated.room_price, 160_000.0);
    assert_eq!(updated.description.as_deref(), Some("Two single beds"));

    Ok(())
}

/// Tests updating a room type that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_type() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RoomTypeRepository::new(db)
        .update(UpdateRoomTypeParams {
            id: 9999,
            name: Some("Ghost".to_string()),
            room_price: None,
            description: None,
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
