use super::*;

/// Tests the duplicate name check.
///
/// Expected: taken for another live type, free when excluding itself or after deletion
#[tokio::test]
async fn detects_live_duplicates() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RoomTypeRepository::new(db);
    let suite = repo
        .create(CreateRoomTypeParams {
            name: "Suite".to_string(),
            room_price: 500_000.0,
            description: Some("Top floor".to_string()),
        })
        .await?;

    assert!(repo.name_taken("Suite", None).await?);
    assert!(!repo.name_taken("Suite", Some(suite.id)).await?);
    assert!(!repo.name_taken("Penthouse", None).await?);

    repo.soft_delete(suite.id).await?;

    assert!(!repo.name_taken("Suite", None).await?);
    assert!(repo.find_by_id(suite.id).await?.is_none());

    Ok(())
}
