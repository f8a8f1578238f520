use super::*;

/// Tests inserting an unassigned detail.
///
/// Expected: Ok with no booking and the given stay
#[tokio::test]
async fn inserts_unassigned_detail() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;

    let repo = BookingDetailRepository::new(db);
    let detail = repo
        .create(BookingDetailRecord {
            user_id: user.id,
            room_id: room.id,
            start_date: NaiveDate::from_ymd_opt(2030, 2, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2030, 2, 4).unwrap(),
            number_of_guests: 1,
            total_price: 450_000.0,
        })
        .await?;

    assert_eq!(detail.booking_id, None);
    assert_eq!(detail.total_price, 450_000.0);
    assert_eq!(repo.find_all(Some(user.id)).await?.len(), 1);
    assert!(repo.find_all(Some(user.id + 1)).await?.is_empty());

    Ok(())
}
