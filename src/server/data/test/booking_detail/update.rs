use super::*;

/// Tests overwriting the stay of a detail.
///
/// Expected: Ok(Some) with the new dates, guests and price
#[tokio::test]
async fn overwrites_stay() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    let (detail, _) = factory::create_booking_detail(db, user.id, room.id).await?;

    let updated = BookingDetailRepository::new(db)
        .update(
            detail.id,
            BookingDetailRecord {
                user_id: user.id,
                room_id: room.id,
                start_date: NaiveDate::from_ymd_opt(2030, 1, 10).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2030, 1, 15).unwrap(),
                number_of_guests: 3,
                total_price: 937_500.0,
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.end_date, NaiveDate::from_ymd_opt(2030, 1, 15).unwrap());
    assert_eq!(updated.number_of_guests, 3);
    assert_eq!(updated.total_price, 937_500.0);

    Ok(())
}

/// Tests that deleted details are not updated.
///
/// Expected: Ok(None)
#[tokio::test]
async fn skips_deleted_detail() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    let (detail, _) = factory::create_booking_detail(db, user.id, room.id).await?;

    let repo = BookingDetailRepository::new(db);
    repo.soft_delete(vec![detail.id]).await?;

    let result = repo
        .update(
            detail.id,
            BookingDetailRecord {
                user_id: user.id,
                room_id: room.id,
                start_date: detail.start_date,
                end_date: detail.end_date,
                number_of_guests: 1,
                total_price: 1.0,
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
