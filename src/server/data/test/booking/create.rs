use super::*;

/// Tests creating a booking and attaching details inside a transaction.
///
/// Expected: Ok with the details visible on the booking after commit
#[tokio::test]
async fn attaches_details_in_transaction() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;
    let (detail, _) = factory::create_booking_detail(db, user.id, room.id).await?;

    let txn = db.begin().await?;
    let booking = BookingRepository::new(&txn)
        .create(user.id, detail.total_price)
        .await?;
    BookingDetailRepository::new(&txn)
        .assign_to_booking(vec![detail.id], booking.id)
        .await?;
    txn.commit().await?;

    let booking = BookingRepository::new(db)
        .find_by_id(booking.id)
        .await?
        .unwrap();

    assert_eq!(booking.total_price, 300_000.0);
    assert_eq!(booking.details.len(), 1);
    assert_eq!(booking.details[0].id, detail.id);

    Ok(())
}

/// Tests that rolled back writes leave nothing behind.
///
/// Expected: no booking after rollback
#[tokio::test]
async fn rollback_discards_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let txn = db.begin().await?;
    let booking = BookingRepository::new(&txn).create(user.id, 1.0).await?;
    txn.rollback().await?;

    assert!(BookingRepository::new(db)
        .find_by_id(booking.id)
        .await?
        .is_none());

    Ok(())
}
