use super::*;

/// Tests grouping details under their bookings and filtering by owner.
///
/// Expected: each booking carries only its own live details
#[tokio::test]
async fn groups_details_by_booking() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let room = factory::create_room(db).await?;

    let first = factory::create_booking(db, owner.id, 600_000.0).await?;
    let second = factory::create_booking(db, other.id, 300_000.0).await?;
    for booking_id in [first.id, first.id, second.id] {
        factory::booking::BookingDetailFactory::new(db, owner.id, room.id)
            .booking_id(booking_id)
            .build()
            .await?;
    }
    let (deleted, _) = factory::booking::BookingDetailFactory::new(db, owner.id, room.id)
        .booking_id(first.id)
        .build()
        .await?;
    BookingDetailRepository::new(db)
        .soft_delete(vec![deleted.id])
        .await?;

    let repo = BookingRepository::new(db);

    let all = repo.find_all(None).await?;
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].details.len(), 2);
    assert_eq!(all[1].details.len(), 1);

    let own = repo.find_all(Some(owner.id)).await?;
    assert_eq!(own.len(), 1);
    assert_eq!(own[0].id, first.id);

    Ok(())
}

/// Tests that soft-deleted bookings are not listed.
///
/// Expected: Ok with an empty list
#[tokio::test]
async fn hides_deleted_bookings() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let booking = factory::create_booking(db, user.id, 0.0).await?;

    let repo = BookingRepository::new(db);
    repo.soft_delete(booking.id).await?;

    assert!(repo.find_all(None).await?.is_empty());
    assert!(repo.find_by_id(booking.id).await?.is_none());

    Ok(())
}
