use super::*;
use crate::server::{
    model::{
        booking::{CreateBookingParams, UpdateBookingParams},
        booking_detail::UpdateBookingDetailParams,
    },
    service::booking::BookingService,
};

/// Tests creating a booking with two rooms.
///
/// Verifies that every detail is attached to the booking, the total equals the sum of
/// the detail prices and both rooms are booked.
///
/// Expected: Ok with total 300000 + 375000
#[tokio::test]
async fn creates_booking_with_summed_total() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room_a = available_room(db).await?;
    let room_b = available_room(db).await?;

    let booking = BookingService::new(db)
        .create(
            CreateBookingParams {
                details: vec![stay(room_a.id, 1, 3, 2), stay(room_b.id, 1, 3, 3)],
            },
            user.id,
        )
        .await?;

    assert_eq!(booking.details.len(), 2);
    assert_eq!(booking.total_price, 675_000.0);
    assert!(booking
        .details
        .iter()
        .all(|detail| detail.booking_id == Some(booking.id)));
    assert_eq!(room_status(db, room_a.id).await?, "booked");
    assert_eq!(room_status(db, room_b.id).await?, "booked");

    Ok(())
}

/// Tests that a booking without details is rejected.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn rejects_empty_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = BookingService::new(db)
        .create(CreateBookingParams { details: vec![] }, user.id)
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that requesting the same room twice is rejected before anything is written.
///
/// Expected: Err(BadRequest) and the room stays available
#[tokio::test]
async fn rejects_duplicate_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = available_room(db).await?;

    let result = BookingService::new(db)
        .create(
            CreateBookingParams {
                details: vec![stay(room.id, 1, 3, 2), stay(room.id, 5, 7, 2)],
            },
            user.id,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(room_status(db, room.id).await?, "available");

    Ok(())
}

/// Tests that a failing detail rolls back the details created before it.
///
/// The second room is already booked, so the whole booking must be rolled back and the
/// first room released again.
///
/// Expected: Err(BadRequest), no booking and the first room still available
#[tokio::test]
async fn rolls_back_when_a_detail_fails() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let free = available_room(db).await?;
    let taken = factory::room::RoomFactory::new(db)
        .status("booked")
        .build()
        .await?;

    let service = BookingService::new(db);
    let result = service
        .create(
            CreateBookingParams {
                details: vec![stay(free.id, 1, 3, 2), stay(taken.id, 1, 3, 2)],
            },
            user.id,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));
    assert_eq!(room_status(db, free.id).await?, "available");
    assert!(service.find_all(user.id).await?.is_empty());

    Ok(())
}

/// Tests updating a detail of a booking.
///
/// Verifies that the booking total follows the new detail price.
///
/// Expected: Ok with total 300000 + 450000
#[tokio::test]
async fn update_recomputes_total() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room_a = available_room(db).await?;
    let room_b = available_room(db).await?;

    let service = BookingService::new(db);
    let booking = service
        .create(
            CreateBookingParams {
                details: vec![stay(room_a.id, 1, 3, 2), stay(room_b.id, 1, 3, 2)],
            },
            user.id,
        )
        .await?;

    let updated = service
        .update(
            UpdateBookingParams {
                booking_id: booking.id,
                details: vec![UpdateBookingDetailParams {
                    id: booking.details[1].id,
                    end_date: Some(date(4)),
                    ..Default::default()
                }],
            },
            user.id,
        )
        .await?;

    assert_eq!(updated.total_price, 750_000.0);
    let sum: f64 = updated.details.iter().map(|d| d.total_price).sum();
    assert_eq!(updated.total_price, sum);

    Ok(())
}

/// Tests that a detail belonging to another booking cannot be updated through this one.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn update_rejects_foreign_detail() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room_a = available_room(db).await?;
    let room_b = available_room(db).await?;

    let service = BookingService::new(db);
    let first = service
        .create(
            CreateBookingParams {
                details: vec![stay(room_a.id, 1, 3, 2)],
            },
            user.id,
        )
        .await?;
    let second = service
        .create(
            CreateBookingParams {
                details: vec![stay(room_b.id, 1, 3, 2)],
            },
            user.id,
        )
        .await?;

    let result = service
        .update(
            UpdateBookingParams {
                booking_id: first.id,
                details: vec![UpdateBookingDetailParams {
                    id: second.details[0].id,
                    number_of_guests: Some(1),
                    ..Default::default()
                }],
            },
            user.id,
        )
        .await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests removing one detail of a booking.
///
/// Verifies that the booking survives with the remaining detail, its total drops to the
/// remaining price and the removed room is released.
///
/// Expected: Ok(Some(booking)) with total 300000
#[tokio::test]
async fn partial_remove_recomputes_total() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room_a = available_room(db).await?;
    let room_b = available_room(db).await?;

    let service = BookingService::new(db);
    let booking = service
        .create(
            CreateBookingParams {
                details: vec![stay(room_a.id, 1, 3, 2), stay(room_b.id, 1, 3, 3)],
            },
            user.id,
        )
        .await?;

    let removed_detail = booking.details[1].id;
    let result = service
        .remove(booking.id, user.id, vec![removed_detail])
        .await?
        .expect("booking should survive a partial removal");

    assert_eq!(result.details.len(), 1);
    assert_eq!(result.total_price, 300_000.0);
    assert_eq!(room_status(db, room_b.id).await?, "available");
    assert_eq!(room_status(db, room_a.id).await?, "booked");

    Ok(())
}

/// Tests removing a booking without detail ids.
///
/// Expected: Ok(None), booking gone from reads and all rooms released
#[tokio::test]
async fn full_remove_deletes_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = available_room(db).await?;

    let service = BookingService::new(db);
    let booking = service
        .create(
            CreateBookingParams {
                details: vec![stay(room.id, 1, 3, 2)],
            },
            user.id,
        )
        .await?;

    let result = service.remove(booking.id, user.id, vec![]).await?;

    assert!(result.is_none());
    assert!(matches!(
        service.find_one(booking.id, user.id).await,
        Err(AppError::NotFound(_))
    ));
    assert_eq!(room_status(db, room.id).await?, "available");

    Ok(())
}

/// Tests that removing the last detail by id also deletes the booking.
///
/// Expected: Ok(None)
#[tokio::test]
async fn removing_last_detail_deletes_booking() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = available_room(db).await?;

    let service = BookingService::new(db);
    let booking = service
        .create(
            CreateBookingParams {
                details: vec![stay(room.id, 1, 3, 2)],
            },
            user.id,
        )
        .await?;

    let result = service
        .remove(booking.id, user.id, vec![booking.details[0].id])
        .await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a detail id outside the booking is rejected on removal.
///
/// Expected: Err(BadRequest)
#[tokio::test]
async fn remove_rejects_unknown_detail() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = available_room(db).await?;

    let service = BookingService::new(db);
    let booking = service
        .create(
            CreateBookingParams {
                details: vec![stay(room.id, 1, 3, 2)],
            },
            user.id,
        )
        .await?;

    let result = service.remove(booking.id, user.id, vec![9999]).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that guests cannot read or delete each other's bookings.
///
/// Expected: Err(Forbidden) for the stranger, Ok with the owner summary for the admin
#[tokio::test]
async fn enforces_ownership() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let room = available_room(db).await?;

    let service = BookingService::new(db);
    let booking = service
        .create(
            CreateBookingParams {
                details: vec![stay(room.id, 1, 3, 2)],
            },
            owner.id,
        )
        .await?;

    assert!(matches!(
        service.find_one(booking.id, stranger.id).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(matches!(
        service.remove(booking.id, stranger.id, vec![]).await,
        Err(AppError::Forbidden(_))
    ));
    assert!(service.find_all(stranger.id).await?.is_empty());

    let seen_by_admin = service.find_one(booking.id, admin.id).await?;
    assert_eq!(seen_by_admin.id, booking.id);
    assert_eq!(
        seen_by_admin.owner.as_ref().map(|o| o.id),
        Some(owner.id)
    );

    let seen_by_owner = service.find_one(booking.id, owner.id).await?;
    assert!(seen_by_owner.owner.is_none());

    Ok(())
}

/// Tests that administrators list every booking together with its owner.
///
/// Expected: Ok with one booking per guest, each carrying the owner's email
#[tokio::test]
async fn admin_lists_all_bookings_with_owner() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::UserFactory::new(db)
        .email("first@hotel.test")
        .build()
        .await?;
    let second = factory::user::UserFactory::new(db)
        .email("second@hotel.test")
        .build()
        .await?;
    let admin = factory::user::create_admin(db).await?;

    let service = BookingService::new(db);
    for user in [&first, &second] {
        let room = available_room(db).await?;
        service
            .create(
                CreateBookingParams {
                    details: vec![stay(room.id, 1, 3, 2)],
                },
                user.id,
            )
            .await?;
    }

    let bookings = service.find_all(admin.id).await?;

    assert_eq!(bookings.len(), 2);
    let emails: Vec<_> = bookings
        .iter()
        .filter_map(|booking| booking.owner.as_ref().map(|o| o.email.as_str()))
        .collect();
    assert_eq!(emails, vec!["first@hotel.test", "second@hotel.test"]);

    let own = service.find_all(first.id).await?;
    assert_eq!(own.len(), 1);
    assert!(own[0].owner.is_none());

    Ok(())
}

/// Tests that an unknown caller is reported as not found.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn fails_for_unknown_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BookingService::new(db).find_all(42).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
