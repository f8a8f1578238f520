use super::*;
use crate::server::{
    model::{
        booking::{CreateBookingParams, UpdateBookingParams},
        booking_detail::UpdateBookingDetailParams,
        room::{CreateRoomParams, RoomSearchParams, RoomStatus, UpdateRoomParams},
    },
    service::{booking::BookingService, room::RoomService},
};

/// Tests creating a room and reading it back with its room type.
///
/// Expected: Ok with an available room of the requested type
#[tokio::test]
async fn creates_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room_type = factory::create_room_type(db).await?;

    let service = RoomService::new(db);
    let room = service
        .create_room(CreateRoomParams {
            room_number: "101".to_string(),
            room_type_id: room_type.id,
            note: Some("Sea view".to_string()),
        })
        .await?;

    assert_eq!(room.status, RoomStatus::Available);
    assert_eq!(room.room_type.id, room_type.id);

    let found = service.find_one(room.id).await?;
    assert_eq!(found, Some(room));

    Ok(())
}

/// Tests room number uniqueness on create and update.
///
/// Expected: Err(BadRequest) in both cases
#[tokio::test]
async fn rejects_duplicate_room_number() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::room::RoomFactory::new(db)
        .room_number("201")
        .build()
        .await?;
    let other = factory::create_room(db).await?;

    let service = RoomService::new(db);

    let created = service
        .create_room(CreateRoomParams {
            room_number: "201".to_string(),
            room_type_id: existing.room_type_id,
            note: None,
        })
        .await;
    assert!(matches!(created, Err(AppError::BadRequest(_))));

    let updated = service
        .update_room(UpdateRoomParams {
            id: other.id,
            room_number: Some("201".to_string()),
            ..Default::default()
        })
        .await;
    assert!(matches!(updated, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests that missing rooms and room types are reported as not found.
///
/// Expected: Err(NotFound), and BadRequest for the status change of a missing room
#[tokio::test]
async fn reports_missing_rooms() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;

    let service = RoomService::new(db);

    assert!(matches!(
        service
            .create_room(CreateRoomParams {
                room_number: "301".to_string(),
                room_type_id: 9999,
                note: None,
            })
            .await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service
            .update_room(UpdateRoomParams {
                id: room.id,
                room_type_id: Some(9999),
                ..Default::default()
            })
            .await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.remove_room(9999).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service
            .update_status_of_room(9999, RoomStatus::Maintenance)
            .await,
        Err(AppError::BadRequest(_))
    ));
    assert!(service.find_one(9999).await?.is_none());

    Ok(())
}

/// Tests the room listing filters.
///
/// Expected: Ok with the rooms matching each filter
#[tokio::test]
async fn filters_rooms() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deluxe = factory::room_type::RoomTypeFactory::new(db)
        .name("Deluxe")
        .room_price(200_000.0)
        .build()
        .await?;
    let standard = factory::room_type::RoomTypeFactory::new(db)
        .name("Standard")
        .room_price(150_000.0)
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .room_number("D-1")
        .room_type_id(deluxe.id)
        .build()
        .await?;
    factory::room::RoomFactory::new(db)
        .room_number("S-1")
        .room_type_id(standard.id)
        .status("maintenance")
        .build()
        .await?;

    let service = RoomService::new(db);

    let by_type = service
        .find_all(RoomSearchParams {
            room_type_name: Some("deluxe".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_type.len(), 1);
    assert_eq!(by_type[0].room_number, "D-1");

    let by_status = service
        .find_all(RoomSearchParams {
            status: Some("MAINT".to_string()),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_status.len(), 1);
    assert_eq!(by_status[0].room_number, "S-1");

    let by_price = service
        .find_all(RoomSearchParams {
            price: Some(200_000.0),
            ..Default::default()
        })
        .await?;
    assert_eq!(by_price.len(), 1);
    assert_eq!(by_price[0].room_type.name, "Deluxe");

    Ok(())
}

/// Tests that removed rooms disappear from reads.
///
/// Expected: Ok with only the remaining room
#[tokio::test]
async fn remove_hides_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let kept = factory::create_room(db).await?;
    let removed = factory::create_room(db).await?;

    let service = RoomService::new(db);
    let remaining = service.remove_room(removed.id).await?;

    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
    assert!(service.find_one(removed.id).await?.is_none());

    Ok(())
}

/// Tests removing a room that a live booking still holds.
///
/// Verifies the stay stays editable afterwards and the room can be removed once the
/// booking is gone.
///
/// Expected: Err(BadRequest) while booked, Ok after the booking is removed
#[tokio::test]
async fn refuses_to_remove_booked_room() -> Result<(), AppError> {
    let test = TestBuilder::new().with_booking_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = available_room(db).await?;

    let bookings = BookingService::new(db);
    let booking = bookings
        .create(
            CreateBookingParams {
                details: vec![stay(room.id, 1, 3, 1)],
            },
            user.id,
        )
        .await?;
    let detail_id = booking.details[0].id;

    let service = RoomService::new(db);
    assert!(matches!(
        service.remove_room(room.id).await,
        Err(AppError::BadRequest(_))
    ));
    assert!(service.find_one(room.id).await?.is_some());

    let updated = bookings
        .update(
            UpdateBookingParams {
                booking_id: booking.id,
                details: vec![UpdateBookingDetailParams {
                    id: detail_id,
                    number_of_guests: Some(2),
                    ..Default::default()
                }],
            },
            user.id,
        )
        .await?;
    assert_eq!(updated.details[0].number_of_guests, 2);

    bookings.remove(booking.id, user.id, Vec::new()).await?;

    let remaining = service.remove_room(room.id).await?;
    assert!(remaining.iter().all(|r| r.id != room.id));

    Ok(())
}

/// Tests changing the status of a room.
///
/// Expected: Ok with the new status
#[tokio::test]
async fn updates_status() -> Result<(), AppError> {
    let test = TestBuilder::new().with_room_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let room = factory::create_room(db).await?;

    let updated = RoomService::new(db)
        .update_status_of_room(room.id, RoomStatus::Maintenance)
        .await?;

    assert_eq!(updated.status, RoomStatus::Maintenance);

    Ok(())
}
