//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used for emails, room numbers and room type names so that factories never collide
/// on uniqueness checks.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a guest account and an available room ready to be booked.
///
/// # Returns
/// - `Ok((user, room_type, room))` - The created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_guest_and_room(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::room_type::Model,
        entity::room::Model,
    ),
    DbErr,
> {
    let user = crate::factory::user::create_user(db).await?;
    let room_type = crate::factory::room_type::create_room_type(db).await?;
    let room = crate::factory::room::RoomFactory::new(db)
        .room_type_id(room_type.id)
        .build()
        .await?;

    Ok((user, room_type, room))
}
