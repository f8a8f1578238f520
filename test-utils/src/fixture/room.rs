//! Room fixtures.

use chrono::Utc;
use entity::room;

/// Default test room number.
pub const DEFAULT_ROOM_NUMBER: &str = "101";

/// Creates an available room of room type `1`.
pub fn entity() -> room::Model {
    let now = Utc::now();
    room::Model {
        id: 1,
        room_number: DEFAULT_ROOM_NUMBER.to_string(),
        room_type_id: 1,
        status: "available".to_string(),
        note: None,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}
