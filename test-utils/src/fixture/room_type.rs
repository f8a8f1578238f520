//! Room type fixtures for creating in-memory test data.

use chrono::Utc;
use entity::room_type;

/// Default test room type name.
pub const DEFAULT_NAME: &str = "A";

/// Default nightly price.
pub const DEFAULT_PRICE: f64 = 150_000.0;

/// Creates a room type entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"A"`
/// - room_price: `150000.0`
/// - description: `None`
pub fn entity() -> room_type::Model {
    let now = Utc::now();
    room_type::Model {
        id: 1,
        name: DEFAULT_NAME.to_string(),
        room_price: DEFAULT_PRICE,
        description: None,
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}

/// Creates a room type entity model with the given nightly price.
pub fn entity_with_price(room_price: f64) -> room_type::Model {
    room_type::Model {
        room_price,
        ..entity()
    }
}
