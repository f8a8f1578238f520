//! User type fixtures.

use chrono::Utc;
use entity::user_type;

/// Creates a user type entity model.
///
/// `foreign` gets a surcharge factor of `1.5`, anything else `1.0`.
pub fn entity(type_name: &str) -> user_type::Model {
    let now = Utc::now();
    user_type::Model {
        id: 1,
        type_name: type_name.to_string(),
        description: None,
        surcharge_factor: if type_name == "foreign" { 1.5 } else { 1.0 },
        created_at: now,
        updated_at: now,
        deleted_at: None,
    }
}
