//! Configuration factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a configuration value.
pub async fn create_configuration(
    db: &DatabaseConnection,
    config_name: &str,
    config_value: f64,
) -> Result<entity::configuration::Model, DbErr> {
    let now = Utc::now();
    entity::configuration::ActiveModel {
        config_name: ActiveValue::Set(config_name.to_string()),
        config_value: ActiveValue::Set(config_value),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Inserts the three pricing rules with their standard values.
///
/// `max_guests_per_room = 3`, `surcharge_guest_threshold = 3`, `surcharge_rate = 0.25`.
pub async fn create_pricing_rules(
    db: &DatabaseConnection,
) -> Result<Vec<entity::configuration::Model>, DbErr> {
    let mut configurations = Vec::new();
    for (name, value) in crate::fixture::configuration::PRICING_RULES {
        configurations.push(create_configuration(db, name, *value).await?);
    }
    Ok(configurations)
}
