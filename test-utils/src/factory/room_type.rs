//! Room type factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Default nightly price of factory room types.
pub const DEFAULT_PRICE: f64 = 150_000.0;

/// Factory for creating room types.
pub struct RoomTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    room_price: f64,
    description: Option<String>,
}

impl<'a> RoomTypeFactory<'a> {
    /// Creates a factory named `"Type {id}"` priced at [`DEFAULT_PRICE`].
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Type {}", next_id()),
            room_price: DEFAULT_PRICE,
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn room_price(mut self, room_price: f64) -> Self {
        self.room_price = room_price;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub async fn build(self) -> Result<entity::room_type::Model, DbErr> {
        let now = Utc::now();
        entity::room_type::ActiveModel {
            name: ActiveValue::Set(self.name),
            room_price: ActiveValue::Set(self.room_price),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room type with default values.
pub async fn create_room_type(db: &DatabaseConnection) -> Result<entity::room_type::Model, DbErr> {
    RoomTypeFactory::new(db).build().await
}
