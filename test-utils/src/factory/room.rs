//! Room factory.

use crate::factory::{helpers::next_id, room_type::create_room_type};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating rooms.
///
/// When no room type is set, `build()` creates a fresh one.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    room_number: String,
    room_type_id: Option<i32>,
    status: String,
}

impl<'a> RoomFactory<'a> {
    /// Creates a factory for an `available` room numbered `"R{id}"`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            room_number: format!("R{}", next_id()),
            room_type_id: None,
            status: "available".to_string(),
        }
    }

    pub fn room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    pub fn room_type_id(mut self, room_type_id: i32) -> Self {
        self.room_type_id = Some(room_type_id);
        self
    }

    /// Sets the room status (`available`, `booked` or `maintenance`).
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        let room_type_id = match self.room_type_id {
            Some(id) => id,
            None => create_room_type(self.db).await?.id,
        };

        let now = Utc::now();
        entity::room::ActiveModel {
            room_number: ActiveValue::Set(self.room_number),
            room_type_id: ActiveValue::Set(room_type_id),
            status: ActiveValue::Set(self.status),
            note: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available room of a new room type.
pub async fn create_room(db: &DatabaseConnection) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db).build().await
}
