use sea_orm::DatabaseConnection;

use crate::server::{
    data::{room::RoomRepository, room_type::RoomTypeRepository},
    error::AppError,
    model::room_type::{CreateRoomTypeParams, RoomType, UpdateRoomTypeParams},
};

pub struct RoomTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a room type with a unique name among live room types.
    pub async fn create(&self, params: CreateRoomTypeParams) -> Result<RoomType, AppError> {
        let repo = RoomTypeRepository::new(self.db);

        validate_price(params.room_price)?;

        if repo.name_taken(&params.name, None).await? {
            return Err(AppError::BadRequest(format!(
                "Room type '{}' already exists.",
                params.name
            )));
        }

        Ok(repo.create(params).await?)
    }

    pub async fn find_all(&self) -> Result<Vec<RoomType>, AppError> {
        Ok(RoomTypeRepository::new(self.db).find_all().await?)
    }

    pub async fn find_one(&self, id: i32) -> Result<RoomType, AppError> {
        RoomTypeRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room type with id '{}' not found.", id)))
    }

    pub async fn update(&self, params: UpdateRoomTypeParams) -> Result<RoomType, AppError> {
        let repo = RoomTypeRepository::new(self.db);

        self.find_one(params.id).await?;

        if let Some(room_price) = params.room_price {
            validate_price(room_price)?;
        }

        if let Some(name) = &params.name {
            if repo.name_taken(name, Some(params.id)).await? {
                return Err(AppError::BadRequest(format!(
                    "Room type '{}' already exists.",
                    name
                )));
            }
        }

        let id = params.id;
        repo.update(params)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room type with id '{}' not found.", id)))
    }

    /// Soft-deletes a room type that no live room uses.
    pub async fn remove(&self, id: i32) -> Result<RoomType, AppError> {
        let room_type = self.find_one(id).await?;

        let rooms = RoomRepository::new(self.db).count_by_room_type(id).await?;
        if rooms > 0 {
            return Err(AppError::BadRequest(format!(
                "Room type '{}' is still used by {} room(s).",
                room_type.name, rooms
            )));
        }

        RoomTypeRepository::new(self.db).soft_delete(id).await?;

        Ok(room_type)
    }
}

fn validate_price(room_price: f64) -> Result<(), AppError> {
    if !room_price.is_finite() || room_price < 0.0 {
        return Err(AppError::BadRequest(
            "Room price must be a non-negative number.".to_string(),
        ));
    }
    Ok(())
}
