use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        booking_detail::BookingDetailRepository, room::RoomRepository,
        room_type::RoomTypeRepository,
    },
    error::AppError,
    model::room::{CreateRoomParams, Room, RoomSearchParams, RoomStatus, UpdateRoomParams},
};

pub struct RoomService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an available room.
    ///
    /// # Returns
    /// - `Ok(Room)` - Created room with its room type
    /// - `Err(AppError::BadRequest)` - Room number already used by a live room
    /// - `Err(AppError::NotFound)` - Room type missing
    pub async fn create_room(&self, params: CreateRoomParams) -> Result<Room, AppError> {
        let repo = RoomRepository::new(self.db);

        if repo.number_taken(&params.room_number, None).await? {
            return Err(AppError::BadRequest(format!(
                "Room number '{}' already exists.",
                params.room_number
            )));
        }

        self.require_room_type(params.room_type_id).await?;

        let room = repo.create(params).await?;

        tracing::info!("Created room {} ({})", room.room_number, room.id);

        Ok(room)
    }

    pub async fn find_all(&self, params: RoomSearchParams) -> Result<Vec<Room>, AppError> {
        Ok(RoomRepository::new(self.db).find_all(&params).await?)
    }

    pub async fn find_one(&self, id: i32) -> Result<Option<Room>, AppError> {
        Ok(RoomRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn update_room(&self, params: UpdateRoomParams) -> Result<Room, AppError> {
        let repo = RoomRepository::new(self.db);

        if repo.find_by_id(params.id).await?.is_none() {
            return Err(not_found(params.id));
        }

        if let Some(room_number) = &params.room_number {
            if repo.number_taken(room_number, Some(params.id)).await? {
                return Err(AppError::BadRequest(format!(
                    "Room number '{}' already exists.",
                    room_number
                )));
            }
        }

        if let Some(room_type_id) = params.room_type_id {
            self.require_room_type(room_type_id).await?;
        }

        let id = params.id;
        repo.update(params).await?.ok_or_else(|| not_found(id))
    }

    /// Soft-deletes a room no live stay holds and returns the remaining rooms.
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - Rooms still live after the removal
    /// - `Err(AppError::NotFound)` - Room missing
    /// - `Err(AppError::BadRequest)` - A live booking detail still holds the room
    pub async fn remove_room(&self, id: i32) -> Result<Vec<Room>, AppError> {
        let repo = RoomRepository::new(self.db);

        let Some(room) = repo.find_by_id(id).await? else {
            return Err(not_found(id));
        };

        let stays = BookingDetailRepository::new(self.db).count_by_room(id).await?;
        if stays > 0 {
            return Err(AppError::BadRequest(format!(
                "Room '{}' is still held by {} booking detail(s).",
                room.room_number, stays
            )));
        }

        repo.soft_delete(id).await?;

        self.find_all(RoomSearchParams::default()).await
    }

    /// Sets the status of a room.
    ///
    /// # Returns
    /// - `Ok(Room)` - Updated room
    /// - `Err(AppError::BadRequest)` - Room does not exist
    pub async fn update_status_of_room(
        &self,
        room_id: i32,
        status: RoomStatus,
    ) -> Result<Room, AppError> {
        let repo = RoomRepository::new(self.db);

        if repo.find_by_id(room_id).await?.is_none() {
            return Err(AppError::BadRequest(format!(
                "Room with id '{}' does not exist.",
                room_id
            )));
        }

        repo.set_status(vec![room_id], status).await?;

        repo.find_by_id(room_id)
            .await?
            .ok_or_else(|| not_found(room_id))
    }

    async fn require_room_type(&self, room_type_id: i32) -> Result<(), AppError> {
        if RoomTypeRepository::new(self.db)
            .find_by_id(room_type_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Room type with id '{}' not found.",
                room_type_id
            )));
        }
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Room with id '{}' not found.", id))
}
