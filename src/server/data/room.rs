//! Room repository.
//!
//! Rooms are always returned with their room type. Room numbers are unique among live rooms
//! only, which the service checks through [`RoomRepository::number_taken`].

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::room::{CreateRoomParams, Room, RoomSearchParams, RoomStatus, UpdateRoomParams},
    util::search::contains_ignore_case,
};

pub struct RoomRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an `available` room and returns it with its room type.
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, DbErr> {
        let now = Utc::now();
        let room = entity::room::ActiveModel {
            room_number: ActiveValue::Set(params.room_number),
            room_type_id: ActiveValue::Set(params.room_type_id),
            status: ActiveValue::Set(RoomStatus::Available.as_str().to_string()),
            note: ActiveValue::Set(params.note),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.find_by_id(room.id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Room {} not found after insert", room.id)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Room>, DbErr> {
        let row = entity::prelude::Room::find_by_id(id)
            .filter(entity::room::Column::DeletedAt.is_null())
            .find_also_related(entity::prelude::RoomType)
            .one(self.db)
            .await?;

        match row {
            Some((room, Some(room_type))) => Room::from_entity(room, room_type).map(Some),
            _ => Ok(None),
        }
    }

    /// Lists live rooms matching the filters, ordered by id.
    pub async fn find_all(&self, params: &RoomSearchParams) -> Result<Vec<Room>, DbErr> {
        let mut query = entity::prelude::Room::find()
            .filter(entity::room::Column::DeletedAt.is_null())
            .find_also_related(entity::prelude::RoomType)
            .order_by_asc(entity::room::Column::Id);

        if let Some(room_number) = &params.room_number {
            query = contains_ignore_case(query, r#""room"."room_number""#, room_number);
        }
        if let Some(room_type_name) = &params.room_type_name {
            query = contains_ignore_case(query, r#""room_type"."name""#, room_type_name);
        }
        if let Some(status) = &params.status {
            query = contains_ignore_case(query, r#""room"."status""#, status);
        }
        if let Some(price) = params.price {
            query = query.filter(entity::room_type::Column::RoomPrice.eq(price));
        }

        query
            .all(self.db)
            .await?
            .into_iter()
            .filter_map(|(room, room_type)| room_type.map(|room_type| (room, room_type)))
            .map(|(room, room_type)| Room::from_entity(room, room_type))
            .collect()
    }

    /// Checks whether a live room other than `excluding` already uses `room_number`.
    pub async fn number_taken(
        &self,
        room_number: &str,
        excluding: Option<i32>,
    ) -> Result<bool, DbErr> {
        let mut query = entity::prelude::Room::find()
            .filter(entity::room::Column::RoomNumber.eq(room_number))
            .filter(entity::room::Column::DeletedAt.is_null());

        if let Some(id) = excluding {
            query = query.filter(entity::room::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Counts live rooms of a room type.
    pub async fn count_by_room_type(&self, room_type_id: i32) -> Result<u64, DbErr> {
        entity::prelude::Room::find()
            .filter(entity::room::Column::RoomTypeId.eq(room_type_id))
            .filter(entity::room::Column::DeletedAt.is_null())
            .count(self.db)
            .await
    }

    /// Applies a partial update to a live room.
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - Updated room with its room type
    /// - `Ok(None)` - Room not found or deleted
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, params: UpdateRoomParams) -> Result<Option<Room>, DbErr> {
        let Some(room) = entity::prelude::Room::find_by_id(params.id)
            .filter(entity::room::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = room.into_active_model();
        if let Some(room_number) = params.room_number {
            active.room_number = ActiveValue::Set(room_number);
        }
        if let Some(room_type_id) = params.room_type_id {
            active.room_type_id = ActiveValue::Set(room_type_id);
        }
        if let Some(note) = params.note {
            active.note = ActiveValue::Set(Some(note));
        }
        active.updated_at = ActiveValue::Set(Utc::now());
        active.update(self.db).await?;

        self.find_by_id(params.id).await
    }

    /// Sets the status of the given rooms, deleted or not.
    pub async fn set_status(&self, ids: Vec<i32>, status: RoomStatus) -> Result<(), DbErr> {
        if ids.is_empty() {
            return Ok(());
        }

        entity::prelude::Room::update_many()
            .col_expr(entity::room::Column::Status, Expr::value(status.as_str()))
            .col_expr(entity::room::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::room::Column::Id.is_in(ids))
            .exec(self.db)
            .await?;

        Ok(())
    }

    pub async fn soft_delete(&self, id: i32) -> Result<(), DbErr> {
        let room = entity::prelude::Room::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Room {} not found", id)))?;

        let now = Utc::now();
        let mut active = room.into_active_model();
        active.deleted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await?;

        Ok(())
    }
}
