//! Room type repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::room_type::{CreateRoomTypeParams, RoomType, UpdateRoomTypeParams};

pub struct RoomTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoomTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRoomTypeParams) -> Result<RoomType, DbErr> {
        let now = Utc::now();
        let room_type = entity::room_type::ActiveModel {
            name: ActiveValue::Set(params.name),
            room_price: ActiveValue::Set(params.room_price),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(RoomType::from_entity(room_type))
    }

    /// Lists live room types ordered by id.
    pub async fn find_all(&self) -> Result<Vec<RoomType>, DbErr> {
        let room_types = entity::prelude::RoomType::find()
            .filter(entity::room_type::Column::DeletedAt.is_null())
            .order_by_asc(entity::room_type::Column::Id)
            .all(self.db)
            .await?;

        Ok(room_types.into_iter().map(RoomType::from_entity).collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<RoomType>, DbErr> {
        let room_type = entity::prelude::RoomType::find_by_id(id)
            .filter(entity::room_type::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(room_type.map(RoomType::from_entity))
    }

    /// Checks whether a live room type other than `excluding` already uses `name`.
    pub async fn name_taken(&self, name: &str, excluding: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::RoomType::find()
            .filter(entity::room_type::Column::Name.eq(name))
            .filter(entity::room_type::Column::DeletedAt.is_null());

        if let Some(id) = excluding {
            query = query.filter(entity::room_type::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Applies a partial update to a live room type.
    ///
    /// # Returns
    /// - `Ok(Some(RoomType))` - Updated room type
    /// - `Ok(None)` - Room type not found or deleted
    /// - `Err(DbErr)` - Database error
    pub async fn update(&self, params: UpdateRoomTypeParams) -> Result<Option<RoomType>, DbErr> {
        let Some(room_type) = entity::prelude::RoomType::find_by_id(params.id)
            .filter(entity::room_type::Column::DeletedAt.is_null())
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = room_type.into_active_model();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(room_price) = params.room_price {
            active.room_price = ActiveValue::Set(room_price);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let room_type = active.update(self.db).await?;

        Ok(Some(RoomType::from_entity(room_type)))
    }

    pub async fn soft_delete(&self, id: i32) -> Result<(), DbErr> {
        let room_type = entity::prelude::RoomType::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Room type {} not found", id)))?;

        let now = Utc::now();
        let mut active = room_type.into_active_model();
        active.deleted_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);
        active.update(self.db).await?;

        Ok(())
    }
}
