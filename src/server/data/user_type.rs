//! User type repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::user_type::UserType;

pub struct UserTypeRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserTypeRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a live user type by its name, e.g. `local`.
    pub async fn find_by_name(&self, type_name: &str) -> Result<Option<UserType>, DbErr> {
        let user_type = entity::prelude::UserType::find()
            .filter(entity::user_type::Column::TypeName.eq(type_name))
            .filter(entity::user_type::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(user_type.map(UserType::from_entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<UserType>, DbErr> {
        let user_type = entity::prelude::UserType::find_by_id(id)
            .filter(entity::user_type::Column::DeletedAt.is_null())
            .one(self.db)
            .await?;

        Ok(user_type.map(UserType::from_entity))
    }

    pub async fn create(
        &self,
        type_name: &str,
        surcharge_factor: f64,
        description: Option<String>,
    ) -> Result<UserType, DbErr> {
        let now = Utc::now();
        let user_type = entity::user_type::ActiveModel {
            type_name: ActiveValue::Set(type_name.to_string()),
            description: ActiveValue::Set(description),
            surcharge_factor: ActiveValue::Set(surcharge_factor),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(UserType::from_entity(user_type))
    }
}
