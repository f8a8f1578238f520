//! Role repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::role::RoleName;

pub struct RoleRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RoleRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Finds a live role by name.
    pub async fn find_by_name(
        &self,
        role_name: RoleName,
    ) -> Result<Option<entity::role::Model>, DbErr> {
        entity::prelude::Role::find()
            .filter(entity::role::Column::RoleName.eq(role_name.as_str()))
            .filter(entity::role::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Inserts a role.
    ///
    /// # Returns
    /// - `Ok(Model)` - The created role
    /// - `Err(DbErr)` - Insert failed, e.g. the name already exists
    pub async fn create(
        &self,
        role_name: RoleName,
        description: Option<String>,
    ) -> Result<entity::role::Model, DbErr> {
        let now = Utc::now();
        entity::role::ActiveModel {
            role_name: ActiveValue::Set(role_name.as_str().to_string()),
            description: ActiveValue::Set(description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            deleted_at: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
