//! Role factory.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Name of the administrator role.
pub const ADMIN: &str = "admin";

/// Name of the regular guest role.
pub const USER: &str = "user";

/// Returns the role with the given name, inserting it when missing.
///
/// # Arguments
/// - `db` - Database connection
/// - `role_name` - Role name, usually [`ADMIN`] or [`USER`]
///
/// # Returns
/// - `Ok(entity::role::Model)` - Existing or created role
/// - `Err(DbErr)` - Database error during lookup or insert
pub async fn find_or_create_role(
    db: &DatabaseConnection,
    role_name: &str,
) -> Result<entity::role::Model, DbErr> {
    if let Some(role) = entity::prelude::Role::find()
        .filter(entity::role::Column::RoleName.eq(role_name))
        .one(db)
        .await?
    {
        return Ok(role);
    }

    let now = Utc::now();
    entity::role::ActiveModel {
        role_name: ActiveValue::Set(role_name.to_string()),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
