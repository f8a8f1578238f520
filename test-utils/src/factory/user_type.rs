//! User type factory.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};

/// Name of the domestic guest type.
pub const LOCAL: &str = "local";

/// Name of the foreign guest type.
pub const FOREIGN: &str = "foreign";

/// Returns the user type with the given name, inserting it when missing.
///
/// The surcharge factor is only used when the type has to be created: `1.5` for
/// [`FOREIGN`] and `1.0` for anything else.
pub async fn find_or_create_user_type(
    db: &DatabaseConnection,
    type_name: &str,
) -> Result<entity::user_type::Model, DbErr> {
    if let Some(user_type) = entity::prelude::UserType::find()
        .filter(entity::user_type::Column::TypeName.eq(type_name))
        .one(db)
        .await?
    {
        return Ok(user_type);
    }

    let surcharge_factor = if type_name == FOREIGN { 1.5 } else { 1.0 };

    let now = Utc::now();
    entity::user_type::ActiveModel {
        type_name: ActiveValue::Set(type_name.to_string()),
        description: ActiveValue::Set(None),
        surcharge_factor: ActiveValue::Set(surcharge_factor),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        deleted_at: ActiveValue::Set(None),
        ..Default::default()
    }
    .insert(db)
    .await
}
