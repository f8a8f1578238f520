//! Configuration repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter, QueryOrder,
};

use crate::server::model::configuration::Configuration;

pub struct ConfigurationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConfigurationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, config_name: &str, config_value: f64) -> Result<Configuration, DbErr> {
        let now = Utc::now();
        let configuration = entity::configuration::ActiveModel {
            config_name: ActiveValue::Set(config_name.to_string()),
            config_value: ActiveValue::Set(config_value),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Configuration::from_entity(configuration))
    }

    pub async fn find_all(&self) -> Result<Vec<Configuration>, DbErr> {
        let configurations = entity::prelude::Configuration::find()
            .order_by_asc(entity::configuration::Column::Id)
            .all(self.db)
            .await?;

        Ok(configurations
            .into_iter()
            .map(Configuration::from_entity)
            .collect())
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Configuration>, DbErr> {
        let configuration = entity::prelude::Configuration::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(configuration.map(Configuration::from_entity))
    }

    pub async fn find_by_name(&self, config_name: &str) -> Result<Option<Configuration>, DbErr> {
        let configuration = entity::prelude::Configuration::find()
            .filter(entity::configuration::Column::ConfigName.eq(config_name))
            .one(self.db)
            .await?;

        Ok(configuration.map(Configuration::from_entity))
    }

    /// Sets the value of a configuration.
    ///
    /// # Returns
    /// - `Ok(Some(Configuration))` - Updated configuration
    /// - `Ok(None)` - No configuration with this id
    /// - `Err(DbErr)` - Database error
    pub async fn update_value(
        &self,
        id: i32,
        config_value: f64,
    ) -> Result<Option<Configuration>, DbErr> {
        let Some(configuration) = entity::prelude::Configuration::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active = configuration.into_active_model();
        active.config_value = ActiveValue::Set(config_value);
        active.updated_at = ActiveValue::Set(Utc::now());

        let configuration = active.update(self.db).await?;

        Ok(Some(Configuration::from_entity(configuration)))
    }
}
