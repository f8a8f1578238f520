//! Configuration domain model.

use chrono::{DateTime, Utc};

use crate::model::configuration::ConfigurationDto;

/// Named numeric setting, e.g. `surcharge_rate`.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub id: i32,
    pub config_name: String,
    pub config_value: f64,
    pub updated_at: DateTime<Utc>,
}

impl Configuration {
    pub fn from_entity(entity: entity::configuration::Model) -> Self {
        Self {
            id: entity.id,
            config_name: entity.config_name,
            config_value: entity.config_value,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ConfigurationDto {
        ConfigurationDto {
            id: self.id,
            config_name: self.config_name,
            config_value: self.config_value,
            updated_at: self.updated_at,
        }
    }
}
