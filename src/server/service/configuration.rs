use sea_orm::ConnectionTrait;

use crate::server::{
    data::configuration::ConfigurationRepository,
    error::AppError,
    model::{
        configuration::Configuration,
        pricing::{PricingRules, MAX_GUESTS_PER_ROOM, SURCHARGE_GUEST_THRESHOLD, SURCHARGE_RATE},
    },
};

pub struct ConfigurationService<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConfigurationService<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn find_all(&self) -> Result<Vec<Configuration>, AppError> {
        Ok(ConfigurationRepository::new(self.db).find_all().await?)
    }

    pub async fn find_one(&self, id: i32) -> Result<Configuration, AppError> {
        ConfigurationRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Configuration with id '{}' not found.", id))
            })
    }

    /// Changes a configuration value.
    ///
    /// # Returns
    /// - `Ok(Configuration)` - The updated configuration
    /// - `Err(AppError::NotFound)` - No configuration with this id
    /// - `Err(AppError::BadRequest)` - Value is not a finite, non-negative number
    pub async fn update(&self, id: i32, config_value: f64) -> Result<Configuration, AppError> {
        self.find_one(id).await?;

        if !config_value.is_finite() || config_value < 0.0 {
            return Err(AppError::BadRequest(
                "Configuration value must be a non-negative number.".to_string(),
            ));
        }

        let configuration = ConfigurationRepository::new(self.db)
            .update_value(id, config_value)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Configuration with id '{}' not found.", id))
            })?;

        tracing::info!(
            "Configuration {} set to {}",
            configuration.config_name,
            configuration.config_value
        );

        Ok(configuration)
    }

    pub async fn get_value(&self, config_name: &str) -> Result<Option<f64>, AppError> {
        Ok(ConfigurationRepository::new(self.db)
            .find_by_name(config_name)
            .await?
            .map(|configuration| configuration.config_value))
    }

    /// Current pricing rules; a rule missing from the table keeps its default.
    pub async fn pricing_rules(&self) -> Result<PricingRules, AppError> {
        let mut rules = PricingRules::default();

        for config_name in [MAX_GUESTS_PER_ROOM, SURCHARGE_GUEST_THRESHOLD, SURCHARGE_RATE] {
            if let Some(config_value) = self.get_value(config_name).await? {
                rules.set(config_name, config_value);
            }
        }

        Ok(rules)
    }
}
