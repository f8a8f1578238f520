use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";
const DEFAULT_ADMIN_EMAIL: &str = "admin@hotel.local";

pub struct Config {
    pub database_url: String,
    pub bind_address: SocketAddr,

    /// Email of the administrator account created by the seeder.
    pub admin_email: String,
    /// Only needed when the seeder has to create the administrator.
    pub admin_password: Option<String>,

    /// Allowed origin for browser clients, CORS stays closed when unset.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let bind_address = optional_var("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: bind_address
                .parse()
                .map_err(|_| ConfigError::InvalidEnvVar {
                    name: "BIND_ADDRESS".to_string(),
                    value: bind_address.clone(),
                })?,
            admin_email: optional_var("ADMIN_EMAIL")
                .unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_string()),
            admin_password: optional_var("ADMIN_PASSWORD"),
            cors_origin: optional_var("CORS_ORIGIN"),
        })
    }
}

/// Reads an environment variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
