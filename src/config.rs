use crate::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    /// Re-run the intake validation pipeline on updates. Off by default;
    /// see `ClientService::update_client`.
    pub validate_on_update: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let validate_on_update = match std::env::var("VALIDATE_ON_UPDATE") {
            Ok(value) => value.parse::<bool>().map_err(|_| {
                ConfigError::InvalidEnvVar {
                    name: "VALIDATE_ON_UPDATE".to_string(),
                    value,
                }
            })?,
            Err(_) => false,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_addr: std::env::var("BIND_ADDR")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string()),
            validate_on_update,
        })
    }
}
