use std::env;
use std::fmt::Display;
use std::str::FromStr;

use crate::log_info;
use crate::shared::errors::AppError;

/// Runtime configuration loaded from the environment at startup.
/// `dotenvy` has already populated the process env by the time this runs.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub jwt_secret: String,
    pub upload_dir: String,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            port: try_load("PORT", "5000")?,
            jwt_secret: require("JWT_SECRET")?,
            upload_dir: try_load("UPLOAD_DIR", "uploads")?,
        })
    }
}

fn require(key: &str) -> Result<String, AppError> {
    env::var(key)
        .map_err(|_| AppError::InternalError(format!("{} environment variable not found", key)))
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, AppError>
where
    T::Err: Display,
{
    let raw = env::var(key).unwrap_or_else(|_| {
        log_info!("{} not set, using default: {}", key, default);
        default.to_string()
    });

    raw.parse()
        .map_err(|e| AppError::InternalError(format!("Invalid {} value: {}", key, e)))
}
