use crate::error::{config::ConfigError, AppError};

const DEFAULT_UPLOAD_DIR: &str = "public";
const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:4000";

pub struct Config {
    pub database_url: String,
    pub token_secret: String,

    pub upload_dir: String,
    pub listen_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            token_secret: std::env::var("TOKEN_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("TOKEN_SECRET".to_string()))?,
            upload_dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| DEFAULT_UPLOAD_DIR.to_string()),
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
        })
    }
}
