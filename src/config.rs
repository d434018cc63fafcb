use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} not set")]
    Missing(&'static str),
    #[error("environment variable {0} is not a valid number")]
    Invalid(&'static str),
}

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub port: u16,
    pub db_url: String,
    pub auth: AuthConfig,
    pub uploads_dir: PathBuf,
}

#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub secret_key: String,
    pub token_ttl_minutes: i64,
    pub admin_password: String,
}

impl EnvConfig {
    fn get_env(key: &'static str) -> Result<String, ConfigError> {
        env::var(key).map_err(|_| ConfigError::Missing(key))
    }

    fn get_env_or(key: &'static str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    fn parse_env_or<T: std::str::FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
        match env::var(key) {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid(key)),
            Err(_) => Ok(default),
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        Ok(EnvConfig {
            port: Self::parse_env_or("PORT", 8000)?,
            db_url: Self::get_env("DATABASE_URL")?,
            auth: AuthConfig {
                secret_key: Self::get_env("SECRET_KEY")?,
                token_ttl_minutes: Self::parse_env_or("ACCESS_TOKEN_EXPIRE_MINUTES", 30)?,
                admin_password: Self::get_env_or("ADMIN_PASSWORD", "admin123"),
            },
            uploads_dir: PathBuf::from(Self::get_env_or("UPLOADS_DIR", "uploads")),
        })
    }
}
