use actix_cors::Cors;
use std::env;

use crate::error::AppError;

/// `DATABASE_URL` value that selects the in-process store.
pub const MEMORY_DATABASE_URL: &str = "memory";

/// Upper bound on `TOKEN_TTL_DAYS`.
pub const MAX_TOKEN_TTL_DAYS: i64 = 3650;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub token_ttl_days: i64,
    pub cookie_secure: bool,
    pub bcrypt_cost: u32,
    pub client_url: Option<String>,
    pub server_port: u16,
    pub server_host: String,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds configuration from any key lookup. Unset and empty values are treated alike.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Ok(Self {
            database_url: get("DATABASE_URL").ok_or_else(|| missing("DATABASE_URL"))?,
            database_max_connections: parse_or(&get, "DATABASE_MAX_CONNECTIONS", 5)?,
            jwt_secret: get("JWT_SECRET").ok_or_else(|| missing("JWT_SECRET"))?,
            token_ttl_days: parse_or(&get, "TOKEN_TTL_DAYS", 5)?,
            cookie_secure: parse_or(&get, "COOKIE_SECURE", true)?,
            bcrypt_cost: parse_or(&get, "BCRYPT_COST", bcrypt::DEFAULT_COST)?,
            client_url: get("CLIENT_URL"),
            server_port: parse_or(&get, "SERVER_PORT", 8080)?,
            server_host: get("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
        })
        .and_then(Self::validated)
    }

    fn validated(self) -> Result<Self, AppError> {
        if !(4..=31).contains(&self.bcrypt_cost) {
            return Err(AppError::Configuration(
                "BCRYPT_COST must be between 4 and 31".into(),
            ));
        }
        if !(1..=MAX_TOKEN_TTL_DAYS).contains(&self.token_ttl_days) {
            return Err(AppError::Configuration(format!(
                "TOKEN_TTL_DAYS must be between 1 and {}",
                MAX_TOKEN_TTL_DAYS
            )));
        }
        if self.database_max_connections == 0 {
            return Err(AppError::Configuration(
                "DATABASE_MAX_CONNECTIONS must be positive".into(),
            ));
        }
        Ok(self)
    }

    pub fn uses_memory_store(&self) -> bool {
        self.database_url == MEMORY_DATABASE_URL
    }

    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.server_host, self.server_port)
    }

    /// CORS policy: the configured client origin with credentials, or no cross-origin access.
    pub fn cors(&self) -> Cors {
        match &self.client_url {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .supports_credentials()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600),
            None => Cors::default(),
        }
    }
}

fn missing(key: &str) -> AppError {
    AppError::Configuration(format!("{} must be set", key))
}

fn parse_or<T, G>(get: &G, key: &str, default: T) -> Result<T, AppError>
where
    T: std::str::FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        Some(raw) => raw
            .parse()
            .map_err(|_| AppError::Configuration(format!("{} has an invalid value", key))),
        None => Ok(default),
    }
}
