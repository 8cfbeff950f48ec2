use std::{env, time::Duration};

use crate::modules::auth::{
    adapter::outgoing::security::argon2_hasher::Argon2Hasher,
    application::domain::entities::AdminCredentials,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    pub run_migrations: bool,
}

/// Process configuration, read once at startup. JWT settings live in `JwtConfig`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub admin: AdminCredentials,
    pub cors_origins: AllowedOrigins,
    pub static_assets_dir: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value `{value}`")]
    Invalid { key: &'static str, value: String },

    #[error("ADMIN_PASSWORD_HASH is not an argon2 PHC string")]
    InvalidPasswordHash,

    #[error("DB_MIN_CONNECTIONS ({min}) exceeds DB_MAX_CONNECTIONS ({max})")]
    PoolBounds { min: u32, max: u32 },
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let url = required("DATABASE_URL")?;
        let username = required("ADMIN_USERNAME")?;
        let password_hash = required("ADMIN_PASSWORD_HASH")?;
        if !Argon2Hasher::is_valid_hash(&password_hash) {
            return Err(ConfigError::InvalidPasswordHash);
        }

        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 20u32)?;
        let min_connections = parse_or(&lookup, "DB_MIN_CONNECTIONS", 2u32)?;
        if min_connections > max_connections {
            return Err(ConfigError::PoolBounds {
                min: min_connections,
                max: max_connections,
            });
        }

        let connect_timeout = Duration::from_secs(parse_or(&lookup, "DB_CONNECT_TIMEOUT_SECS", 5u64)?);
        let run_migrations = parse_flag(&lookup, "RUN_MIGRATIONS")?;

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 3000u16)?,
            database: DatabaseConfig {
                url,
                max_connections,
                min_connections,
                connect_timeout,
                run_migrations,
            },
            admin: AdminCredentials {
                username,
                password_hash,
            },
            cors_origins: parse_origins(lookup("CORS_ALLOWED_ORIGINS").as_deref()),
            static_assets_dir: lookup("STATIC_ASSETS_DIR")
                .unwrap_or_else(|| "public/images".to_string()),
        })
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

fn parse_flag<F>(lookup: &F, key: &'static str) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(false),
        Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" | "" => Ok(false),
            _ => Err(ConfigError::Invalid { key, value: raw }),
        },
    }
}

fn parse_origins(raw: Option<&str>) -> AllowedOrigins {
    let raw = raw.map(str::trim).unwrap_or("*");
    if raw.is_empty() || raw == "*" {
        return AllowedOrigins::Any;
    }

    AllowedOrigins::List(
        raw.split(',')
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(|o| o.trim_end_matches('/').to_string())
            .collect(),
    )
}
