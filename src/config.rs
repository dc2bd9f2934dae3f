use std::{env, fmt::Display, net::SocketAddr, str::FromStr, time::Duration};

use dotenvy::dotenv;
use tracing::{info, warn};

use crate::utils::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("unknown store backend '{other}'")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MongoConfig {
    pub url: Option<String>,
    pub db_name: String,
    pub max_pool_size: u32,
    /// Used for both connect and server selection.
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: SocketAddr,
    /// `None` allows any origin.
    pub cors_origin: Option<String>,
    pub store_backend: StoreBackend,
    pub mongo: MongoConfig,
}

impl Config {
    /// Reads `.env` if present, then the process environment.
    pub fn load() -> AppResult<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs: u64 = try_load(&lookup, "MONGO_TIMEOUT_SECS", "5")?;

        Ok(Self {
            server_addr: try_load(&lookup, "SERVER_ADDR", "0.0.0.0:8000")?,
            cors_origin: lookup("CORS_ORIGIN").filter(|origin| !origin.trim().is_empty()),
            store_backend: try_load(&lookup, "STORE_BACKEND", "mongo")?,
            mongo: MongoConfig {
                url: lookup("MONGO_URL"),
                db_name: try_load(&lookup, "DB_NAME", "swadeshi_hind")?,
                max_pool_size: try_load(&lookup, "MONGO_MAX_POOL_SIZE", "10")?,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

fn try_load<F, T>(lookup: &F, key: &str, default: &str) -> AppResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    let raw = lookup(key).unwrap_or_else(|| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    raw.parse().map_err(|e| {
        warn!("Invalid {key} value: {e}");
        AppError::ConfigError(format!("invalid {key} value '{raw}': {e}"))
    })
}
