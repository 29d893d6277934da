// Start of file: /src/config/environment.rs

// * Environment configuration loaded from the process and an optional .env file.
// * Every variable has a default so a bare checkout starts in development.

use std::{borrow::Cow, collections::HashMap, fmt, str::FromStr};
// * anyhow for convenient error handling
use anyhow::{anyhow, Context, Result};
use tracing::warn;

// ! Default values for environment variables (used if variables aren't set):
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PROTOCOL: &str = "http";
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_PASSWORD: &str = "postgres";
const DEFAULT_DB_NAME: &str = "case_manager";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_BODY_SIZE: usize = 2_097_152; // 2MB
const DEFAULT_TIMEOUT: u64 = 5; // 5 seconds
const DEFAULT_DB_PORT: u16 = 5432; // Default Postgres port
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Which storage implementation backs the service.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "memory" => Ok(Self::Memory),
            other => Err(anyhow!("Unknown STORAGE_BACKEND '{other}' (expected 'postgres' or 'memory')")),
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => f.write_str("postgres"),
            Self::Memory => f.write_str("memory"),
        }
    }
}

// * A struct containing all environment variables used by the app
#[derive(Clone, Debug)]
pub struct EnvironmentVariables {
    pub environment: Cow<'static, str>,
    pub host: Cow<'static, str>,
    pub port: u16,
    pub protocol: Cow<'static, str>,
    pub max_request_body_size: usize,
    pub default_timeout_seconds: u64,
    pub storage_backend: StorageBackend,
    pub db_host: Cow<'static, str>,
    pub db_port: u16,
    pub db_user: Cow<'static, str>,
    pub db_password: Cow<'static, str>,
    pub db_name: Cow<'static, str>,
    pub db_max_connections: u32,
    pub static_dir: Cow<'static, str>,
}

impl Default for EnvironmentVariables {
    fn default() -> Self {
        Self {
            environment: Cow::Borrowed(DEFAULT_ENVIRONMENT),
            host: Cow::Borrowed(DEFAULT_HOST),
            port: DEFAULT_PORT,
            protocol: Cow::Borrowed(DEFAULT_PROTOCOL),
            max_request_body_size: DEFAULT_MAX_BODY_SIZE,
            default_timeout_seconds: DEFAULT_TIMEOUT,
            storage_backend: StorageBackend::Postgres,
            db_host: Cow::Borrowed(DEFAULT_DB_HOST),
            db_port: DEFAULT_DB_PORT,
            db_user: Cow::Borrowed(DEFAULT_DB_USER),
            db_password: Cow::Borrowed(DEFAULT_DB_PASSWORD),
            db_name: Cow::Borrowed(DEFAULT_DB_NAME),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            static_dir: Cow::Borrowed(DEFAULT_STATIC_DIR),
        }
    }
}

impl EnvironmentVariables {
    // * Loads environment variables from the process (and .env outside production).
    pub fn load() -> Result<Self> {
        // ? In non-production environments, attempt to load .env
        if std::env::var("ENVIRONMENT").unwrap_or_default() != "production" {
            dotenv::dotenv().ok();
        }

        let vars: HashMap<String, String> = std::env::vars().collect();
        Self::from_vars(&vars)
    }

    // * Builds the configuration from an explicit key/value map, providing defaults if missing
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let get_var = |key: &str| vars.get(key).map(String::as_str);
        let defaults: Self = Self::default();

        Ok(Self {
            environment: get_var("ENVIRONMENT")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or_else(|| {
                    warn!("Missing ENVIRONMENT, defaulting to '{DEFAULT_ENVIRONMENT}'");
                    defaults.environment.clone()
                }),

            host: get_var("HOST")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(defaults.host),

            port: get_var("PORT")
                .map(|s| s.parse().context("Invalid PORT value"))
                .transpose()?
                .unwrap_or(DEFAULT_PORT),

            protocol: get_var("PROTOCOL")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(defaults.protocol),

            max_request_body_size: get_var("MAX_REQUEST_BODY_SIZE")
                .map(|s| s.parse().context("Invalid MAX_REQUEST_BODY_SIZE"))
                .transpose()?
                .unwrap_or(DEFAULT_MAX_BODY_SIZE),

            default_timeout_seconds: get_var("DEFAULT_TIMEOUT_SECONDS")
                .map(|s| s.parse().context("Invalid DEFAULT_TIMEOUT_SECONDS"))
                .transpose()?
                .unwrap_or(DEFAULT_TIMEOUT),

            storage_backend: get_var("STORAGE_BACKEND")
                .map(str::parse)
                .transpose()?
                .unwrap_or(defaults.storage_backend),

            db_host: get_var("DB_HOST")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or_else(|| {
                    warn!("Missing DB_HOST, defaulting to '{DEFAULT_DB_HOST}'");
                    defaults.db_host.clone()
                }),

            db_port: get_var("DB_PORT")
                .map(|s| s.parse().context("Invalid DB_PORT"))
                .transpose()?
                .unwrap_or(DEFAULT_DB_PORT),

            db_user: get_var("DB_USER")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or_else(|| {
                    warn!("Missing DB_USER, defaulting to '{DEFAULT_DB_USER}'");
                    defaults.db_user.clone()
                }),

            db_password: get_var("DB_PASSWORD")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or_else(|| {
                    warn!("Missing DB_PASSWORD, defaulting to '{DEFAULT_DB_PASSWORD}'");
                    defaults.db_password.clone()
                }),

            db_name: get_var("DB_NAME")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(defaults.db_name),

            db_max_connections: get_var("DB_MAX_CONNECTIONS")
                .map(|s| s.parse().context("Invalid DB_MAX_CONNECTIONS"))
                .transpose()?
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),

            static_dir: get_var("STATIC_DIR")
                .map(|s| Cow::Owned(s.into()))
                .unwrap_or(defaults.static_dir),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}


// End of file: /src/config/environment.rs
