/**
 * Server Configuration
 *
 * This module loads the process-wide configuration once at startup. The
 * resulting `Config` is immutable and handed to the components that need it
 * through `AppState`; nothing reads the environment after startup.
 *
 * # Configuration Sources
 *
 * Values come from environment variables (after `.env` is loaded by `main`),
 * with development defaults for anything unset.
 *
 * | Variable | Default |
 * |---|---|
 * | `DATABASE_URL` | `sqlite://cinescope.db?mode=rwc` |
 * | `SECRET_KEY` | `your-secret-key-for-dev` |
 * | `TMDB_API_KEY` (or `VITE_TMDB_API_KEY`) | empty |
 * | `TMDB_BASE_URL` | `https://api.themoviedb.org/3` |
 * | `ACCESS_TOKEN_EXPIRE_MINUTES` | 1440 (at most 525600) |
 * | `BCRYPT_COST` | 12 |
 * | `SERVER_HOST` / `SERVER_PORT` | `0.0.0.0` / 8000 |
 */

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;

use thiserror::Error;

use crate::backend::auth::sessions::{DEFAULT_TOKEN_TTL_MINUTES, MAX_TOKEN_TTL_MINUTES};

pub const DEFAULT_DATABASE_URL: &str = "sqlite://cinescope.db?mode=rwc";
pub const DEFAULT_SECRET_KEY: &str = "your-secret-key-for-dev";
pub const DEFAULT_TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_PORT: u16 = 8000;

/// Work factors bcrypt accepts
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    /// sqlx connection string
    pub database_url: String,
    /// HMAC secret for signing tokens
    pub secret_key: String,
    /// Key appended to every TMDB request
    pub tmdb_api_key: String,
    /// TMDB API root, without trailing slash
    pub tmdb_base_url: String,
    /// Lifetime of tokens issued at login
    pub token_ttl_minutes: i64,
    /// bcrypt work factor
    pub bcrypt_cost: u32,
    pub host: IpAddr,
    pub port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &self.database_url)
            .field("tmdb_base_url", &self.tmdb_base_url)
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("host", &self.host)
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}

impl Config {
    /// Create a new ConfigBuilder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Config::builder();

        if let Some(url) = lookup("DATABASE_URL") {
            builder = builder.database_url(url);
        }

        match lookup("SECRET_KEY") {
            Some(secret) => builder = builder.secret_key(secret),
            None => tracing::warn!("SECRET_KEY not set, using the development key"),
        }

        match lookup("TMDB_API_KEY").or_else(|| lookup("VITE_TMDB_API_KEY")) {
            Some(key) => builder = builder.tmdb_api_key(key),
            None => tracing::warn!("TMDB_API_KEY not set, TMDB requests will be rejected upstream"),
        }

        if let Some(url) = lookup("TMDB_BASE_URL") {
            builder = builder.tmdb_base_url(url);
        }
        if let Some(raw) = lookup("ACCESS_TOKEN_EXPIRE_MINUTES") {
            builder = builder.token_ttl_minutes(parse_var("ACCESS_TOKEN_EXPIRE_MINUTES", raw)?);
        }
        if let Some(raw) = lookup("BCRYPT_COST") {
            builder = builder.bcrypt_cost(parse_var("BCRYPT_COST", raw)?);
        }
        if let Some(raw) = lookup("SERVER_HOST") {
            builder = builder.host(parse_var("SERVER_HOST", raw)?);
        }
        if let Some(raw) = lookup("SERVER_PORT") {
            builder = builder.port(parse_var("SERVER_PORT", raw)?);
        }

        builder.build()
    }

    /// Address the HTTP server binds to
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_var<T: FromStr>(key: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value: raw })
}

/// Builder for Config
#[derive(Debug)]
pub struct ConfigBuilder {
    database_url: String,
    secret_key: String,
    tmdb_api_key: String,
    tmdb_base_url: String,
    token_ttl_minutes: i64,
    bcrypt_cost: u32,
    host: IpAddr,
    port: u16,
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            secret_key: DEFAULT_SECRET_KEY.to_string(),
            tmdb_api_key: String::new(),
            tmdb_base_url: DEFAULT_TMDB_BASE_URL.to_string(),
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl ConfigBuilder {
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database_url = url.into();
        self
    }

    pub fn secret_key(mut self, secret: impl Into<String>) -> Self {
        self.secret_key = secret.into();
        self
    }

    pub fn tmdb_api_key(mut self, key: impl Into<String>) -> Self {
        self.tmdb_api_key = key.into();
        self
    }

    pub fn tmdb_base_url(mut self, url: impl Into<String>) -> Self {
        self.tmdb_base_url = url.into();
        self
    }

    pub fn token_ttl_minutes(mut self, minutes: i64) -> Self {
        self.token_ttl_minutes = minutes;
        self
    }

    pub fn bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    pub fn host(mut self, host: IpAddr) -> Self {
        self.host = host;
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Validate and build the configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        if self.secret_key.is_empty() {
            return Err(ConfigError::MissingValue("SECRET_KEY"));
        }
        if !(1..=MAX_TOKEN_TTL_MINUTES).contains(&self.token_ttl_minutes) {
            return Err(ConfigError::InvalidValue {
                key: "ACCESS_TOKEN_EXPIRE_MINUTES",
                value: self.token_ttl_minutes.to_string(),
            });
        }
        if !BCRYPT_COST_RANGE.contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: self.bcrypt_cost.to_string(),
            });
        }

        Ok(Config {
            database_url: self.database_url,
            secret_key: self.secret_key,
            tmdb_api_key: self.tmdb_api_key,
            tmdb_base_url: self.tmdb_base_url.trim_end_matches('/').to_string(),
            token_ttl_minutes: self.token_ttl_minutes,
            bcrypt_cost: self.bcrypt_cost,
            host: self.host,
            port: self.port,
        })
    }
}
