use std::env;
use std::time::Duration;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    #[serde(default)]
    pub jwt: JwtConfig,
    #[serde(default)]
    pub monitoring: MonitoringConfig,
}

/// Which user repository adapter the process runs against.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
    pub grpc_port: u16,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    #[serde(default)]
    pub secret: String,
    #[serde(default = "default_expiration_hours")]
    pub expiration_hours: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expiration_hours: default_expiration_hours(),
        }
    }
}

impl JwtConfig {
    /// Token lifetime, checked against `1..=MAX_EXPIRATION_HOURS`.
    pub fn token_lifetime(&self) -> Result<chrono::Duration, ConfigError> {
        if !(1..=MAX_EXPIRATION_HOURS).contains(&self.expiration_hours) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_hours must be between 1 and {}, got {}",
                MAX_EXPIRATION_HOURS, self.expiration_hours
            )));
        }

        chrono::Duration::try_hours(self.expiration_hours).ok_or_else(|| {
            ConfigError::Message(format!(
                "jwt.expiration_hours out of range: {}",
                self.expiration_hours
            ))
        })
    }
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_hours", &self.expiration_hours)
            .finish()
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct MonitoringConfig {
    #[serde(default = "default_user_count_interval_secs")]
    pub user_count_interval_secs: u64,
}

impl Default for MonitoringConfig {
    fn default() -> Self {
        Self {
            user_count_interval_secs: default_user_count_interval_secs(),
        }
    }
}

impl MonitoringConfig {
    pub fn user_count_interval(&self) -> Duration {
        Duration::from_secs(self.user_count_interval_secs.max(1))
    }
}

/// One year.
pub const MAX_EXPIRATION_HOURS: i64 = 24 * 365;

fn default_max_connections() -> u32 {
    5
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_expiration_hours() -> i64 {
    auth::DEFAULT_TOKEN_LIFETIME_HOURS
}

fn default_user_count_interval_secs() -> u64 {
    10
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (USER_SERVICE_DATABASE__URL, USER_SERVICE_JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{RUN_MODE}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(
                Environment::with_prefix("USER_SERVICE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Self::from_source(configuration)
    }

    /// Deserialize and check an already-layered configuration.
    pub fn from_source(configuration: ConfigBuilder) -> Result<Self, ConfigError> {
        let config: Config = configuration.try_deserialize()?;
        config.jwt.token_lifetime()?;

        Ok(config)
    }
}
