use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// HS256 wants at least 256 bits of key material.
const MIN_SECRET_BYTES: usize = 32;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub mail: MailConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    /// Signing secret. No default: the process refuses to start without one.
    pub secret: String,

    #[serde(default = "default_access_ttl_minutes")]
    pub access_ttl_minutes: i64,

    #[serde(default = "default_refresh_ttl_days")]
    pub refresh_ttl_days: i64,

    #[serde(default = "default_confirmation_ttl_hours")]
    pub confirmation_ttl_hours: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct MailConfig {
    /// Base URL embedded in confirmation links.
    pub base_url: String,
}

fn default_access_ttl_minutes() -> i64 {
    15
}

fn default_refresh_ttl_days() -> i64 {
    7
}

fn default_confirmation_ttl_hours() -> i64 {
    72
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            // Start with default configuration
            .add_source(File::with_name("config/default").required(false))
            // Layer on environment-specific configuration
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Layer on environment variables (with __ as separator)
            // Example: DATABASE__URL=postgres://... overrides database.url
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject configurations that must never reach production: a missing
    /// secret fails deserialization above, a weak one fails here.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.len() < MIN_SECRET_BYTES {
            return Err(ConfigError::Message(format!(
                "jwt.secret must be at least {} bytes, got {}",
                MIN_SECRET_BYTES,
                self.jwt.secret.len()
            )));
        }

        if self.jwt.access_ttl_minutes <= 0
            || self.jwt.refresh_ttl_days <= 0
            || self.jwt.confirmation_ttl_hours <= 0
        {
            return Err(ConfigError::Message(
                "jwt TTLs must be positive".to_string(),
            ));
        }

        Ok(())
    }
}
