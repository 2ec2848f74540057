use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Minimum signing secret length (256 bits for HS256).
pub const MIN_JWT_SECRET_BYTES: usize = 32;

/// Application configuration for folio-service.
///
/// Loaded from configuration files with environment variable overrides.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    pub image_host: ImageHostConfig,
}

/// PostgreSQL database configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

/// HTTP server configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

/// JWT signing configuration.
///
/// There is deliberately no default secret.
#[derive(Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
}

impl std::fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// External image host (Cloudinary unsigned upload) configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct ImageHostConfig {
    pub upload_url: String,
    pub upload_preset: String,
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

fn default_max_connections() -> u32 {
    5
}

fn default_max_upload_bytes() -> usize {
    5 * 1024 * 1024
}

impl Config {
    /// Load configuration from files with environment variable overrides.
    ///
    /// # Configuration Priority (highest to lowest)
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    ///
    /// # Errors
    /// Fails if a required key is missing or the signing secret is unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Unprefixed: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::default().separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject configurations the service must not start with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let secret = self.jwt.secret.trim();
        if secret.is_empty() {
            return Err(ConfigError::Message(
                "jwt.secret is not set; refusing to start without a signing secret".to_string(),
            ));
        }
        if secret.len() < MIN_JWT_SECRET_BYTES {
            return Err(ConfigError::Message(format!(
                "jwt.secret must be at least {} bytes, got {}",
                MIN_JWT_SECRET_BYTES,
                secret.len()
            )));
        }
        if self.image_host.max_upload_bytes == 0 {
            return Err(ConfigError::Message(
                "image_host.max_upload_bytes must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
