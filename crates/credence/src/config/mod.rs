use std::env;
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

fn env_or(key: &str, fallback: &str) -> String {
    env::var(key).unwrap_or_else(|_| fallback.to_string())
}

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn detect() -> Self {
        match env_or("APP_ENV", "development")
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application, assembled from environment
/// variables with a `.env` file honored when present.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            environment: AppEnvironment::detect(),
            server: ServerConfig::from_env()?,
            telemetry: TelemetryConfig::from_env(),
            storage: StorageConfig::from_env(),
        })
    }
}

/// Settings controlling the HTTP server binding.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let host = env_or("APP_HOST", "127.0.0.1");
        let raw_port = env_or("APP_PORT", "3000");
        let port = raw_port
            .parse::<u16>()
            .map_err(|_| ConfigError::Port { value: raw_port })?;

        Ok(Self { host, port })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip = if self.host.eq_ignore_ascii_case("localhost") {
            IpAddr::from([127, 0, 0, 1])
        } else {
            self.host.parse().map_err(|source| ConfigError::Host {
                value: self.host.clone(),
                source,
            })?
        };

        Ok(SocketAddr::new(ip, self.port))
    }
}

/// Tracing and metrics controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl TelemetryConfig {
    fn from_env() -> Self {
        Self {
            log_level: env_or("APP_LOG_LEVEL", "info"),
        }
    }
}

/// Locations of the resource catalog file and the upload scratch directory.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub resources_path: PathBuf,
    pub upload_dir: PathBuf,
}

impl StorageConfig {
    fn from_env() -> Self {
        Self {
            resources_path: PathBuf::from(env_or("APP_RESOURCES", "config/resources.json")),
            upload_dir: PathBuf::from(env_or("APP_UPLOAD_DIR", "uploads")),
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Port { value: String },
    Host { value: String, source: std::net::AddrParseError },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Port { value } => {
                write!(f, "APP_PORT '{value}' is not a valid port number")
            }
            ConfigError::Host { value, .. } => {
                write!(f, "APP_HOST '{value}' is not an IP address or 'localhost'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Port { .. } => None,
            ConfigError::Host { source, .. } => Some(source),
        }
    }
}
