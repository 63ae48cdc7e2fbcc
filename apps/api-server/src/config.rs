//! Application configuration loaded from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use folio_infra::DatabaseConfig;

use crate::telemetry::TelemetryConfig;

/// Origin of the static site that consumes this API.
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://kabu03.github.io";

/// Cross-origin policy for browser clients.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Shared password for write requests. Writes are refused when unset.
    pub secret_pw: Option<String>,
    pub cors: CorsConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let database = lookup("DATABASE_URL")
            .filter(|url| !url.is_empty())
            .map(|url| DatabaseConfig {
                url,
                max_connections: parse(lookup("DB_MAX_CONNECTIONS")).unwrap_or(10),
                min_connections: parse(lookup("DB_MIN_CONNECTIONS")).unwrap_or(1),
                connect_timeout: Duration::from_secs(
                    parse(lookup("DB_CONNECT_TIMEOUT_SECS")).unwrap_or(5),
                ),
            });

        Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse(lookup("PORT")).unwrap_or(3000),
            database,
            secret_pw: lookup("SECRET_PW").filter(|pw| !pw.is_empty()),
            cors: CorsConfig {
                allowed_origin: lookup("CORS_ALLOWED_ORIGIN")
                    .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
            },
            telemetry: TelemetryConfig {
                json_logs: lookup("LOG_FORMAT")
                    .map(|v| v.to_lowercase() == "json")
                    .unwrap_or(false),
                service_name: lookup("SERVICE_NAME").unwrap_or_else(|| "folio-api".to_string()),
            },
        }
    }
}

fn parse<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.parse().ok())
}
