//! Configuration module for shelter-service.

use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct ShelterConfig {
    pub common: core_config::Config,
    pub service_name: String,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    /// Create the schema on startup. Off for deployments that own their schema.
    pub run_migrations: bool,
}

impl ShelterConfig {
    pub fn from_env() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        let raw_url = env::var("DATABASE_URL")
            .map_err(|_| AppError::ConfigError(anyhow::anyhow!("DATABASE_URL is required")))?;

        Ok(Self {
            common,
            service_name: env::var("SERVICE_NAME")
                .unwrap_or_else(|_| "shelter-service".to_string()),
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.is_empty()),
            database: DatabaseConfig {
                url: normalize_database_url(&raw_url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(10),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(1),
                run_migrations: env::var("DATABASE_RUN_MIGRATIONS")
                    .ok()
                    .map(|s| parse_flag(&s))
                    .unwrap_or(false),
            },
        })
    }
}

/// Accept driver-qualified MySQL URLs (`mysql+pymysql://`, `mysql+mysqldb://`)
/// as handed out by some hosting providers.
pub fn normalize_database_url(raw: &str) -> String {
    let trimmed = raw.trim();
    match trimmed.split_once("://") {
        Some((scheme, rest)) if scheme.starts_with("mysql+") => format!("mysql://{}", rest),
        _ => trimmed.to_string(),
    }
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_qualified_mysql_url_is_normalized() {
        assert_eq!(
            normalize_database_url("mysql+pymysql://user:pw@db:3306/shelter"),
            "mysql://user:pw@db:3306/shelter"
        );
    }

    #[test]
    fn plain_urls_pass_through() {
        assert_eq!(
            normalize_database_url(" mysql://db/shelter "),
            "mysql://db/shelter"
        );
        assert_eq!(
            normalize_database_url("sqlite://shelter.db?mode=rwc"),
            "sqlite://shelter.db?mode=rwc"
        );
    }

    #[test]
    fn flags() {
        assert!(parse_flag("TRUE"));
        assert!(parse_flag("1"));
        assert!(!parse_flag("no"));
        assert!(!parse_flag(""));
    }
}
