//! Database connection management
//!
//! The store is an embedded SQLite database reached through `sqlx`. The pool
//! is configured from the environment (`DATABASE_URL` and friends) with
//! local-development defaults.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Database operation errors with contextual information
#[derive(Error, Debug)]
pub enum DbError {
    /// SQL query or connection error
    #[error("Database query failed: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Database configuration is invalid or missing
    #[error("Database configuration error: {0}. Check DATABASE_URL and connection settings.")]
    Config(String),
}

impl DbError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

pub type DbResult<T> = Result<T, DbError>;

/// Default database URL for local development.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://biogrid.db";

#[derive(Debug, Clone)]
pub struct DbConfig {
    pub url: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
    /// Create the database file on first connect if it does not exist
    pub create_if_missing: bool,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: 5,
            connect_timeout_secs: 30,
            create_if_missing: true,
        }
    }
}

impl DbConfig {
    /// Load configuration from environment variables, falling back to the
    /// local-development defaults
    pub fn from_env() -> DbResult<Self> {
        let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        let connect_timeout_secs = std::env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        let config = Self {
            url,
            max_connections,
            connect_timeout_secs,
            create_if_missing: true,
        };
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> DbResult<()> {
        if self.url.is_empty() {
            return Err(DbError::config("Database URL cannot be empty"));
        }

        if self.max_connections == 0 {
            return Err(DbError::config("max_connections must be greater than 0"));
        }

        Ok(())
    }
}

/// Create a connection pool from configuration
///
/// Foreign-key enforcement is switched on for every connection; the insert
/// order used by the import pipeline (organisms, proteins, interactions)
/// depends on it to surface reference violations early.
pub async fn create_pool(config: &DbConfig) -> DbResult<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(config.create_if_missing)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .connect_with(options)
        .await?;

    tracing::info!(
        url = %config.url,
        max_connections = config.max_connections,
        "Database connection pool created"
    );

    Ok(pool)
}

pub async fn health_check(pool: &SqlitePool) -> DbResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
        .map_err(DbError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DbConfig::default();
        assert_eq!(config.url, DEFAULT_DATABASE_URL);
        assert_eq!(config.max_connections, 5);
        assert!(config.create_if_missing);
    }

    #[test]
    fn test_validate_rejects_empty_url() {
        let config = DbConfig {
            url: String::new(),
            ..DbConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_connections() {
        let config = DbConfig {
            max_connections: 0,
            ..DbConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[tokio::test]
    async fn test_in_memory_pool_health() {
        let config = DbConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            ..DbConfig::default()
        };
        let pool = create_pool(&config).await.unwrap();
        health_check(&pool).await.unwrap();
    }
}
