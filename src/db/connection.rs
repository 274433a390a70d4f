//! Database connection handling
//!
//! This module builds a sqlx pool from a named pool definition and exposes
//! plain statement execution over it.

use sqlx::{
    mysql::MySqlPoolOptions, postgres::PgPoolOptions, sqlite::SqlitePoolOptions, MySql, Pool,
    Postgres, Sqlite,
};

use crate::config::PoolConfig;
use crate::error::{Error, Result};

/// Enumeration of supported database types
#[derive(Debug, Clone)]
pub enum DatabaseConnection {
    Postgres(Pool<Postgres>),
    MySql(Pool<MySql>),
    Sqlite(Pool<Sqlite>),
}

impl DatabaseConnection {
    /// Create a new database connection from a pool definition
    pub async fn connect(config: &PoolConfig) -> Result<Self> {
        let pool_size = config.pool_size.unwrap_or(10);
        let timeout = std::time::Duration::from_secs(config.timeout_seconds.unwrap_or(30));

        match config.driver.as_str() {
            "postgres" => {
                let pool = PgPoolOptions::new()
                    .max_connections(pool_size)
                    .acquire_timeout(timeout)
                    .connect(&config.url)
                    .await
                    .map_err(Error::Connection)?;

                Ok(DatabaseConnection::Postgres(pool))
            }
            "mysql" => {
                let pool = MySqlPoolOptions::new()
                    .max_connections(pool_size)
                    .acquire_timeout(timeout)
                    .connect(&config.url)
                    .await
                    .map_err(Error::Connection)?;

                Ok(DatabaseConnection::MySql(pool))
            }
            "sqlite" => {
                let pool = SqlitePoolOptions::new()
                    .max_connections(pool_size)
                    .acquire_timeout(timeout)
                    .connect(&config.url)
                    .await
                    .map_err(Error::Connection)?;

                Ok(DatabaseConnection::Sqlite(pool))
            }
            _ => Err(Error::Config(format!(
                "Unsupported database driver: {}",
                config.driver
            ))),
        }
    }

    /// Execute a single SQL statement
    pub async fn execute(&self, sql: &str) -> Result<()> {
        let result = match self {
            DatabaseConnection::Postgres(pool) => sqlx::query(sql).execute(pool).await.map(|_| ()),
            DatabaseConnection::MySql(pool) => sqlx::query(sql).execute(pool).await.map(|_| ()),
            DatabaseConnection::Sqlite(pool) => sqlx::query(sql).execute(pool).await.map(|_| ()),
        };

        result.map_err(Error::Execution)
    }

    /// Close the underlying pool, waiting for connections to be returned
    pub async fn close(&self) {
        match self {
            DatabaseConnection::Postgres(pool) => pool.close().await,
            DatabaseConnection::MySql(pool) => pool.close().await,
            DatabaseConnection::Sqlite(pool) => pool.close().await,
        }
    }
}
