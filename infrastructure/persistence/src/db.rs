use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::{str::FromStr, time::Duration};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("database.connection_error")]
    ConnectionError,
    #[error("database.migration_error")]
    MigrationError,
}

/// Configuration for the local SQLite database
pub struct DatabaseConfig {
    pub connection_string: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    /// Single connection: the store is only touched by one invocation at a time
    /// and `sqlite::memory:` databases are per connection.
    pub fn new(connection_string: String) -> Self {
        Self {
            connection_string,
            max_connections: 1,
            acquire_timeout: Duration::from_secs(5),
        }
    }
}

/// Creates a SQLite connection pool, creating the database file if needed
pub async fn create_sqlite_pool(config: &DatabaseConfig) -> Result<SqlitePool, DatabaseError> {
    let options = SqliteConnectOptions::from_str(&config.connection_string)
        .map_err(|_| DatabaseError::ConnectionError)?
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await
        .map_err(|_| DatabaseError::ConnectionError)
}

/// Runs the embedded migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DatabaseError> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|_| DatabaseError::MigrationError)
}
