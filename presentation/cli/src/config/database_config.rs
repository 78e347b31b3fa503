use anyhow::Context;
use persistence::db::{DatabaseConfig, create_sqlite_pool, run_migrations};
use sqlx::SqlitePool;

/// Opens the local key-value database and brings its schema up to date.
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(database_url: &str) -> anyhow::Result<SqlitePool> {
    let pool = create_sqlite_pool(&DatabaseConfig::new(database_url.to_string()))
        .await
        .with_context(|| format!("Failed to open database {}", database_url))?;
    run_migrations(&pool)
        .await
        .context("Failed to migrate database")?;
    Ok(pool)
}
