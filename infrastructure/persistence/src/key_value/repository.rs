use std::sync::Arc;

use async_trait::async_trait;
use sqlx::SqlitePool;

use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::notification::repository::KeyValueStore;

pub struct KeyValueStoreSqlite {
    pool: SqlitePool,
    logger: Arc<dyn Logger>,
}

impl KeyValueStoreSqlite {
    pub fn new(pool: SqlitePool, logger: Arc<dyn Logger>) -> Self {
        Self { pool, logger }
    }
}

#[async_trait]
impl KeyValueStore for KeyValueStoreSqlite {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        sqlx::query_scalar::<_, String>("SELECT value FROM key_value_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                self.logger
                    .warn(&format!("Failed to read key {}: {}", key, e));
                RepositoryError::ReadFailed
            })
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO key_value_store (key, value, updated_at)
            VALUES (?1, ?2, CURRENT_TIMESTAMP)
            ON CONFLICT (key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at"#,
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            self.logger
                .warn(&format!("Failed to write key {}: {}", key, e));
            RepositoryError::WriteFailed
        })?;

        Ok(())
    }
}
