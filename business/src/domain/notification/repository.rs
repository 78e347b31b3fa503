use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

/// Small string key-value store holding the local notification state.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError>;
}

/// User settings as kept by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub theme: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub notify_days_before: Option<i64>,
}

#[async_trait]
pub trait UserSettingsRepository: Send + Sync {
    async fn get(&self, user_id: &UserId) -> Result<UserSettings, RepositoryError>;
}
