use async_trait::async_trait;

use crate::domain::notification::errors::NotificationError;
use crate::domain::shared::value_objects::UserId;

pub struct SyncUserSettingsParams {
    pub user_id: UserId,
}

/// Pulls the user's backend settings and stores the day threshold locally.
#[async_trait]
pub trait SyncUserSettingsUseCase: Send + Sync {
    /// Returns the day threshold now in effect.
    async fn execute(&self, params: SyncUserSettingsParams) -> Result<i64, NotificationError>;
}
