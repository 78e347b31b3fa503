use async_trait::async_trait;

use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::NotificationSettings;

pub struct UpdateNotificationSettingsParams {
    pub enabled: Option<bool>,
    pub days_before: Option<i64>,
}

#[async_trait]
pub trait UpdateNotificationSettingsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateNotificationSettingsParams,
    ) -> Result<NotificationSettings, NotificationError>;
}
