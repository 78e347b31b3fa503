use async_trait::async_trait;

use crate::domain::notification::model::NotificationSettings;

#[async_trait]
pub trait GetNotificationSettingsUseCase: Send + Sync {
    async fn execute(&self) -> NotificationSettings;
}
