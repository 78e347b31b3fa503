use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::notification::dispatcher::NotificationDispatcher;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::{NotificationSettings, validate_notify_days};
use crate::domain::notification::state::NotificationState;
use crate::domain::notification::use_cases::update_settings::{
    UpdateNotificationSettingsParams, UpdateNotificationSettingsUseCase,
};

pub struct UpdateNotificationSettingsUseCaseImpl {
    pub state: NotificationState,
    pub dispatcher: NotificationDispatcher,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateNotificationSettingsUseCase for UpdateNotificationSettingsUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateNotificationSettingsParams,
    ) -> Result<NotificationSettings, NotificationError> {
        if let Some(days) = params.days_before {
            let days = validate_notify_days(days)?;
            self.state.set_notify_days(days).await?;
            self.logger
                .info(&format!("Notify days before set to {}", days));
        }

        if let Some(enabled) = params.enabled {
            self.state.set_notifications_enabled(enabled).await?;
            self.logger.info(&format!(
                "System notifications {}",
                if enabled { "enabled" } else { "disabled" }
            ));
        }

        Ok(NotificationSettings {
            enabled: self.state.notifications_enabled().await,
            days_before: self.state.notify_days().await,
            permission: self.dispatcher.permission().await,
        })
    }
}
