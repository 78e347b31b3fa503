use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::validate_notify_days;
use crate::domain::notification::repository::UserSettingsRepository;
use crate::domain::notification::state::NotificationState;
use crate::domain::notification::use_cases::sync_settings::{
    SyncUserSettingsParams, SyncUserSettingsUseCase,
};

pub struct SyncUserSettingsUseCaseImpl {
    pub settings_repository: Arc<dyn UserSettingsRepository>,
    pub state: NotificationState,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SyncUserSettingsUseCase for SyncUserSettingsUseCaseImpl {
    async fn execute(&self, params: SyncUserSettingsParams) -> Result<i64, NotificationError> {
        self.logger
            .info(&format!("Loading settings for user {}", params.user_id));

        let remote = self.settings_repository.get(&params.user_id).await?;

        match remote.notify_days_before.filter(|days| *days != 0) {
            Some(days) => {
                let days = validate_notify_days(days).inspect_err(|_| {
                    self.logger
                        .warn(&format!("Backend notify days {} rejected", days))
                })?;
                self.state.set_notify_days(days).await?
            }
            None => self
                .logger
                .debug("Backend settings carry no notify days, keeping local value"),
        }

        Ok(self.state.notify_days().await)
    }
}
