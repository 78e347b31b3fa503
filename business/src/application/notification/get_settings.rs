use async_trait::async_trait;

use crate::domain::notification::dispatcher::NotificationDispatcher;
use crate::domain::notification::model::NotificationSettings;
use crate::domain::notification::state::NotificationState;
use crate::domain::notification::use_cases::get_settings::GetNotificationSettingsUseCase;

pub struct GetNotificationSettingsUseCaseImpl {
    pub state: NotificationState,
    pub dispatcher: NotificationDispatcher,
}

#[async_trait]
impl GetNotificationSettingsUseCase for GetNotificationSettingsUseCaseImpl {
    async fn execute(&self) -> NotificationSettings {
        NotificationSettings {
            enabled: self.state.notifications_enabled().await,
            days_before: self.state.notify_days().await,
            permission: self.dispatcher.permission().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::model::PermissionState;
    use crate::domain::notification::state::{NOTIFY_DAYS_KEY, SYSTEM_NOTIFICATIONS_KEY};
    use crate::test_support::{MemoryStore, RecordingChannel, StaticPermission, mock_logger};
    use std::sync::Arc;

    #[tokio::test]
    async fn should_combine_stored_preferences_with_permission() {
        let store = Arc::new(MemoryStore::with(&[
            (SYSTEM_NOTIFICATIONS_KEY, "off"),
            (NOTIFY_DAYS_KEY, "3"),
        ]));
        let logger = mock_logger();
        let use_case = GetNotificationSettingsUseCaseImpl {
            state: NotificationState::new(store, logger.clone()),
            dispatcher: NotificationDispatcher {
                permission: Arc::new(StaticPermission::new(PermissionState::Denied)),
                persistent: None,
                direct: Arc::new(RecordingChannel::new("desktop")),
                logger,
            },
        };

        let settings = use_case.execute().await;

        assert_eq!(
            settings,
            NotificationSettings {
                enabled: false,
                days_before: 3,
                permission: PermissionState::Denied,
            }
        );
    }
}
