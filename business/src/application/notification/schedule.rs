use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::notification::dispatcher::NotificationDispatcher;
use crate::domain::notification::model::{ExpiryAlert, NotifiedKey, PermissionState};
use crate::domain::notification::state::NotificationState;
use crate::domain::notification::use_cases::schedule::{
    ScheduleExpiryNotificationsParams, ScheduleExpiryNotificationsUseCase, ScheduleOutcome,
};
use crate::domain::product::expiry_date::whole_days_until;
use crate::domain::shared::clock::Clock;

pub struct ScheduleExpiryNotificationsUseCaseImpl {
    pub state: NotificationState,
    pub dispatcher: NotificationDispatcher,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ScheduleExpiryNotificationsUseCase for ScheduleExpiryNotificationsUseCaseImpl {
    async fn execute(&self, params: ScheduleExpiryNotificationsParams) -> ScheduleOutcome {
        if !self.dispatcher.is_supported() {
            self.logger
                .info("Notifications not supported on this platform, skipping");
            return ScheduleOutcome::Unsupported;
        }

        if !self.state.notifications_enabled().await {
            self.logger
                .info("System notifications disabled via settings, skipping");
            return ScheduleOutcome::Disabled;
        }

        let permission = self.dispatcher.permission().await;
        if permission != PermissionState::Granted {
            self.logger.info(&format!(
                "Permission not granted ({}), skipping system notifications",
                permission
            ));
            return ScheduleOutcome::PermissionNotGranted(permission);
        }

        let now = self.clock.now();
        let mut notified_set = self.state.load_notified_set().await;
        let mut notified = 0;
        let mut delivered = 0;

        for product in &params.products {
            let Some(key) = NotifiedKey::for_product(product) else {
                self.logger.debug("Skipping product without id, name or date");
                continue;
            };

            if !params.force && notified_set.contains(&key) {
                continue;
            }

            let Some(diff_days) = whole_days_until(&product.exp_date, now) else {
                self.logger.debug(&format!(
                    "Skipping {}: unreadable expiry date '{}'",
                    key, product.exp_date
                ));
                continue;
            };

            if diff_days > params.days_before {
                continue;
            }

            let alert = ExpiryAlert::for_product(product, diff_days);

            // Recorded before delivery so a failing channel cannot cause repeats.
            notified_set.insert(&key);
            if let Err(e) = self.state.save_notified_set(&notified_set).await {
                self.logger
                    .warn(&format!("Failed to save notified products: {}", e));
            }
            notified += 1;

            if self.dispatcher.show(&alert).await {
                delivered += 1;
            }
        }

        self.logger.info(&format!(
            "Expiry notification run: {} products, days_before={}, force={}, notified={}",
            params.products.len(),
            params.days_before,
            params.force,
            notified
        ));

        ScheduleOutcome::Completed {
            checked: params.products.len(),
            notified,
            delivered,
        }
    }
}
