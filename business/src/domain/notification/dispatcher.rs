use std::sync::Arc;

use crate::domain::logger::Logger;

use super::model::{ExpiryAlert, PermissionState};
use super::services::{NotificationChannel, PermissionService};

/// Emits alerts through the platform, permission permitting.
///
/// A registered persistent channel is tried first; the direct channel is
/// the fallback when there is none or when it fails.
#[derive(Clone)]
pub struct NotificationDispatcher {
    pub permission: Arc<dyn PermissionService>,
    pub persistent: Option<Arc<dyn NotificationChannel>>,
    pub direct: Arc<dyn NotificationChannel>,
    pub logger: Arc<dyn Logger>,
}

impl NotificationDispatcher {
    pub fn is_supported(&self) -> bool {
        self.permission.is_supported()
    }

    pub async fn permission(&self) -> PermissionState {
        if !self.permission.is_supported() {
            return PermissionState::Unsupported;
        }
        self.permission.current().await
    }

    /// Returns whether some channel accepted the alert. Never fails.
    pub async fn show(&self, alert: &ExpiryAlert) -> bool {
        if !self.permission.is_supported() {
            self.logger.warn("Notifications unsupported");
            return false;
        }

        let permission = self.permission.current().await;
        if permission != PermissionState::Granted {
            self.logger
                .warn(&format!("Permission not granted: {}", permission));
            return false;
        }

        if let Some(channel) = &self.persistent {
            match channel.deliver(alert).await {
                Ok(()) => return true,
                Err(e) => self.logger.warn(&format!(
                    "{} delivery failed, falling back to {}: {}",
                    channel.name(),
                    self.direct.name(),
                    e
                )),
            }
        }

        match self.direct.deliver(alert).await {
            Ok(()) => true,
            Err(e) => {
                self.logger.error(&format!(
                    "{} delivery failed: {}",
                    self.direct.name(),
                    e
                ));
                false
            }
        }
    }
}
