use async_trait::async_trait;

use business::domain::notification::errors::NotificationError;
use business::domain::notification::model::ExpiryAlert;
use business::domain::notification::services::NotificationChannel;

/// Direct desktop notification through notify-rust.
pub struct DesktopNotifier {
    app_name: String,
}

impl DesktopNotifier {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }

    /// Whether this build targets a desktop with a notification service.
    pub fn is_supported() -> bool {
        cfg!(any(target_os = "linux", target_os = "macos", target_os = "windows"))
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new("ExpiryGuard")
    }
}

#[async_trait]
impl NotificationChannel for DesktopNotifier {
    fn name(&self) -> &str {
        "desktop"
    }

    async fn deliver(&self, alert: &ExpiryAlert) -> Result<(), NotificationError> {
        let app_name = self.app_name.clone();
        let title = alert.title.clone();
        let body = alert.body.clone();

        // notify-rust blocks on the platform call
        tokio::task::spawn_blocking(move || {
            notify_rust::Notification::new()
                .appname(&app_name)
                .summary(&title)
                .body(&body)
                .show()
                .map(|_| ())
                .map_err(|e| NotificationError::DeliveryFailed(e.to_string()))
        })
        .await
        .map_err(|e| NotificationError::DeliveryFailed(format!("Task join error: {}", e)))?
    }
}
