use async_trait::async_trait;

use super::errors::NotificationError;
use super::model::{ExpiryAlert, PermissionState};

/// Service port for the platform's notification permission.
#[async_trait]
pub trait PermissionService: Send + Sync {
    /// Whether the platform can show notifications at all.
    fn is_supported(&self) -> bool;

    async fn current(&self) -> PermissionState;

    /// Asks the user for permission and returns the resulting state.
    async fn request(&self) -> Result<PermissionState, NotificationError>;
}

/// Service port for one way of putting an alert in front of the user.
#[async_trait]
pub trait NotificationChannel: Send + Sync {
    fn name(&self) -> &str;

    async fn deliver(&self, alert: &ExpiryAlert) -> Result<(), NotificationError>;
}
