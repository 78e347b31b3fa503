use async_trait::async_trait;

use crate::domain::notification::model::PermissionState;
use crate::domain::product::model::Product;

pub struct ScheduleExpiryNotificationsParams {
    pub products: Vec<Product>,
    /// Alert for products expiring within this many whole days.
    pub days_before: i64,
    /// Ignore the notified set and announce every qualifying product again.
    pub force: bool,
}

/// How a scheduling pass ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOutcome {
    Unsupported,
    Disabled,
    PermissionNotGranted(PermissionState),
    Completed {
        checked: usize,
        notified: usize,
        delivered: usize,
    },
}

#[async_trait]
pub trait ScheduleExpiryNotificationsUseCase: Send + Sync {
    async fn execute(&self, params: ScheduleExpiryNotificationsParams) -> ScheduleOutcome;
}
