#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("notification.unsupported")]
    Unsupported,
    #[error("notification.permission_not_granted")]
    PermissionNotGranted,
    #[error("notification.permission_request_failed: {0}")]
    PermissionRequestFailed(String),
    #[error("notification.delivery_failed: {0}")]
    DeliveryFailed(String),
    #[error("notification.invalid_days_before")]
    InvalidDaysBefore,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
