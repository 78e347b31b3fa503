use async_trait::async_trait;

use crate::domain::notification::model::PermissionState;

/// Reads the permission without prompting.
#[async_trait]
pub trait GetPermissionStatusUseCase: Send + Sync {
    async fn execute(&self) -> PermissionState;
}
