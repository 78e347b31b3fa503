use async_trait::async_trait;

use crate::domain::notification::model::PermissionState;

#[async_trait]
pub trait RequestPermissionUseCase: Send + Sync {
    async fn execute(&self) -> PermissionState;
}
