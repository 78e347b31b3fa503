use async_trait::async_trait;

use crate::domain::notification::dispatcher::NotificationDispatcher;
use crate::domain::notification::model::PermissionState;
use crate::domain::notification::use_cases::permission_status::GetPermissionStatusUseCase;

pub struct GetPermissionStatusUseCaseImpl {
    pub dispatcher: NotificationDispatcher,
}

#[async_trait]
impl GetPermissionStatusUseCase for GetPermissionStatusUseCaseImpl {
    async fn execute(&self) -> PermissionState {
        self.dispatcher.permission().await
    }
}
