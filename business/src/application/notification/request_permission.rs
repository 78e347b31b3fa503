use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::notification::model::PermissionState;
use crate::domain::notification::services::PermissionService;
use crate::domain::notification::use_cases::request_permission::RequestPermissionUseCase;

pub struct RequestPermissionUseCaseImpl {
    pub permission: Arc<dyn PermissionService>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RequestPermissionUseCase for RequestPermissionUseCaseImpl {
    async fn execute(&self) -> PermissionState {
        if !self.permission.is_supported() {
            self.logger.info("Notification permission unsupported");
            return PermissionState::Unsupported;
        }

        match self.permission.request().await {
            Ok(state) => {
                self.logger
                    .info(&format!("Notification permission request -> {}", state));
                state
            }
            Err(e) => {
                self.logger
                    .error(&format!("Notification permission request failed: {}", e));
                PermissionState::Error
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StaticPermission, mock_logger};

    fn use_case(permission: StaticPermission) -> RequestPermissionUseCaseImpl {
        RequestPermissionUseCaseImpl {
            permission: Arc::new(permission),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_the_answer_of_the_prompt() {
        let granted = use_case(StaticPermission::answering(Some(PermissionState::Granted)));
        assert_eq!(granted.execute().await, PermissionState::Granted);

        let denied = use_case(StaticPermission::answering(Some(PermissionState::Denied)));
        assert_eq!(denied.execute().await, PermissionState::Denied);
    }

    #[tokio::test]
    async fn should_report_error_when_the_prompt_fails() {
        let failing = use_case(StaticPermission::answering(None));
        assert_eq!(failing.execute().await, PermissionState::Error);
    }

    #[tokio::test]
    async fn should_report_unsupported_platform_without_prompting() {
        let unsupported = use_case(StaticPermission::unsupported());
        assert_eq!(unsupported.execute().await, PermissionState::Unsupported);
    }
}
