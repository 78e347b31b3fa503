use std::sync::Arc;

use async_trait::async_trait;

use business::domain::logger::Logger;
use business::domain::notification::errors::NotificationError;
use business::domain::notification::model::PermissionState;
use business::domain::notification::repository::KeyValueStore;
use business::domain::notification::services::PermissionService;

pub const PERMISSION_KEY: &str = "expiryNotificationPermission";

/// Asks the user whether alerts may be shown.
#[async_trait]
pub trait PermissionPrompt: Send + Sync {
    /// `Ok(None)` means the user dismissed the prompt without answering.
    async fn ask(&self) -> Result<Option<bool>, NotificationError>;
}

/// Permission kept in the key-value store, so an answer survives restarts
/// the way a browser remembers a site's notification permission.
pub struct StoredPermissionService {
    store: Arc<dyn KeyValueStore>,
    prompt: Arc<dyn PermissionPrompt>,
    logger: Arc<dyn Logger>,
    supported: bool,
}

impl StoredPermissionService {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        prompt: Arc<dyn PermissionPrompt>,
        logger: Arc<dyn Logger>,
    ) -> Self {
        Self {
            store,
            prompt,
            logger,
            supported: crate::DesktopNotifier::is_supported(),
        }
    }

    pub fn with_support(mut self, supported: bool) -> Self {
        self.supported = supported;
        self
    }
}

#[async_trait]
impl PermissionService for StoredPermissionService {
    fn is_supported(&self) -> bool {
        self.supported
    }

    async fn current(&self) -> PermissionState {
        if !self.supported {
            return PermissionState::Unsupported;
        }

        match self.store.get(PERMISSION_KEY).await {
            Ok(Some(raw)) => raw.parse().unwrap_or(PermissionState::Default),
            Ok(None) => PermissionState::Default,
            Err(e) => {
                self.logger
                    .warn(&format!("Failed to read notification permission: {}", e));
                PermissionState::Error
            }
        }
    }

    async fn request(&self) -> Result<PermissionState, NotificationError> {
        if !self.supported {
            return Err(NotificationError::Unsupported);
        }

        // a decision already made is not asked again
        let current = self.current().await;
        if matches!(current, PermissionState::Granted | PermissionState::Denied) {
            return Ok(current);
        }

        let state = match self.prompt.ask().await? {
            Some(true) => PermissionState::Granted,
            Some(false) => PermissionState::Denied,
            None => return Ok(PermissionState::Default),
        };

        self.store
            .set(PERMISSION_KEY, &state.to_string())
            .await
            .map_err(|e| NotificationError::PermissionRequestFailed(e.to_string()))?;

        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use business::domain::errors::RepositoryError;
    use logger::TracingLogger;

    #[derive(Default)]
    struct MemoryStore {
        values: Mutex<HashMap<String, String>>,
    }

    #[async_trait]
    impl KeyValueStore for MemoryStore {
        async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct Answer(Option<bool>, Mutex<usize>);

    impl Answer {
        fn new(answer: Option<bool>) -> Self {
            Self(answer, Mutex::new(0))
        }

        fn asked(&self) -> usize {
            *self.1.lock().unwrap()
        }
    }

    #[async_trait]
    impl PermissionPrompt for Answer {
        async fn ask(&self) -> Result<Option<bool>, NotificationError> {
            *self.1.lock().unwrap() += 1;
            Ok(self.0)
        }
    }

    fn service(store: Arc<MemoryStore>, prompt: Arc<Answer>) -> StoredPermissionService {
        StoredPermissionService::new(store, prompt, Arc::new(TracingLogger::new("notifier")))
            .with_support(true)
    }

    #[tokio::test]
    async fn should_start_in_default_state() {
        let service = service(Arc::default(), Arc::new(Answer::new(Some(true))));
        assert_eq!(service.current().await, PermissionState::Default);
    }

    #[tokio::test]
    async fn should_persist_granted_answer() {
        let store = Arc::new(MemoryStore::default());
        let service = service(store.clone(), Arc::new(Answer::new(Some(true))));

        assert_eq!(service.request().await.unwrap(), PermissionState::Granted);
        assert_eq!(service.current().await, PermissionState::Granted);
        assert_eq!(
            store.get(PERMISSION_KEY).await.unwrap().as_deref(),
            Some("granted")
        );
    }

    #[tokio::test]
    async fn should_not_ask_again_once_decided() {
        let store = Arc::new(MemoryStore::default());
        store.set(PERMISSION_KEY, "denied").await.unwrap();
        let prompt = Arc::new(Answer::new(Some(true)));
        let service = service(store, prompt.clone());

        assert_eq!(service.request().await.unwrap(), PermissionState::Denied);
        assert_eq!(prompt.asked(), 0);
    }

    #[tokio::test]
    async fn should_stay_default_when_prompt_is_dismissed() {
        let store = Arc::new(MemoryStore::default());
        let service = service(store.clone(), Arc::new(Answer::new(None)));

        assert_eq!(service.request().await.unwrap(), PermissionState::Default);
        assert!(store.get(PERMISSION_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_report_unsupported_platform() {
        let service = StoredPermissionService::new(
            Arc::new(MemoryStore::default()),
            Arc::new(Answer::new(Some(true))),
            Arc::new(TracingLogger::new("notifier")),
        )
        .with_support(false);

        assert!(!service.is_supported());
        assert_eq!(service.current().await, PermissionState::Unsupported);
        assert!(matches!(
            service.request().await,
            Err(NotificationError::Unsupported)
        ));
    }
}
