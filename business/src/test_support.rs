//! Fakes shared by the unit tests of this crate.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::{ExpiryAlert, PermissionState};
use crate::domain::notification::repository::KeyValueStore;
use crate::domain::notification::services::{NotificationChannel, PermissionService};
use crate::domain::shared::clock::Clock;

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

/// In-memory key-value store that counts writes.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
    writes: Mutex<usize>,
    failing: bool,
}

impl MemoryStore {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        let store = Self::default();
        for (key, value) in entries {
            store.put(key, value);
        }
        store
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub fn put(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    pub fn writes(&self) -> usize {
        *self.writes.lock().unwrap()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, RepositoryError> {
        if self.failing {
            return Err(RepositoryError::ReadFailed);
        }
        Ok(self.value(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), RepositoryError> {
        if self.failing {
            return Err(RepositoryError::WriteFailed);
        }
        *self.writes.lock().unwrap() += 1;
        self.put(key, value);
        Ok(())
    }
}

pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Channel that records what it was asked to deliver.
pub struct RecordingChannel {
    name: String,
    fail: bool,
    delivered: Mutex<Vec<ExpiryAlert>>,
}

impl RecordingChannel {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            fail: false,
            delivered: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(name: &str) -> Self {
        Self {
            fail: true,
            ..Self::new(name)
        }
    }

    pub fn delivered(&self) -> Vec<ExpiryAlert> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl NotificationChannel for RecordingChannel {
    fn name(&self) -> &str {
        &self.name
    }

    async fn deliver(&self, alert: &ExpiryAlert) -> Result<(), NotificationError> {
        if self.fail {
            return Err(NotificationError::DeliveryFailed("offline".to_string()));
        }
        self.delivered.lock().unwrap().push(alert.clone());
        Ok(())
    }
}

/// Permission service with a fixed answer.
pub struct StaticPermission {
    supported: bool,
    state: Mutex<PermissionState>,
    answer: Option<PermissionState>,
}

impl StaticPermission {
    pub fn new(state: PermissionState) -> Self {
        Self {
            supported: true,
            state: Mutex::new(state),
            answer: None,
        }
    }

    pub fn granted() -> Self {
        Self::new(PermissionState::Granted)
    }

    pub fn unsupported() -> Self {
        Self {
            supported: false,
            ..Self::new(PermissionState::Unsupported)
        }
    }

    /// A prompt that answers with `answer`; `None` makes the request fail.
    pub fn answering(answer: Option<PermissionState>) -> Self {
        Self {
            answer,
            ..Self::new(PermissionState::Default)
        }
    }
}

#[async_trait]
impl PermissionService for StaticPermission {
    fn is_supported(&self) -> bool {
        self.supported
    }

    async fn current(&self) -> PermissionState {
        *self.state.lock().unwrap()
    }

    async fn request(&self) -> Result<PermissionState, NotificationError> {
        let answer = self.answer.ok_or_else(|| {
            NotificationError::PermissionRequestFailed("prompt closed".to_string())
        })?;
        *self.state.lock().unwrap() = answer;
        Ok(answer)
    }
}
