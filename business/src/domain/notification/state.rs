use std::sync::Arc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

use super::model::{DEFAULT_NOTIFY_DAYS, NotifiedSet};
use super::repository::KeyValueStore;

pub const NOTIFIED_PRODUCTS_KEY: &str = "expiryNotifiedProducts";
pub const SYSTEM_NOTIFICATIONS_KEY: &str = "expirySystemNotifications";
pub const NOTIFY_DAYS_KEY: &str = "expiryNotifyDays";

const FLAG_ON: &str = "on";
const FLAG_OFF: &str = "off";

/// Typed view over the key-value store.
///
/// Reads never fail: unreadable or corrupt values fall back to an empty
/// notified set, notifications enabled, and the default day threshold.
#[derive(Clone)]
pub struct NotificationState {
    store: Arc<dyn KeyValueStore>,
    logger: Arc<dyn Logger>,
}

impl NotificationState {
    pub fn new(store: Arc<dyn KeyValueStore>, logger: Arc<dyn Logger>) -> Self {
        Self { store, logger }
    }

    pub async fn load_notified_set(&self) -> NotifiedSet {
        let raw = match self.store.get(NOTIFIED_PRODUCTS_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return NotifiedSet::default(),
            Err(e) => {
                self.logger
                    .warn(&format!("Failed to read notified products: {}", e));
                return NotifiedSet::default();
            }
        };

        NotifiedSet::from_json(&raw).unwrap_or_else(|e| {
            self.logger
                .warn(&format!("Failed to parse notified products: {}", e));
            NotifiedSet::default()
        })
    }

    pub async fn save_notified_set(&self, set: &NotifiedSet) -> Result<(), RepositoryError> {
        self.store.set(NOTIFIED_PRODUCTS_KEY, &set.to_json()).await
    }

    /// Enabled unless explicitly switched off.
    pub async fn notifications_enabled(&self) -> bool {
        match self.store.get(SYSTEM_NOTIFICATIONS_KEY).await {
            Ok(raw) => raw.as_deref() != Some(FLAG_OFF),
            Err(e) => {
                self.logger
                    .warn(&format!("Failed to read notification flag: {}", e));
                true
            }
        }
    }

    pub async fn set_notifications_enabled(&self, enabled: bool) -> Result<(), RepositoryError> {
        let flag = if enabled { FLAG_ON } else { FLAG_OFF };
        self.store.set(SYSTEM_NOTIFICATIONS_KEY, flag).await
    }

    /// Stored day threshold; missing, unreadable or zero means the default.
    pub async fn notify_days(&self) -> i64 {
        let raw = match self.store.get(NOTIFY_DAYS_KEY).await {
            Ok(raw) => raw,
            Err(e) => {
                self.logger
                    .warn(&format!("Failed to read notify days: {}", e));
                None
            }
        };

        raw.and_then(|r| r.trim().parse::<i64>().ok())
            .filter(|days| *days != 0)
            .unwrap_or(DEFAULT_NOTIFY_DAYS)
    }

    pub async fn set_notify_days(&self, days: i64) -> Result<(), RepositoryError> {
        self.store.set(NOTIFY_DAYS_KEY, &days.to_string()).await
    }
}
