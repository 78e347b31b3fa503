use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::product::model::Product;

use super::errors::NotificationError;

/// Day threshold used when no preference has been stored.
pub const DEFAULT_NOTIFY_DAYS: i64 = 7;

/// Checks a day threshold before it is stored. Negative values are rejected
/// and `0` stands for the default.
pub fn validate_notify_days(days: i64) -> Result<i64, NotificationError> {
    match days {
        days if days < 0 => Err(NotificationError::InvalidDaysBefore),
        0 => Ok(DEFAULT_NOTIFY_DAYS),
        days => Ok(days),
    }
}

/// Platform notification permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionState {
    Granted,
    Denied,
    /// The user has not been asked yet.
    Default,
    Unsupported,
    Error,
}

impl std::fmt::Display for PermissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PermissionState::Granted => write!(f, "granted"),
            PermissionState::Denied => write!(f, "denied"),
            PermissionState::Default => write!(f, "default"),
            PermissionState::Unsupported => write!(f, "unsupported"),
            PermissionState::Error => write!(f, "error"),
        }
    }
}

impl std::str::FromStr for PermissionState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "granted" => Ok(PermissionState::Granted),
            "denied" => Ok(PermissionState::Denied),
            "default" => Ok(PermissionState::Default),
            "unsupported" => Ok(PermissionState::Unsupported),
            "error" => Ok(PermissionState::Error),
            _ => Err(format!("Invalid permission state: {}", s)),
        }
    }
}

/// De-duplication key of a product.
///
/// The product id when there is one, otherwise `name|expDate`. Two unsaved
/// products with the same name and expiry share a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotifiedKey(String);

impl NotifiedKey {
    /// Returns `None` when the product carries nothing to identify it by.
    pub fn for_product(product: &Product) -> Option<Self> {
        let key = match &product.id {
            Some(id) => id.as_str().to_string(),
            None if product.name.is_empty() && product.exp_date.is_empty() => return None,
            None => format!("{}|{}", product.name, product.exp_date),
        };

        if key.is_empty() {
            return None;
        }
        Some(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NotifiedKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Products that have already been announced, persisted as a JSON object of
/// `key -> true`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotifiedSet {
    entries: BTreeMap<String, bool>,
}

impl NotifiedSet {
    /// Reads the persisted JSON form.
    ///
    /// Anything that is valid JSON but not an object yields an empty set.
    /// An entry counts as notified when its value is truthy: `false`, `null`,
    /// `0` and `""` do not count.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(raw)?;
        let entries = match value {
            serde_json::Value::Object(map) => map
                .into_iter()
                .map(|(key, flag)| (key, is_truthy(&flag)))
                .collect(),
            _ => BTreeMap::new(),
        };
        Ok(Self { entries })
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn contains(&self, key: &NotifiedKey) -> bool {
        self.entries.get(key.as_str()).copied().unwrap_or(false)
    }

    pub fn insert(&mut self, key: &NotifiedKey) {
        self.entries.insert(key.as_str().to_string(), true);
    }

    /// Drops every entry not in `keep`. Returns how many were removed.
    pub fn retain_keys(&mut self, keep: &[NotifiedKey]) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|key, _| keep.iter().any(|k| k.as_str() == key));
        before - self.entries.len()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

fn is_truthy(value: &serde_json::Value) -> bool {
    match value {
        serde_json::Value::Null => false,
        serde_json::Value::Bool(flag) => *flag,
        serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Array(_) | serde_json::Value::Object(_) => true,
    }
}

/// A platform notification about one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpiryAlert {
    pub title: String,
    pub body: String,
}

impl ExpiryAlert {
    /// Builds the alert for a product `diff_days` whole days away from expiry.
    pub fn for_product(product: &Product, diff_days: i64) -> Self {
        let name = product.display_name();
        Self {
            title: format!("Expiry alert: {}", name),
            body: alert_body(name, diff_days),
        }
    }
}

fn alert_body(name: &str, diff_days: i64) -> String {
    if diff_days < 0 {
        return match diff_days.unsigned_abs() {
            0 => format!("{} has already expired.", name),
            1 => format!("{} expired 1 day ago.", name),
            days_ago => format!("{} expired {} days ago.", name, days_ago),
        };
    }

    match diff_days {
        0 => format!("{} expires today.", name),
        1 => format!("{} will expire in 1 day.", name),
        days => format!("{} will expire in {} days.", name, days),
    }
}

/// Locally stored notification preferences plus the platform permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationSettings {
    pub enabled: bool,
    pub days_before: i64,
    pub permission: PermissionState,
}
