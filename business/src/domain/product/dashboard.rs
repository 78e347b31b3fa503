use chrono::NaiveDate;
use serde::Serialize;

use super::model::Product;
use super::status::{ExpiryLevel, ExpiryStatus, classify};

/// Counts of products per expiry level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpirySummary {
    pub total: usize,
    pub expired: usize,
    pub near: usize,
    pub safe: usize,
    pub invalid: usize,
    /// Products that are not safe, unreadable dates included.
    pub alert_count: usize,
}

/// A product that needs attention, with its classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpiryAlertEntry {
    pub product: Product,
    pub status: ExpiryStatus,
}

pub fn summarize(products: &[Product], today: NaiveDate) -> ExpirySummary {
    let mut summary = ExpirySummary {
        total: products.len(),
        ..ExpirySummary::default()
    };

    for product in products {
        match classify(&product.exp_date, today).level {
            ExpiryLevel::Expired => summary.expired += 1,
            ExpiryLevel::Near => summary.near += 1,
            ExpiryLevel::Safe => summary.safe += 1,
            ExpiryLevel::Invalid => summary.invalid += 1,
        }
    }

    summary.alert_count = summary.total - summary.safe;
    summary
}

/// Expired and near-expiry products, expired first, then soonest first.
pub fn list_alerts(products: &[Product], today: NaiveDate) -> Vec<ExpiryAlertEntry> {
    let mut alerts: Vec<ExpiryAlertEntry> = products
        .iter()
        .map(|product| ExpiryAlertEntry {
            status: classify(&product.exp_date, today),
            product: product.clone(),
        })
        .filter(|entry| matches!(entry.status.level, ExpiryLevel::Expired | ExpiryLevel::Near))
        .collect();

    alerts.sort_by_key(|entry| (entry.status.level != ExpiryLevel::Expired, entry.status.days));
    alerts
}
