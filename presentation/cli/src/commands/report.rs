use business::domain::product::dashboard::{ExpiryAlertEntry, ExpirySummary, list_alerts, summarize};
use business::domain::product::status::{ExpiryStatus, classify};
use business::domain::shared::value_objects::UserId;

use crate::commands::check::load_products;
use crate::setup::dependency_injection::DependencyContainer;

pub fn status(container: &DependencyContainer, date: &str, json: bool) -> anyhow::Result<()> {
    let status = classify(date, container.clock.today());
    if json {
        println!("{}", serde_json::to_string_pretty(&status)?);
    } else {
        println!("{}", format_status(&status));
    }
    Ok(())
}

pub async fn summary(
    container: &DependencyContainer,
    user: Option<UserId>,
    json: bool,
) -> anyhow::Result<()> {
    let products = load_products(container, user).await?;
    let summary = summarize(&products, container.clock.today());
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", format_summary(&summary));
    }
    Ok(())
}

pub async fn alerts(
    container: &DependencyContainer,
    user: Option<UserId>,
    json: bool,
) -> anyhow::Result<()> {
    let products = load_products(container, user).await?;
    let alerts = list_alerts(&products, container.clock.today());
    if json {
        println!("{}", serde_json::to_string_pretty(&alerts)?);
    } else if alerts.is_empty() {
        println!("Nothing is about to expire.");
    } else {
        for alert in &alerts {
            println!("{}", format_alert(alert));
        }
    }
    Ok(())
}

fn format_status(status: &ExpiryStatus) -> String {
    format!("{} ({})", status.label, status.level)
}

fn format_summary(summary: &ExpirySummary) -> String {
    format!(
        "{} products: {} expired, {} near expiry, {} safe, {} invalid ({} need attention)",
        summary.total,
        summary.expired,
        summary.near,
        summary.safe,
        summary.invalid,
        summary.alert_count
    )
}

fn format_alert(alert: &ExpiryAlertEntry) -> String {
    format!(
        "{:<24} {:<12} {}",
        alert.product.display_name(),
        alert.product.exp_date,
        alert.status.label
    )
}
