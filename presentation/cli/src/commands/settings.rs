use business::domain::notification::model::{NotificationSettings, PermissionState};
use business::domain::notification::use_cases::compact::CompactNotifiedSetParams;
use business::domain::notification::use_cases::update_settings::UpdateNotificationSettingsParams;
use business::domain::shared::value_objects::UserId;

use crate::commands::check::load_products;
use crate::setup::dependency_injection::DependencyContainer;

pub async fn permission_status(container: &DependencyContainer) -> anyhow::Result<()> {
    let state = container.permission_status.execute().await;
    println!("Notification permission: {}", state);
    Ok(())
}

pub async fn request_permission(container: &DependencyContainer) -> anyhow::Result<()> {
    let state = container.request_permission.execute().await;
    println!("{}", describe_permission(state));
    Ok(())
}

pub async fn set_enabled(container: &DependencyContainer, enabled: bool) -> anyhow::Result<()> {
    let settings = container
        .update_settings
        .execute(UpdateNotificationSettingsParams {
            enabled: Some(enabled),
            days_before: None,
        })
        .await?;
    print_settings(&settings, false)
}

/// Shows the settings, storing a new day threshold first when one is given.
pub async fn settings(
    container: &DependencyContainer,
    days: Option<i64>,
    json: bool,
) -> anyhow::Result<()> {
    let settings = match days {
        Some(days) => {
            container
                .update_settings
                .execute(UpdateNotificationSettingsParams {
                    enabled: None,
                    days_before: Some(days),
                })
                .await?
        }
        None => container.get_settings.execute().await,
    };
    print_settings(&settings, json)
}

pub async fn compact(container: &DependencyContainer, user: Option<UserId>) -> anyhow::Result<()> {
    let products = load_products(container, user).await?;
    let removed = container
        .compact
        .execute(CompactNotifiedSetParams { products })
        .await?;
    println!("Forgot {} notified products no longer in the list.", removed);
    Ok(())
}

fn print_settings(settings: &NotificationSettings, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(settings)?);
    } else {
        println!("{}", format_settings(settings));
    }
    Ok(())
}

fn format_settings(settings: &NotificationSettings) -> String {
    format!(
        "System notifications: {}\nAlert window: {} days\nPermission: {}",
        if settings.enabled { "on" } else { "off" },
        settings.days_before,
        settings.permission
    )
}

fn describe_permission(state: PermissionState) -> String {
    match state {
        PermissionState::Granted => "Notifications allowed.".to_string(),
        PermissionState::Denied => "Notifications blocked.".to_string(),
        PermissionState::Default => "No answer given, permission unchanged.".to_string(),
        PermissionState::Unsupported => {
            "Notifications are not supported on this platform.".to_string()
        }
        PermissionState::Error => "Could not ask for notification permission.".to_string(),
    }
}
