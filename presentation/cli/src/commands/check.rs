use business::domain::notification::use_cases::schedule::{
    ScheduleExpiryNotificationsParams, ScheduleOutcome,
};
use business::domain::notification::use_cases::sync_settings::SyncUserSettingsParams;
use business::domain::product::model::Product;
use business::domain::product::use_cases::get_all::GetAllProductsParams;
use business::domain::shared::value_objects::UserId;

use crate::setup::dependency_injection::DependencyContainer;

pub struct CheckArgs {
    pub days_before: Option<i64>,
    pub force: bool,
    pub user: Option<UserId>,
}

pub async fn load_products(
    container: &DependencyContainer,
    user: Option<UserId>,
) -> anyhow::Result<Vec<Product>> {
    let products = container
        .get_all_products
        .execute(GetAllProductsParams { user_id: user })
        .await?;
    Ok(products)
}

/// Fetches the product list and announces what is about to expire.
pub async fn run(container: &DependencyContainer, args: CheckArgs) -> anyhow::Result<()> {
    // the backend preference wins over the local one, but a stale local value
    // is still better than no check at all
    if let (Some(user), Some(sync)) = (&args.user, &container.sync_settings) {
        if let Err(e) = sync
            .execute(SyncUserSettingsParams {
                user_id: user.clone(),
            })
            .await
        {
            tracing::warn!("Could not sync settings for user {}: {}", user, e);
        }
    }

    let products = load_products(container, args.user).await?;
    let days_before = match args.days_before {
        Some(days) => days,
        None => container.get_settings.execute().await.days_before,
    };

    let outcome = container
        .schedule
        .execute(ScheduleExpiryNotificationsParams {
            products,
            days_before,
            force: args.force,
        })
        .await;

    println!("{}", describe(&outcome));
    Ok(())
}

fn describe(outcome: &ScheduleOutcome) -> String {
    match outcome {
        ScheduleOutcome::Unsupported => {
            "Notifications are not supported on this platform.".to_string()
        }
        ScheduleOutcome::Disabled => {
            "System notifications are turned off. Run `expiry-guard notifications on`.".to_string()
        }
        ScheduleOutcome::PermissionNotGranted(state) => format!(
            "Notification permission is {}. Run `expiry-guard permission request`.",
            state
        ),
        ScheduleOutcome::Completed {
            checked,
            notified,
            delivered,
        } => format!(
            "Checked {} products: {} alerts sent, {} delivered.",
            checked, notified, delivered
        ),
    }
}
