use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use business::domain::logger::Logger;
use business::domain::notification::errors::NotificationError;
use business::domain::notification::model::ExpiryAlert;
use business::domain::notification::services::NotificationChannel;

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    title: &'a str,
    body: &'a str,
    source: &'a str,
}

/// Persistent delivery channel: posts alerts to a push relay that keeps
/// them for the user's devices after this process exits.
pub struct WebhookNotifier {
    client: Client,
    url: String,
    logger: Arc<dyn Logger>,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>, logger: Arc<dyn Logger>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()
            .unwrap_or_default();

        Self {
            client,
            url: url.into(),
            logger,
        }
    }

    fn payload(alert: &ExpiryAlert) -> WebhookPayload<'_> {
        WebhookPayload {
            title: &alert.title,
            body: &alert.body,
            source: "expiry-guard",
        }
    }
}

#[async_trait]
impl NotificationChannel for WebhookNotifier {
    fn name(&self) -> &str {
        "webhook"
    }

    async fn deliver(&self, alert: &ExpiryAlert) -> Result<(), NotificationError> {
        let response = self
            .client
            .post(&self.url)
            .json(&Self::payload(alert))
            .send()
            .await
            .map_err(|e| NotificationError::DeliveryFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(NotificationError::DeliveryFailed(format!(
                "webhook returned {}",
                response.status()
            )));
        }

        self.logger
            .debug(&format!("Delivered '{}' to webhook", alert.title));
        Ok(())
    }
}
