use std::sync::Arc;

use async_trait::async_trait;
use reqwest::StatusCode;

use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::notification::repository::{UserSettings, UserSettingsRepository};
use business::domain::shared::value_objects::UserId;

use crate::client::BackendClient;

pub struct UserSettingsRepositoryHttp {
    client: BackendClient,
    logger: Arc<dyn Logger>,
}

impl UserSettingsRepositoryHttp {
    pub fn new(client: BackendClient, logger: Arc<dyn Logger>) -> Self {
        Self { client, logger }
    }
}

#[async_trait]
impl UserSettingsRepository for UserSettingsRepositoryHttp {
    async fn get(&self, user_id: &UserId) -> Result<UserSettings, RepositoryError> {
        let url = self.client.settings_url(user_id);

        let response = self.client.get(&url).send().await.map_err(|e| {
            self.logger
                .warn(&format!("Settings request to {} failed: {}", url, e));
            RepositoryError::Unavailable
        })?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(RepositoryError::NotFound),
            status if !status.is_success() => {
                self.logger
                    .warn(&format!("Settings request to {} returned {}", url, status));
                return Err(RepositoryError::Unavailable);
            }
            _ => {}
        }

        response.json::<UserSettings>().await.map_err(|e| {
            self.logger
                .warn(&format!("Unexpected settings payload from {}: {}", url, e));
            RepositoryError::InvalidPayload
        })
    }
}
