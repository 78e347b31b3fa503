use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::UserId;

use crate::client::BackendClient;

pub struct ProductRepositoryHttp {
    client: BackendClient,
    logger: Arc<dyn Logger>,
}

impl ProductRepositoryHttp {
    pub fn new(client: BackendClient, logger: Arc<dyn Logger>) -> Self {
        Self { client, logger }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryHttp {
    async fn get_all(&self, user_id: Option<UserId>) -> Result<Vec<Product>, RepositoryError> {
        let url = self.client.products_url(user_id.as_ref());

        let response = self.client.get(&url).send().await.map_err(|e| {
            self.logger
                .warn(&format!("Product request to {} failed: {}", url, e));
            RepositoryError::Unavailable
        })?;

        if !response.status().is_success() {
            self.logger.warn(&format!(
                "Product request to {} returned {}",
                url,
                response.status()
            ));
            return Err(RepositoryError::Unavailable);
        }

        response.json::<Vec<Product>>().await.map_err(|e| {
            self.logger
                .warn(&format!("Unexpected product payload from {}: {}", url, e));
            RepositoryError::InvalidPayload
        })
    }
}
