use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError> {
        match &params.user_id {
            Some(user_id) => self
                .logger
                .info(&format!("Fetching products for user {}", user_id)),
            None => self.logger.info("Fetching products"),
        }

        let products = self
            .repository
            .get_all(params.user_id.clone())
            .await
            .inspect_err(|e| self.logger.error(&format!("Could not load products: {}", e)))?;

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}
