use async_trait::async_trait;

use crate::domain::notification::errors::NotificationError;
use crate::domain::product::model::Product;

pub struct CompactNotifiedSetParams {
    /// Current product list; keys of products not in it are forgotten.
    pub products: Vec<Product>,
}

#[async_trait]
pub trait CompactNotifiedSetUseCase: Send + Sync {
    /// Returns the number of keys removed.
    async fn execute(&self, params: CompactNotifiedSetParams) -> Result<usize, NotificationError>;
}
