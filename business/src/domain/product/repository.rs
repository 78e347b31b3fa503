use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Product;

/// Source of the product list the expiry checks run over.
///
/// Implementations either query the backend for one user's products or read
/// a local snapshot, in which case `user_id` may be ignored.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn get_all(&self, user_id: Option<UserId>) -> Result<Vec<Product>, RepositoryError>;
}
