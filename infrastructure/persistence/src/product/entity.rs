use serde::Deserialize;
use serde_json::Value;

use business::domain::product::model::Product;
use business::domain::shared::value_objects::UserId;

/// One entry of a product snapshot file.
///
/// Snapshots are saved backend responses, so entries may carry the owning
/// user (numeric or string id) next to the product fields.
#[derive(Debug, Deserialize)]
pub struct ProductEntity {
    #[serde(flatten)]
    pub product: Product,
    #[serde(default)]
    pub user: Option<Value>,
}

impl ProductEntity {
    /// Entries without an owner belong to everyone.
    pub fn belongs_to(&self, user_id: &UserId) -> bool {
        match &self.user {
            Some(Value::Number(owner)) => owner.to_string() == user_id.as_str(),
            Some(Value::String(owner)) => owner == user_id.as_str(),
            Some(_) | None => true,
        }
    }

    pub fn into_domain(self) -> Product {
        self.product
    }
}
