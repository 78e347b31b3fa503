use serde::{Deserialize, Deserializer, Serialize};

use super::value_objects::ProductId;

/// Label used in alert text when a product has no name.
pub const FALLBACK_PRODUCT_NAME: &str = "Product";

/// Read-only projection of a backend product.
///
/// Only the fields the expiry checks need are kept. `exp_date` is the raw
/// calendar date string and may be malformed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: Option<ProductId>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(
        rename = "expDate",
        alias = "exp_date",
        default,
        deserialize_with = "null_as_empty"
    )]
    pub exp_date: String,
}

impl Product {
    pub fn new(id: Option<ProductId>, name: impl Into<String>, exp_date: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            exp_date: exp_date.into(),
        }
    }

    /// Name shown to the user, with a generic label for unnamed products.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            FALLBACK_PRODUCT_NAME
        } else {
            &self.name
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
