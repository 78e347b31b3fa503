use reqwest::{Client, RequestBuilder};

use business::domain::shared::value_objects::UserId;

/// Shared HTTP client configuration for the ExpiryGuard backend.
#[derive(Clone)]
pub struct BackendClient {
    pub client: Client,
    pub base_url: String,
    pub token: Option<String>,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()
            .unwrap_or_default();

        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    /// Product list endpoint, scoped to a user when one is given.
    pub fn products_url(&self, user_id: Option<&UserId>) -> String {
        match user_id {
            Some(user_id) => format!("{}/products/?user_id={}", self.base_url, user_id),
            None => format!("{}/products/", self.base_url),
        }
    }

    pub fn settings_url(&self, user_id: &UserId) -> String {
        format!("{}/settings/{}/", self.base_url, user_id)
    }

    /// GET request carrying the bearer token when one is configured.
    pub fn get(&self, url: &str) -> RequestBuilder {
        let request = self.client.get(url).header("Accept", "application/json");
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}
