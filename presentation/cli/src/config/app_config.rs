use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://expiry-guard.db?mode=rwc";
pub const DEFAULT_PRODUCTS_FILE: &str = "products.json";
pub const DEFAULT_APP_NAME: &str = "ExpiryGuard";

/// Connection to the ExpiryGuard backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub api_url: String,
    pub api_token: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    /// Products come from the backend when set, from `products_file` otherwise.
    pub backend: Option<BackendConfig>,
    pub products_file: PathBuf,
    pub webhook_url: Option<String>,
    pub app_name: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - EXPIRY_GUARD_DATABASE_URL (default: "sqlite://expiry-guard.db?mode=rwc")
    /// - EXPIRY_GUARD_API_URL, EXPIRY_GUARD_API_TOKEN (optional)
    /// - EXPIRY_GUARD_PRODUCTS_FILE (default: "products.json")
    /// - EXPIRY_GUARD_WEBHOOK_URL (optional)
    /// - EXPIRY_GUARD_APP_NAME (default: "ExpiryGuard")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        // blank values count as unset
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let backend = var("EXPIRY_GUARD_API_URL").map(|api_url| BackendConfig {
            api_url,
            api_token: var("EXPIRY_GUARD_API_TOKEN"),
        });

        Self {
            database_url: var("EXPIRY_GUARD_DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            backend,
            products_file: var("EXPIRY_GUARD_PRODUCTS_FILE")
                .unwrap_or_else(|| DEFAULT_PRODUCTS_FILE.to_string())
                .into(),
            webhook_url: var("EXPIRY_GUARD_WEBHOOK_URL"),
            app_name: var("EXPIRY_GUARD_APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string()),
        }
    }
}
