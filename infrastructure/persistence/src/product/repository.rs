use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;

use business::domain::errors::RepositoryError;
use business::domain::logger::Logger;
use business::domain::product::model::Product;
use business::domain::product::repository::ProductRepository;
use business::domain::shared::value_objects::UserId;

use super::entity::ProductEntity;

/// Reads products from a JSON array on disk.
pub struct ProductRepositoryJsonFile {
    path: PathBuf,
    logger: Arc<dyn Logger>,
}

impl ProductRepositoryJsonFile {
    pub fn new(path: impl Into<PathBuf>, logger: Arc<dyn Logger>) -> Self {
        Self {
            path: path.into(),
            logger,
        }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryJsonFile {
    async fn get_all(&self, user_id: Option<UserId>) -> Result<Vec<Product>, RepositoryError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            self.logger
                .warn(&format!("Failed to read {}: {}", self.path.display(), e));
            match e.kind() {
                std::io::ErrorKind::NotFound => RepositoryError::NotFound,
                _ => RepositoryError::ReadFailed,
            }
        })?;

        let entities: Vec<ProductEntity> = serde_json::from_str(&raw).map_err(|e| {
            self.logger
                .warn(&format!("Invalid product file {}: {}", self.path.display(), e));
            RepositoryError::InvalidPayload
        })?;

        Ok(entities
            .into_iter()
            .filter(|e| user_id.as_ref().is_none_or(|u| e.belongs_to(u)))
            .map(|e| e.into_domain())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logger::TracingLogger;

    fn repository(path: impl Into<PathBuf>) -> ProductRepositoryJsonFile {
        ProductRepositoryJsonFile::new(path, Arc::new(TracingLogger::new("persistence")))
    }

    fn write_snapshot(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "expiry-guard-{}-{}.json",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[tokio::test]
    async fn should_read_products_from_snapshot() {
        let path = write_snapshot(
            "read",
            r#"[{"id":1,"name":"Milk","expDate":"2025-06-13","batch":"A1"},{"name":"Jam","expDate":"bad"}]"#,
        );

        let products = repository(&path)
            .get_all(None)
            .await
            .unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].name, "Milk");
        assert_eq!(products[1].exp_date, "bad");
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn should_keep_only_the_users_products() {
        let path = write_snapshot(
            "user",
            r#"[{"id":1,"name":"Milk","expDate":"2025-06-13","user":4},{"id":2,"name":"Eggs","expDate":"2025-06-13","user":5},{"id":3,"name":"Salt","expDate":"2030-01-01"}]"#,
        );

        let products = repository(&path)
            .get_all(Some(UserId::new("4")))
            .await
            .unwrap();

        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Milk", "Salt"]);
        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn should_report_missing_and_invalid_files() {
        let missing = repository("/nonexistent/expiry-guard.json");
        assert!(matches!(
            missing.get_all(None).await,
            Err(RepositoryError::NotFound)
        ));

        let path = write_snapshot("invalid", "{\"not\":\"a list\"}");
        let invalid = repository(&path);
        assert!(matches!(
            invalid.get_all(None).await,
            Err(RepositoryError::InvalidPayload)
        ));
        std::fs::remove_file(path).unwrap();
    }
}
