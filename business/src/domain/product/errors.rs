#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.source_unavailable")]
    SourceUnavailable,
    #[error("product.invalid_payload")]
    InvalidPayload,
    #[error("repository.persistence")]
    Repository(crate::domain::errors::RepositoryError),
}

impl From<crate::domain::errors::RepositoryError> for ProductError {
    fn from(err: crate::domain::errors::RepositoryError) -> Self {
        use crate::domain::errors::RepositoryError;
        match err {
            RepositoryError::Unavailable => ProductError::SourceUnavailable,
            RepositoryError::InvalidPayload => ProductError::InvalidPayload,
            other => ProductError::Repository(other),
        }
    }
}
