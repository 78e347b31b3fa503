/// Repository errors for domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.read_failed")]
    ReadFailed,
    #[error("repository.write_failed")]
    WriteFailed,
    #[error("repository.unavailable")]
    Unavailable,
    #[error("repository.invalid_payload")]
    InvalidPayload,
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn read_failed() -> Self {
        RepositoryError::ReadFailed
    }
    pub fn write_failed() -> Self {
        RepositoryError::WriteFailed
    }
    pub fn unavailable() -> Self {
        RepositoryError::Unavailable
    }
    pub fn invalid_payload() -> Self {
        RepositoryError::InvalidPayload
    }
}
