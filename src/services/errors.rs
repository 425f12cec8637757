use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Failures surfaced by the service layer. Absence of a record is the only
/// failure the services themselves recognize; anything else the storage
/// boundary reported passes through unmodified.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Resource not found")]
    NotFound,

    #[error(transparent)]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}
