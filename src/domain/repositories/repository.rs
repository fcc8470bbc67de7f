use thiserror::Error;

pub type RepositoryResult<T> = core::result::Result<T, RepositoryError>;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Database(#[from] surrealdb::Error),
    #[error("Store unavailable: {0}")]
    Unavailable(String),
    #[error("Record already exists: {0}")]
    Conflict(String),
}
