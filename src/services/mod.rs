use std::future::Future;
use std::time::Duration;

use thiserror::Error;

pub mod account;
pub mod notification;
pub mod translation;

#[derive(Debug, Error)]
pub enum DeadlineError<E> {
    #[error("{0}")]
    Failed(E),
    #[error("timed out after {}ms", .0.as_millis())]
    Elapsed(Duration),
}

/// Runs one external call, giving up once `limit` has passed.
pub async fn with_deadline<T, E, F>(limit: Duration, call: F) -> Result<T, DeadlineError<E>>
where
    F: Future<Output = Result<T, E>>,
{
    match tokio::time::timeout(limit, call).await {
        Ok(result) => result.map_err(DeadlineError::Failed),
        Err(_) => Err(DeadlineError::Elapsed(limit)),
    }
}
