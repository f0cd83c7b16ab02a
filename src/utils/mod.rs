//! Project-specific utilities live here.

use anyhow::Context;
use bookshelf_http::AppError;

/// Run blocking store work on the blocking thread pool.
pub async fn blocking<T, E, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Into<AppError> + Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .context("blocking store task failed")?
        .map_err(Into::into)
}
