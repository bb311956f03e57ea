//! Contains traits and implementations for objects that store the domain models.

mod transaction;

pub mod sqlite;

pub use transaction::TransactionStore;

use tokio::task;

use crate::Error;

/// Run `operation` against a clone of `store` on tokio's blocking thread pool.
///
/// Store methods wait on a lock and on disk I/O, so handlers call them through
/// this function to keep the async worker threads free.
///
/// # Errors
/// Returns the error from `operation`, or [Error::BlockingTaskFailed] if the
/// task panicked or was cancelled.
pub async fn run_blocking<T, R, F>(store: &T, operation: F) -> Result<R, Error>
where
    T: TransactionStore + Clone + Send + 'static,
    R: Send + 'static,
    F: FnOnce(&T) -> Result<R, Error> + Send + 'static,
{
    let store = store.clone();

    task::spawn_blocking(move || operation(&store))
        .await
        .map_err(|error| {
            tracing::error!("Store task failed: {error}");
            Error::BlockingTaskFailed(error.to_string())
        })?
}
