//! Implements a struct that holds the state of the REST server.

use crate::stores::TransactionStore;

/// The state of the REST server.
///
/// The store is constructed once at start up and cloned into each request
/// handler, so the store type must be cheap to clone.
#[derive(Debug, Clone)]
pub struct AppState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// The store for managing [transactions](crate::Transaction).
    pub transaction_store: T,
}

impl<T> AppState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// Create a new [AppState].
    pub fn new(transaction_store: T) -> Self {
        Self { transaction_store }
    }
}
