//! Defines the transaction store trait.

use crate::{
    Error,
    database_id::TransactionId,
    transaction::{NewTransaction, Transaction},
};

/// Handles the creation, retrieval, modification and deletion of transactions.
///
/// Each method maps to a single statement against the backing store.
pub trait TransactionStore {
    /// Create a new transaction in the store.
    ///
    /// The store assigns the ID and the date of the transaction.
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Retrieve every transaction, most recent first.
    fn get_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Retrieve a transaction from the store.
    ///
    /// Returns [Error::NotFound] if `id` does not refer to a transaction.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Replace the type, details and amount of the transaction `id`.
    ///
    /// Returns [Error::NotFound] if `id` does not refer to a transaction.
    fn update(&self, id: TransactionId, transaction: NewTransaction)
    -> Result<Transaction, Error>;

    /// Delete the transaction `id`, returning the deleted transaction.
    ///
    /// Returns [Error::NotFound] if `id` does not refer to a transaction.
    fn delete(&self, id: TransactionId) -> Result<Transaction, Error>;

    /// Sum the amounts of every transaction with the type `transaction_type`.
    ///
    /// Returns zero when no transaction has that type.
    fn sum_by_type(&self, transaction_type: &str) -> Result<f64, Error>;
}
