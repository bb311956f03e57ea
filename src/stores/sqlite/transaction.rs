//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::Connection;
use time::OffsetDateTime;

use crate::{
    Error,
    database_id::TransactionId,
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction, map_transaction_row},
};

/// Stores transactions in a SQLite database.
///
/// The `transactions` table must exist, see [crate::initialize_db].
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, Error> {
        self.connection.lock().map_err(|error| {
            tracing::error!("Could not acquire the database lock: {error}");
            Error::DatabaseLockError
        })
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// Create a new transaction in the database, dated now (UTC).
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL error.
    fn create(&self, transaction: NewTransaction) -> Result<Transaction, Error> {
        let transaction = self
            .lock()?
            .prepare(
                "INSERT INTO transactions (type, details, amount, date)
                 VALUES (?1, ?2, ?3, ?4)
                 RETURNING id, type, details, amount, date",
            )?
            .query_row(
                (
                    transaction.transaction_type,
                    transaction.details,
                    transaction.amount,
                    OffsetDateTime::now_utc(),
                ),
                map_transaction_row,
            )?;

        Ok(transaction)
    }

    /// Retrieve all transactions ordered by date, most recent first.
    ///
    /// Transactions with the same date are ordered by descending ID.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL error.
    fn get_all(&self) -> Result<Vec<Transaction>, Error> {
        self.lock()?
            .prepare(
                "SELECT id, type, details, amount, date FROM transactions
                 ORDER BY date DESC, id DESC",
            )?
            .query_map([], map_transaction_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    /// Retrieve a transaction in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::SqlError] there is some other SQL error.
    fn get(&self, id: TransactionId) -> Result<Transaction, Error> {
        let transaction = self
            .lock()?
            .prepare("SELECT id, type, details, amount, date FROM transactions WHERE id = :id")?
            .query_row(&[(":id", &id)], map_transaction_row)?;

        Ok(transaction)
    }

    /// Replace the type, details and amount of a transaction in one statement.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::SqlError] there is some other SQL error.
    fn update(
        &self,
        id: TransactionId,
        transaction: NewTransaction,
    ) -> Result<Transaction, Error> {
        let transaction = self
            .lock()?
            .prepare(
                "UPDATE transactions SET type = ?1, details = ?2, amount = ?3
                 WHERE id = ?4
                 RETURNING id, type, details, amount, date",
            )?
            .query_row(
                (
                    transaction.transaction_type,
                    transaction.details,
                    transaction.amount,
                    id,
                ),
                map_transaction_row,
            )?;

        Ok(transaction)
    }

    /// Delete a transaction in the database by its `id`.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::NotFound] if `id` does not refer to a valid transaction,
    /// - or [Error::SqlError] there is some other SQL error.
    fn delete(&self, id: TransactionId) -> Result<Transaction, Error> {
        let transaction = self
            .lock()?
            .prepare(
                "DELETE FROM transactions WHERE id = :id
                 RETURNING id, type, details, amount, date",
            )?
            .query_row(&[(":id", &id)], map_transaction_row)?;

        Ok(transaction)
    }

    /// Sum the amounts of all transactions of one type.
    ///
    /// # Errors
    /// This function will return an [Error::SqlError] if there is an SQL error.
    fn sum_by_type(&self, transaction_type: &str) -> Result<f64, Error> {
        let total: Option<f64> = self.lock()?.query_row(
            "SELECT COALESCE(SUM(amount), 0.0) FROM transactions WHERE type = ?1",
            [transaction_type],
            |row| row.get(0),
        )?;

        Ok(total.unwrap_or_default())
    }
}

#[cfg(test)]
mod sqlite_transaction_store_tests {
    use rusqlite::Connection;

    use crate::{
        Error,
        stores::{
            TransactionStore,
            sqlite::{SQLiteTransactionStore, create_app_state},
        },
        transaction::{CAPITAL, EXPENSE, NewTransaction},
    };

    fn get_store() -> SQLiteTransactionStore {
        let connection = Connection::open_in_memory().unwrap();
        create_app_state(connection).unwrap().transaction_store
    }

    fn new_transaction(transaction_type: &str, details: &str, amount: f64) -> NewTransaction {
        NewTransaction {
            transaction_type: transaction_type.to_owned(),
            details: details.to_owned(),
            amount,
        }
    }

    #[test]
    fn create_assigns_id() {
        let store = get_store();

        let first = store
            .create(new_transaction(CAPITAL, "seed", 1000.0))
            .expect("Could not create transaction");
        let second = store
            .create(new_transaction(EXPENSE, "rent", 300.0))
            .expect("Could not create transaction");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(second.transaction_type, EXPENSE);
        assert_eq!(second.details, "rent");
        assert_eq!(second.amount, 300.0);
    }

    #[test]
    fn get_returns_created_transaction() {
        let store = get_store();
        let want = store
            .create(new_transaction(CAPITAL, "seed", 1000.0))
            .unwrap();

        let got = store.get(want.id).expect("Could not get transaction");

        assert_eq!(want, got);
    }

    #[test]
    fn get_fails_on_missing_id() {
        let store = get_store();

        assert_eq!(store.get(42), Err(Error::NotFound));
    }

    #[test]
    fn get_all_is_empty_for_new_database() {
        let store = get_store();

        assert_eq!(store.get_all(), Ok(vec![]));
    }

    #[test]
    fn get_all_orders_by_date_descending() {
        let store = get_store();
        let created: Vec<_> = (1..=5)
            .map(|i| {
                store
                    .create(new_transaction(EXPENSE, &format!("item {i}"), i as f64))
                    .unwrap()
            })
            .collect();

        let got = store.get_all().expect("Could not get transactions");

        let want: Vec<_> = created.into_iter().rev().collect();
        assert_eq!(want, got);
        assert!(got.windows(2).all(|pair| pair[0].date >= pair[1].date));
    }

    #[test]
    fn update_replaces_fields() {
        let store = get_store();
        let original = store
            .create(new_transaction(EXPENSE, "rent", 300.0))
            .unwrap();

        let updated = store
            .update(original.id, new_transaction(CAPITAL, "refund", 45.5))
            .expect("Could not update transaction");

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.date, original.date);
        assert_eq!(updated.transaction_type, CAPITAL);
        assert_eq!(updated.details, "refund");
        assert_eq!(updated.amount, 45.5);
        assert_eq!(store.get(original.id), Ok(updated));
    }

    #[test]
    fn update_fails_on_missing_id() {
        let store = get_store();

        let result = store.update(7, new_transaction(CAPITAL, "seed", 1.0));

        assert_eq!(result, Err(Error::NotFound));
        assert_eq!(store.get_all(), Ok(vec![]));
    }

    #[test]
    fn delete_removes_transaction() {
        let store = get_store();
        let transaction = store
            .create(new_transaction(CAPITAL, "seed", 1000.0))
            .unwrap();

        let deleted = store
            .delete(transaction.id)
            .expect("Could not delete transaction");

        assert_eq!(deleted, transaction);
        assert_eq!(store.get(transaction.id), Err(Error::NotFound));
    }

    #[test]
    fn delete_fails_on_missing_id() {
        let store = get_store();

        assert_eq!(store.delete(3), Err(Error::NotFound));
    }

    #[test]
    fn sum_by_type_is_zero_without_transactions() {
        let store = get_store();

        assert_eq!(store.sum_by_type(CAPITAL), Ok(0.0));
    }

    #[test]
    fn sum_by_type_only_counts_matching_type() {
        let store = get_store();
        for transaction in [
            new_transaction(CAPITAL, "seed", 1000.0),
            new_transaction(CAPITAL, "top up", 250.5),
            new_transaction(EXPENSE, "rent", 300.0),
            new_transaction("Transfer", "savings", 99.0),
            new_transaction("capital", "wrong case", 1.0),
        ] {
            store.create(transaction).unwrap();
        }

        assert_eq!(store.sum_by_type(CAPITAL), Ok(1250.5));
        assert_eq!(store.sum_by_type(EXPENSE), Ok(300.0));
    }

    #[test]
    fn sql_errors_are_passed_through() {
        let store = get_store();
        store
            .lock()
            .unwrap()
            .execute("DROP TABLE transactions", [])
            .unwrap();

        let result = store.get_all();

        match result {
            Err(Error::SqlError(error)) => {
                assert!(
                    error.to_string().contains("no such table"),
                    "unexpected SQL error message: {error}"
                )
            }
            other => panic!("want SQL error, got {other:?}"),
        }
    }
}
