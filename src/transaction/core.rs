//! Defines the core data models and the database schema for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::database_id::TransactionId;

/// The transaction type for incoming funds, counted as credit in the balance.
pub const CAPITAL: &str = "Capital";
/// The transaction type for outgoing funds, counted as debit in the balance.
pub const EXPENSE: &str = "Expense";

// ============================================================================
// MODELS
// ============================================================================

/// An event where money was either received or spent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The kind of transaction, e.g. [CAPITAL] or [EXPENSE].
    ///
    /// Any other value is stored as is but does not count towards the balance.
    #[serde(rename = "type")]
    pub transaction_type: String,
    /// A text description of what the transaction was for.
    pub details: String,
    /// The amount of money received or spent in this transaction.
    pub amount: f64,
    /// When the transaction was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
}

/// The fields of a [Transaction] that are supplied by the client.
///
/// A `NewTransaction` can only be obtained from a
/// [TransactionForm](crate::transaction::TransactionForm) that has every field
/// set, see [TransactionForm::validate](crate::transaction::TransactionForm::validate).
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// The kind of transaction, e.g. [CAPITAL] or [EXPENSE].
    pub transaction_type: String,
    /// A text description of what the transaction was for.
    pub details: String,
    /// The amount of money received or spent.
    pub amount: f64,
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                type TEXT NOT NULL,
                details TEXT NOT NULL,
                amount REAL NOT NULL,
                date TEXT NOT NULL
                )",
        (),
    )?;

    // Listing sorts on date.
    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
///
/// Expects the columns in the order `id, type, details, amount, date`.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let transaction_type = row.get(1)?;
    let details = row.get(2)?;
    let amount = row.get(3)?;
    let date = row.get(4)?;

    Ok(Transaction {
        id,
        transaction_type,
        details,
        amount,
        date,
    })
}
