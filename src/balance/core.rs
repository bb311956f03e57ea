//! Computes the balance from the stored transactions.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{CAPITAL, EXPENSE},
};

/// The money received, spent, and left over across all transactions.
///
/// The balance is never stored, it is computed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Balance {
    /// The sum of all "Capital" transactions.
    pub total_capital: f64,
    /// The sum of all "Expense" transactions.
    pub total_expenses: f64,
    /// `total_capital - total_expenses`.
    pub remaining_balance: f64,
}

impl Balance {
    /// Create a balance from the capital and expense totals.
    pub fn new(total_capital: f64, total_expenses: f64) -> Self {
        Self {
            total_capital,
            total_expenses,
            remaining_balance: total_capital - total_expenses,
        }
    }
}

/// Sum the capital and expense transactions in `store`.
///
/// Transactions of any other type are ignored.
///
/// # Errors
/// Returns an error if either sum cannot be read from the store.
pub fn get_balance(store: &impl TransactionStore) -> Result<Balance, Error> {
    let total_capital = store.sum_by_type(CAPITAL)?;
    let total_expenses = store.sum_by_type(EXPENSE)?;

    Ok(Balance::new(total_capital, total_expenses))
}
