//! Transaction management for the ledger.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and the database schema
//! - The JSON form used to create and edit transactions
//! - Route handlers for creating, listing, fetching, editing and deleting transactions

mod core;
mod create_endpoint;
mod delete_endpoint;
mod edit_endpoint;
mod form;
mod get_endpoint;

pub use core::{
    CAPITAL, EXPENSE, NewTransaction, Transaction, create_transaction_table, map_transaction_row,
};
pub use create_endpoint::create_transaction_endpoint;
pub use delete_endpoint::delete_transaction_endpoint;
pub use edit_endpoint::edit_transaction_endpoint;
pub use form::TransactionForm;
pub use get_endpoint::{get_transaction_endpoint, get_transactions_endpoint};
