//! The balance derived from all transactions.

mod core;
mod get_endpoint;

pub use core::{Balance, get_balance};
pub use get_endpoint::get_balance_endpoint;
