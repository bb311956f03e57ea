//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{transaction_id}', use [format_endpoint].

/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route to get, update and delete a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route for the balance derived from all transactions.
pub const BALANCE: &str = "/balance";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// Assumes that `endpoint_path` contains a single parameter in braces,
/// e.g. `/transactions/{transaction_id}`. If there is no parameter,
/// `endpoint_path` is returned unchanged.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    match (endpoint_path.find('{'), endpoint_path.find('}')) {
        (Some(start), Some(end)) if start < end => format!(
            "{}{}{}",
            &endpoint_path[..start],
            id,
            &endpoint_path[end + 1..]
        ),
        _ => endpoint_path.to_owned(),
    }
}
