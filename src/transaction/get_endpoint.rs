use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;

use crate::{
    AppState, Error,
    database_id::TransactionId,
    stores::{TransactionStore, run_blocking},
    transaction::Transaction,
};

/// A route handler for listing every transaction, most recent first.
pub async fn get_transactions_endpoint<T>(
    State(state): State<AppState<T>>,
) -> Result<Json<Vec<Transaction>>, Error>
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    run_blocking(&state.transaction_store, |store| store.get_all())
        .await
        .map(Json)
}

/// A route handler for getting a transaction by its database ID.
///
/// Responds with 404 Not Found if the transaction does not exist.
pub async fn get_transaction_endpoint<T>(
    State(state): State<AppState<T>>,
    WithRejection(Path(transaction_id), _): WithRejection<Path<TransactionId>, Error>,
) -> Result<Json<Transaction>, Error>
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    run_blocking(&state.transaction_store, move |store| store.get(transaction_id))
        .await
        .map(Json)
}
