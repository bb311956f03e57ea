use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;

use crate::{
    AppState, Error,
    database_id::TransactionId,
    stores::{TransactionStore, run_blocking},
    transaction::{Transaction, TransactionForm},
};

/// A route handler for replacing the type, details and amount of a transaction.
///
/// Responds with the updated transaction, or 404 Not Found if the transaction
/// does not exist. Nothing is created for a missing ID.
pub async fn edit_transaction_endpoint<T>(
    State(state): State<AppState<T>>,
    WithRejection(Path(transaction_id), _): WithRejection<Path<TransactionId>, Error>,
    form: TransactionForm,
) -> Result<Json<Transaction>, Error>
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    let new_transaction = form.validate()?;
    let transaction = run_blocking(&state.transaction_store, move |store| {
        store.update(transaction_id, new_transaction)
    })
    .await?;

    tracing::debug!("Updated transaction {transaction_id}");

    Ok(Json(transaction))
}
