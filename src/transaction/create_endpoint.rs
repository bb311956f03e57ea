use axum::{Json, extract::State, http::StatusCode};

use crate::{
    AppState, Error,
    stores::{TransactionStore, run_blocking},
    transaction::{Transaction, TransactionForm},
};

/// A route handler for creating a new transaction.
///
/// Responds with 201 Created and the new transaction on success.
pub async fn create_transaction_endpoint<T>(
    State(state): State<AppState<T>>,
    form: TransactionForm,
) -> Result<(StatusCode, Json<Transaction>), Error>
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    let new_transaction = form.validate()?;
    let transaction = run_blocking(&state.transaction_store, move |store| {
        store.create(new_transaction)
    })
    .await?;

    tracing::debug!("Created transaction {}", transaction.id);

    Ok((StatusCode::CREATED, Json(transaction)))
}
