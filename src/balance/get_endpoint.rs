use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    balance::{Balance, get_balance},
    stores::{TransactionStore, run_blocking},
};

/// A route handler for the balance across all transactions.
pub async fn get_balance_endpoint<T>(
    State(state): State<AppState<T>>,
) -> Result<Json<Balance>, Error>
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    run_blocking(&state.transaction_store, get_balance)
        .await
        .map(Json)
}
