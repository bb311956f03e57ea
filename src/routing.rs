//! Application router configuration.

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::{
    AppState,
    balance::get_balance_endpoint,
    endpoints,
    logging::logging_middleware,
    stores::TransactionStore,
    transaction::{
        create_transaction_endpoint, delete_transaction_endpoint, edit_transaction_endpoint,
        get_transaction_endpoint, get_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Cross-origin requests are allowed from any origin.
pub fn build_router<T>(state: AppState<T>) -> Router
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions_endpoint::<T>).post(create_transaction_endpoint::<T>),
        )
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint::<T>)
                .put(edit_transaction_endpoint::<T>)
                .delete(delete_transaction_endpoint::<T>),
        )
        .route(endpoints::BALANCE, get(get_balance_endpoint::<T>))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .layer(cors)
        .with_state(state)
}

async fn get_404_not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" }))).into_response()
}
