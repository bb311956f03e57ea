use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;
use serde::Serialize;

use crate::{
    AppState, Error,
    database_id::TransactionId,
    stores::{TransactionStore, run_blocking},
};

/// The confirmation sent after a transaction is deleted.
#[derive(Debug, PartialEq, Serialize)]
pub struct DeleteTransactionResponse {
    /// Always "Transaction deleted".
    pub message: String,
}

/// A route handler for deleting a transaction.
///
/// Responds with 404 Not Found if the transaction does not exist.
pub async fn delete_transaction_endpoint<T>(
    State(state): State<AppState<T>>,
    WithRejection(Path(transaction_id), _): WithRejection<Path<TransactionId>, Error>,
) -> Result<Json<DeleteTransactionResponse>, Error>
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    run_blocking(&state.transaction_store, move |store| {
        store.delete(transaction_id)
    })
    .await?;

    tracing::debug!("Deleted transaction {transaction_id}");

    Ok(Json(DeleteTransactionResponse {
        message: "Transaction deleted".to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;

    use crate::{
        endpoints::{self, format_endpoint},
        test_utils::{assert_json_content_type, get_test_server, get_test_server_without_tables},
        transaction::Transaction,
    };

    #[tokio::test]
    async fn delete_removes_transaction() {
        let server = get_test_server();
        let created = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({ "type": "Capital", "details": "seed", "amount": 1000 }))
            .await
            .json::<Transaction>();
        let path = format_endpoint(endpoints::TRANSACTION, created.id);

        let response = server.delete(&path).await;

        response.assert_status_ok();
        assert_json_content_type(&response);
        response.assert_json(&json!({ "message": "Transaction deleted" }));
        server.get(&path).await.assert_status_not_found();
    }

    #[tokio::test]
    async fn delete_missing_transaction_is_not_found() {
        let server = get_test_server();

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, 5))
            .await;

        response.assert_status_not_found();
        response.assert_json(&json!({ "error": "Transaction not found" }));
    }

    #[tokio::test]
    async fn delete_twice_is_not_found() {
        let server = get_test_server();
        let created = server
            .post(endpoints::TRANSACTIONS)
            .json(&json!({ "type": "Expense", "details": "rent", "amount": 300 }))
            .await
            .json::<Transaction>();
        let path = format_endpoint(endpoints::TRANSACTION, created.id);

        server.delete(&path).await.assert_status_ok();

        server.delete(&path).await.assert_status_not_found();
    }

    #[tokio::test]
    async fn delete_reports_store_error() {
        let server = get_test_server_without_tables();

        let response = server
            .delete(&format_endpoint(endpoints::TRANSACTION, 1))
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.json::<serde_json::Value>();
        let message = body["error"].as_str().expect("error message missing");
        assert!(
            message.contains("no such table"),
            "unexpected error message: {message}"
        );
    }
}
