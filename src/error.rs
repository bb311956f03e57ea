//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A create or update request was missing one of `type`, `details` or
    /// `amount`, or one of them was empty or zero.
    #[error("All fields are required")]
    MissingFields,

    /// The request could not be understood, e.g. the body was not valid JSON,
    /// a field had the wrong JSON type, or the transaction ID was not an
    /// integer.
    #[error("{0}")]
    InvalidRequest(String),

    /// The requested transaction was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("Transaction not found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    ///
    /// The message of the underlying error is sent to the client as is.
    #[error("{0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// The blocking task running a store operation panicked or was cancelled.
    #[error("the store task failed: {0}")]
    BlockingTaskFailed(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        Error::InvalidRequest(rejection.body_text())
    }
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingFields | Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            Error::NotFound => StatusCode::NOT_FOUND,
            Error::SqlError(_) | Error::DatabaseLockError | Error::BlockingTaskFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Responding with {status}: {self}");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{body::to_bytes, http::StatusCode, response::IntoResponse};
    use serde_json::{Value, json};

    use super::Error;

    async fn into_parts(error: Error) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, serde_json::from_slice(&body).unwrap())
    }

    #[test]
    fn no_rows_maps_to_not_found() {
        assert_eq!(
            Error::from(rusqlite::Error::QueryReturnedNoRows),
            Error::NotFound
        );
    }

    #[tokio::test]
    async fn missing_fields_is_bad_request() {
        let (status, body) = into_parts(Error::MissingFields).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "All fields are required" }));
    }

    #[tokio::test]
    async fn not_found_message() {
        let (status, body) = into_parts(Error::NotFound).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Transaction not found" }));
    }

    #[tokio::test]
    async fn sql_error_passes_message_through() {
        let error = rusqlite::Error::InvalidColumnName("foo".to_owned());
        let want_message = error.to_string();

        let (status, body) = into_parts(Error::SqlError(error)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": want_message }));
    }

    #[tokio::test]
    async fn blocking_task_failure_is_internal_server_error() {
        let (status, _) = into_parts(Error::BlockingTaskFailed("task panicked".to_owned())).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
