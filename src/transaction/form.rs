//! The request body shared by the create and edit transaction endpoints.

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, transaction::NewTransaction};

/// The JSON body for creating or replacing a transaction.
///
/// Fields are kept as raw JSON values so that any falsy value (absent, `null`,
/// `false`, `0` or `""`) produces [Error::MissingFields] rather than a type
/// error. A request with an empty body, or a body that is not marked as JSON,
/// is treated as an empty form.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct TransactionForm {
    /// The kind of transaction, e.g. "Capital" or "Expense".
    #[serde(rename = "type")]
    pub transaction_type: Option<Value>,
    /// A text description of what the transaction was for.
    pub details: Option<Value>,
    /// The amount of money received or spent.
    pub amount: Option<Value>,
}

impl TransactionForm {
    /// Check that every field is present and truthy, then that each field has
    /// the expected JSON type.
    ///
    /// # Errors
    /// Returns:
    /// - [Error::MissingFields] if any field is absent, `null`, `false`, `0` or `""`,
    /// - or [Error::InvalidRequest] if `type` or `details` is not a string, or
    ///   `amount` is not a number.
    pub fn validate(self) -> Result<NewTransaction, Error> {
        if ![&self.transaction_type, &self.details, &self.amount]
            .into_iter()
            .all(is_truthy)
        {
            return Err(Error::MissingFields);
        }

        Ok(NewTransaction {
            transaction_type: expect_string(self.transaction_type, "type")?,
            details: expect_string(self.details, "details")?,
            amount: expect_number(self.amount, "amount")?,
        })
    }
}

impl<S> FromRequest<S> for TransactionForm
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = request
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|content_type| content_type.to_str().ok())
            .is_some_and(is_json_content_type);

        let body = Bytes::from_request(request, state)
            .await
            .map_err(|rejection| Error::InvalidRequest(rejection.body_text()))?;

        if !is_json || body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }

        let Json(form) = Json::<Self>::from_bytes(&body)?;

        Ok(form)
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

fn is_truthy(value: &Option<Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => false,
        Some(Value::String(text)) => !text.is_empty(),
        Some(Value::Number(number)) => number.as_f64().is_some_and(|number| number != 0.0),
        Some(_) => true,
    }
}

fn expect_string(value: Option<Value>, field: &str) -> Result<String, Error> {
    match value {
        Some(Value::String(text)) => Ok(text),
        other => Err(Error::InvalidRequest(format!(
            "{field}: expected a string, got {}",
            other.unwrap_or_default()
        ))),
    }
}

fn expect_number(value: Option<Value>, field: &str) -> Result<f64, Error> {
    match value.as_ref().and_then(Value::as_f64) {
        Some(number) => Ok(number),
        None => Err(Error::InvalidRequest(format!(
            "{field}: expected a number, got {}",
            value.unwrap_or_default()
        ))),
    }
}
