//! The four customer operations.
//!
//! Each operation is a single request, validate, store call, reply pipeline.
//! Operations return [`Error`] on failure; [`Reply::from`] turns it into the
//! caller facing response.

/// Create (upsert) a customer.
pub mod create_customer;

/// Delete a customer.
pub mod delete_customer;

/// Read a customer.
pub mod read_customer;

/// Partially update a customer.
pub mod update_customer;

pub use create_customer::create_customer;
pub use delete_customer::delete_customer;
pub use read_customer::read_customer;
pub use update_customer::update_customer;

use crate::common::{Item, error::Error};

use lambda_http::http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Status and JSON body of an operation outcome.
#[derive(Clone, Debug, PartialEq)]
pub struct Reply {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response body; `None` renders as an empty body.
    pub body: Option<Value>,
}

impl Reply {
    pub(crate) fn json(status: StatusCode, body: Value) -> Self {
        Self {
            status,
            body: Some(body),
        }
    }

    pub(crate) fn message(status: StatusCode, message: &str) -> Self {
        Self::json(status, json!({ "message": message }))
    }
}

impl From<Error> for Reply {
    fn from(error: Error) -> Self {
        Self::json(error.status(), error.body())
    }
}

/// Parse a JSON request body; an empty body reads as `{}`.
pub(crate) fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, Error> {
    let body = if body.is_empty() { b"{}".as_slice() } else { body };
    serde_json::from_slice(body).map_err(Error::MalformedInput)
}

/// Strip the store's attribute tags from a record.
pub(crate) fn untag(item: Item) -> Result<Value, serde_dynamo::Error> {
    serde_dynamo::from_item(item)
}
