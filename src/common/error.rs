use aws_sdk_dynamodb::error::{self, ProvideErrorMetadata};
use lambda_http::http::StatusCode;
use serde::Serialize;
use serde_json::{Value, json};

/// A request that parsed but breaks a business rule.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// The `customerId` path parameter (or body field on create) is absent or empty.
    #[error("CustomerId is required")]
    MissingCustomerId,
    /// `contactInfoList` is absent or has no entries.
    #[error("Contact list cannot be empty.")]
    EmptyContactList,
    /// No entry of `contactInfoList` has `isPrimary` set.
    #[error("At least one contact must be marked as primary.")]
    NoPrimaryContact,
    /// A required field is absent or empty.
    #[error("{0} is required")]
    MissingField(&'static str),
    /// An update body carried none of the updatable fields.
    #[error("No update fields provided")]
    NoUpdateFields,
}

/// Failure reported by the backing store, passed through to the caller as is.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, thiserror::Error)]
#[error("{message}")]
pub struct StoreError {
    /// The service error code (`ProvisionedThroughputExceededException`, ...), when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// The human readable error message.
    pub message: String,
}

impl<E, R> From<error::SdkError<E, R>> for StoreError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    fn from(err: error::SdkError<E, R>) -> Self {
        let code = err.code().map(ToOwned::to_owned);
        let message = match err.message() {
            Some(message) => message.to_owned(),
            None => error::DisplayErrorContext(&err).to_string(),
        };
        Self { code, message }
    }
}

impl From<serde_dynamo::Error> for StoreError {
    fn from(err: serde_dynamo::Error) -> Self {
        Self {
            code: None,
            message: err.to_string(),
        }
    }
}

/// Every way a customer operation can fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request body is not well-formed JSON for the expected shape.
    #[error("Invalid request body")]
    MalformedInput(#[source] serde_json::Error),
    /// The request is well-formed but violates a business rule.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The store call failed; `context` names the operation that was attempted.
    #[error("{context}")]
    Store {
        /// Caller facing summary such as "Error creating customer".
        context: &'static str,
        /// The underlying store failure.
        #[source]
        source: StoreError,
    },
}

impl Error {
    pub(crate) fn store(context: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Store { context, source }
    }

    /// HTTP status reported for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedInput(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Response body: always a `message`, plus the underlying `error` where one exists.
    pub fn body(&self) -> Value {
        match self {
            Self::MalformedInput(source) => json!({
                "message": self.to_string(),
                "error": source.to_string(),
            }),
            Self::Validation(_) => json!({ "message": self.to_string() }),
            Self::Store { source, .. } => json!({
                "message": self.to_string(),
                "error": source,
            }),
        }
    }
}
