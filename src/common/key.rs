use crate::common::error::ValidationError;

use aws_sdk_dynamodb::types;
use std::{collections, fmt};

/// Attribute name of the table's partition key.
pub const PARTITION_KEY: &str = "customerId";

/// Caller assigned customer identifier, the sole lookup key of a record.
///
/// ```rust
/// use customer_crud::common::key;
///
/// let customer_id = key::CustomerId::parse(Some("123")).unwrap();
/// assert_eq!(customer_id.as_str(), "123");
/// assert!(key::CustomerId::parse(Some("")).is_err());
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CustomerId(String);

impl CustomerId {
    /// Parse an identifier, rejecting an absent or empty value.
    pub fn parse(value: Option<&str>) -> Result<Self, ValidationError> {
        match value {
            Some(value) if !value.is_empty() => Ok(Self(value.to_string())),
            _ => Err(ValidationError::MissingCustomerId),
        }
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&CustomerId> for collections::HashMap<String, types::AttributeValue> {
    fn from(customer_id: &CustomerId) -> Self {
        Self::from([(
            PARTITION_KEY.to_string(),
            types::AttributeValue::S(customer_id.0.clone()),
        )])
    }
}
