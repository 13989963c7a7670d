//! Shared types for customer operations.
//!
//! This module holds the customer data model and its validation rules, the
//! partition key, the error taxonomy, and the expression plumbing used to
//! build store requests.

/// Customer records, request bodies and their validation.
pub mod customer;

/// Error taxonomy and its HTTP rendering.
pub mod error;

/// The customer identifier and its store key.
pub mod key;

use aws_sdk_dynamodb::types;
use std::collections;

/// Store item: attribute name to tagged attribute value.
pub type Item = collections::HashMap<String, types::AttributeValue>;

pub(crate) fn add_placeholder(identifier: &str) -> String {
    format!("#{identifier}")
}

/// expression operation
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ExpressionInput {
    pub(crate) expression: String,
    pub(crate) expression_attribute_names: collections::HashMap<String, String>,
    pub(crate) expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
}

impl ExpressionInput {
    pub(crate) fn merge(operator: &str, items: Vec<Self>) -> Self {
        let mut operation = Self::default();
        let mut expressions = Vec::with_capacity(items.len());
        for item in items {
            operation
                .expression_attribute_names
                .extend(item.expression_attribute_names);
            operation
                .expression_attribute_values
                .extend(item.expression_attribute_values);
            if !item.expression.is_empty() {
                expressions.push(item.expression);
            }
        }
        operation.expression = expressions.join(operator);
        operation
    }
}
