//! Backing store for customer records.
//!
//! [`CustomerStore`] is the seam every operation talks through. The store is
//! created once per process and handed to each operation by reference.

/// Amazon DynamoDB store.
pub mod dynamo;

/// In-process store with the same semantics, for tests and local runs.
pub mod memory;

pub use dynamo::DynamoStore;
pub use memory::MemoryStore;

use crate::common::{Item, customer::Customer, error::StoreError, key::CustomerId};

use async_trait::async_trait;
use aws_sdk_dynamodb::types;
use indexmap::IndexMap;

/// Single-record operations on a flat collection keyed by `customerId`.
#[async_trait]
pub trait CustomerStore: Send + Sync {
    /// Write the whole record, replacing any record with the same key.
    async fn put_item(&self, customer: Customer) -> Result<(), StoreError>;

    /// Fetch a record by exact key match.
    async fn get_item(&self, customer_id: &CustomerId) -> Result<Option<Item>, StoreError>;

    /// Assign the given attributes and return the record as it stands afterwards.
    ///
    /// Attributes not named are left untouched. A missing record is created
    /// with the key and the assigned attributes only.
    async fn update_item(
        &self,
        customer_id: &CustomerId,
        assignments: IndexMap<String, types::AttributeValue>,
    ) -> Result<Option<Item>, StoreError>;

    /// Remove a record. Removing a missing record succeeds.
    async fn delete_item(&self, customer_id: &CustomerId) -> Result<(), StoreError>;
}
