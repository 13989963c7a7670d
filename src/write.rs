//! Write operations for modifying customer records.
//!
//! This module provides operations for writing data to DynamoDB:
//! - Putting new records or replacing existing ones
//! - Updating selected attributes of a record
//! - Deleting records by key

/// Common utilities and types for write operations.
pub mod common;

/// Delete item operation for removing records.
pub mod delete_item;

/// Put item operation for creating or replacing records.
pub mod put_item;

/// Update item operation for assigning selected attributes.
pub mod update_item;
