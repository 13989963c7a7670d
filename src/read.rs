//! Read operations for retrieving customer records.

/// Get item operation for retrieving a single record by its key.
pub mod get_item;
