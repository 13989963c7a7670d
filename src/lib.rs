#![deny(missing_docs)]

//! # Customer CRUD
//!
//! A serverless CRUD service for customer records, stored in a single Amazon DynamoDB table.
//!
//! ## Overview
//!
//! Four independent operations sit behind an API Gateway proxy:
//! - **create**: validate a full record and upsert it under its `customerId`
//! - **read**: fetch a record by `customerId`
//! - **update**: validate and merge the supplied fields into a record
//! - **delete**: remove a record, succeeding for unknown identifiers
//!
//! Every contact list that is supplied must be non-empty and hold at least one
//! primary contact.
//!
//! ## Quick Example
//!
//! The store is created once and passed to each operation:
//!
//! ```rust
//! use customer_crud::{handler, store::MemoryStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = MemoryStore::new();
//! let body = br#"{
//!     "customerId": "1",
//!     "name": "A",
//!     "email": "a@x.com",
//!     "active": true,
//!     "contactInfoList": [{"email": "c@x.com", "phone": "555", "isPrimary": true}]
//! }"#;
//! let reply = handler::create_customer(&store, body).await?;
//! assert_eq!(reply.status, 201);
//!
//! let reply = handler::update_customer(&store, Some("1"), br#"{"active": false}"#).await?;
//! assert_eq!(reply.body.unwrap()["updatedCustomer"]["active"], false);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Data model, validation, keys and errors
//! - [`mod@handler`] - The four customer operations
//! - [`mod@http`] - API Gateway routing and response rendering
//! - [`mod@store`] - The backing store seam and its implementations
//! - [`mod@read`] / [`mod@write`] - Typed DynamoDB requests

/// Data model, validation rules, keys and errors.
pub mod common;

/// Settings loaded from the environment.
pub mod config;

/// The four customer operations.
pub mod handler;

/// API Gateway adapter.
pub mod http;

/// Read operations for retrieving records from DynamoDB.
pub mod read;

/// Backing store seam and implementations.
pub mod store;

/// Write operations for modifying records in DynamoDB.
///
/// This module provides operations for:
/// - Putting new records or replacing existing ones
/// - Updating selected attributes
/// - Deleting records by key
pub mod write;
