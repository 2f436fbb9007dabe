//! Error types for validation failures.
//!
//! This module provides types for representing validation failures with rich
//! context: the instance and schema locations as JSON Pointers, a message,
//! and expected/actual values.

mod schema_error;

pub use schema_error::{SchemaError, SchemaErrors};
