//! # Verdict
//!
//! A self-contained JSON toolkit: an immutable value model, a permissive
//! parser, structural pointers, and a JSON Schema draft 6/7 validator
//! that accumulates ALL validation errors, providing comprehensive
//! feedback rather than short-circuiting on the first failure.
//!
//! ## Overview
//!
//! The pieces compose bottom-up:
//!
//! - [`Json`]: an immutable tree of seven kinds, including `Undefined`
//!   for absent values so lookups never fail — `doc["missing"]` is
//!   `Undefined`, not a panic.
//! - [`Parser`]: recursive-descent parsing with line/column diagnostics.
//!   Lenient by default (single-quoted strings are accepted); strict
//!   mode enforces RFC 8259.
//! - [`Pointer`]: RFC 6901-style paths with `~0`/`~1` escaping, plus a
//!   keyword vocabulary so schema locations render as
//!   `#/properties/name/minLength`.
//! - [`Validator`]: draft 6/7 evaluation with `$ref`/`$id` resolution,
//!   cycle termination, a depth cap, and a pluggable [`FormatRegistry`].
//!
//! Failures accumulate through stillwater's `Validation` type: a run
//! reports every applicable keyword violation, each located by both its
//! instance path and its schema path.
//!
//! ## Example
//!
//! ```rust
//! use verdict::{Json, Pointer, ValidateOptions, Validator};
//!
//! let schema = Json::parse(r#"{
//!     "type": "object",
//!     "required": ["email"],
//!     "properties": {
//!         "email": { "type": "string", "format": "email" },
//!         "age": { "type": "integer", "minimum": 0 }
//!     }
//! }"#).unwrap();
//!
//! // format is an annotation unless asserted.
//! let options = ValidateOptions::new().assert_formats(true);
//! let validator = Validator::new(&schema, options).unwrap();
//!
//! let good = Json::parse(r#"{ "email": "a@b.com", "age": 30 }"#).unwrap();
//! assert!(validator.is_valid(&good));
//!
//! let bad = Json::parse(r#"{ "email": "nope", "age": -1 }"#).unwrap();
//! let result = validator.validate(&bad);
//! assert!(result.is_failure());
//!
//! // Values are addressable by pointer.
//! assert_eq!(Pointer::parse("#/age").resolve(&bad), &Json::from(-1));
//! ```

pub mod error;
pub mod formats;
pub mod interop;
pub mod parser;
pub mod pointer;
pub mod schema;
pub mod validator;
pub mod value;

pub use error::{SchemaError, SchemaErrors};
pub use formats::{FormatCheck, FormatRegistry, RegistryError};
pub use parser::{ParseError, Parser};
pub use pointer::{Keyword, Pointer, Segment};
pub use schema::InvalidSchema;
pub use validator::{is_valid, validate, Draft, ValidateOptions, Validator};
pub use value::Json;

/// Type alias for validation results using SchemaErrors
pub type ValidationResult<T> = stillwater::Validation<T, SchemaErrors>;
