//! Schema validation error types.
//!
//! This module provides [`SchemaError`] for single validation failures and
//! [`SchemaErrors`] for accumulating multiple failures.

use std::fmt::{self, Display};

use stillwater::prelude::*;

use crate::pointer::Pointer;

/// A single validation failure with full context.
///
/// `SchemaError` captures where the failure happened on both sides of the
/// evaluation:
/// - **instance_path**: the location in the validated document
/// - **schema_path**: the keyword location in the schema document
///
/// plus a human-readable message, optional got/expected descriptions, and a
/// machine-readable code such as `min_length` or `unresolved_reference`.
///
/// # Example
///
/// ```rust
/// use verdict::{Pointer, SchemaError};
///
/// let mut at = Pointer::root();
/// at.push_property("email");
///
/// let error = SchemaError::new(at, Pointer::root(), "invalid email format")
///     .with_code("format")
///     .with_got("not-an-email")
///     .with_expected("format \"email\"");
///
/// assert_eq!(error.code, "format");
/// assert_eq!(error.instance_path.text(), "#/email");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaError {
    /// Location in the validated instance.
    pub instance_path: Pointer,
    /// Keyword location in the schema document.
    pub schema_path: Pointer,
    /// Human-readable description of the failure.
    pub message: String,
    /// The actual value that was received (formatted as a string).
    pub got: Option<String>,
    /// Description of what was expected.
    pub expected: Option<String>,
    /// Machine-readable code (e.g. `required`, `one_of_multiple_matched`).
    pub code: String,
}

impl SchemaError {
    /// Creates a new error at the given instance and schema locations.
    ///
    /// The code defaults to `validation_error`; use `with_code` to set a
    /// more specific one.
    pub fn new(instance_path: Pointer, schema_path: Pointer, message: impl Into<String>) -> Self {
        Self {
            instance_path,
            schema_path,
            message: message.into(),
            got: None,
            expected: None,
            code: "validation_error".to_string(),
        }
    }

    /// Sets the error code and returns self for chaining.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the "got" (actual value) field and returns self for chaining.
    pub fn with_got(mut self, got: impl Into<String>) -> Self {
        self.got = Some(got.into());
        self
    }

    /// Sets the "expected" field and returns self for chaining.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.instance_path, self.message)?;
        if let Some(ref expected) = self.expected {
            write!(f, " (expected: {})", expected)?;
        }
        if let Some(ref got) = self.got {
            write!(f, " (got: {})", got)?;
        }
        write!(f, " [{}]", self.schema_path)
    }
}

impl std::error::Error for SchemaError {}

// All fields are owned, so Send + Sync hold; keep that pinned down.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SchemaError>();
    assert_sync::<SchemaError>();
};

/// A non-empty collection of validation failures.
///
/// `SchemaErrors` wraps a `NonEmptyVec<SchemaError>` so that a
/// `Validation::Failure` always carries at least one error. Failures from
/// independent keywords are combined via `Semigroup`.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaErrors(NonEmptyVec<SchemaError>);

impl SchemaErrors {
    /// Creates a `SchemaErrors` containing a single error.
    pub fn single(error: SchemaError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `SchemaErrors` from a `Vec<SchemaError>`.
    ///
    /// # Panics
    ///
    /// Panics if the vec is empty.
    pub fn from_vec(errors: Vec<SchemaError>) -> Self {
        Self(NonEmptyVec::from_vec(errors).expect("SchemaErrors requires at least one error"))
    }

    /// Number of errors in this collection (always at least one).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for API consistency.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterates the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &SchemaError> {
        self.0.iter()
    }

    /// The first error.
    pub fn first(&self) -> &SchemaError {
        self.0.head()
    }

    /// All errors whose instance location equals `path`.
    pub fn at_path(&self, path: &Pointer) -> Vec<&SchemaError> {
        self.0.iter().filter(|e| &e.instance_path == path).collect()
    }

    /// All errors with the given code.
    pub fn with_code(&self, code: &str) -> Vec<&SchemaError> {
        self.0.iter().filter(|e| e.code == code).collect()
    }

    /// The deepest instance location among the contained errors.
    ///
    /// The pointer machinery tracks locations for free during traversal, so
    /// this is the natural "where did it really go wrong" accessor.
    pub fn deepest_path(&self) -> &Pointer {
        self.0
            .iter()
            .map(|e| &e.instance_path)
            .max_by_key(|p| p.len())
            .expect("non-empty")
    }

    /// Converts into a plain `Vec<SchemaError>`.
    pub fn into_vec(self) -> Vec<SchemaError> {
        self.0.into_vec()
    }
}

impl Semigroup for SchemaErrors {
    fn combine(self, other: Self) -> Self {
        SchemaErrors(self.0.combine(other.0))
    }
}

impl Display for SchemaErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for SchemaErrors {}

impl IntoIterator for SchemaErrors {
    type Item = SchemaError;
    type IntoIter = std::vec::IntoIter<SchemaError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a SchemaErrors {
    type Item = &'a SchemaError;
    type IntoIter = Box<dyn Iterator<Item = &'a SchemaError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SchemaErrors>();
    assert_sync::<SchemaErrors>();
};

#[cfg(test)]
mod tests {
    use super::*;

    fn at(field: &str) -> Pointer {
        let mut ptr = Pointer::root();
        ptr.push_property(field);
        ptr
    }

    #[test]
    fn test_schema_error_defaults() {
        let error = SchemaError::new(at("name"), Pointer::root(), "field is required");
        assert_eq!(error.code, "validation_error");
        assert!(error.got.is_none());
        assert!(error.expected.is_none());
    }

    #[test]
    fn test_schema_error_display() {
        let error = SchemaError::new(at("email"), Pointer::root(), "invalid format")
            .with_expected("email address")
            .with_got("not-an-email");
        let display = error.to_string();
        assert!(display.contains("#/email: invalid format"));
        assert!(display.contains("expected: email address"));
        assert!(display.contains("got: not-an-email"));
    }

    #[test]
    fn test_combine_accumulates() {
        let errors = SchemaErrors::single(SchemaError::new(at("a"), Pointer::root(), "error 1"))
            .combine(SchemaErrors::single(SchemaError::new(
                at("b"),
                Pointer::root(),
                "error 2",
            )));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.at_path(&at("a")).len(), 1);
    }

    #[test]
    fn test_with_code_filter() {
        let errors = SchemaErrors::from_vec(vec![
            SchemaError::new(at("a"), Pointer::root(), "1").with_code("required"),
            SchemaError::new(at("b"), Pointer::root(), "2").with_code("format"),
            SchemaError::new(at("c"), Pointer::root(), "3").with_code("required"),
        ]);
        assert_eq!(errors.with_code("required").len(), 2);
        assert_eq!(errors.with_code("format").len(), 1);
    }

    #[test]
    fn test_deepest_path() {
        let mut deep = at("a");
        deep.push_index(0);
        let errors = SchemaErrors::from_vec(vec![
            SchemaError::new(at("a"), Pointer::root(), "shallow"),
            SchemaError::new(deep.clone(), Pointer::root(), "deep"),
        ]);
        assert_eq!(errors.deepest_path(), &deep);
    }
}
