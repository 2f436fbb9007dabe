//! The schema model: a typed view over a JSON Schema document.
//!
//! A schema document is either a boolean (`true`/`false`, accept-all or
//! reject-all) or an object. [`Schema::resolve`] classifies a document at
//! wrap time and resolves every recognized keyword once into an optional
//! typed field, so the engine evaluates `Option<T>` per keyword instead of
//! re-inspecting the raw document. Unrecognized keywords are ignored, per
//! draft forward-compatibility.
//!
//! Malformed keyword shapes (say, a `minimum` that is a string) are dropped
//! in lenient mode and a hard [`InvalidSchema`] error in strict mode. A
//! document that is neither boolean nor object is always an error.

mod array;
mod combinators;
mod numeric;
mod object;
mod string;

pub use array::{Additional, ArrayKeywords, Items};
pub use combinators::CombinatorKeywords;
pub use numeric::{is_multiple_of, NumericKeywords};
pub use object::{Dependency, ObjectKeywords};
pub use string::StringKeywords;
pub(crate) use string::code_points;

use crate::validator::Draft;
use crate::value::Json;

/// Errors raised while wrapping a schema document.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InvalidSchema {
    /// The document is neither a boolean nor an object.
    #[error("schema must be a boolean or an object, got {0}")]
    NotASchema(&'static str),

    /// A keyword value has the wrong shape (strict mode only).
    #[error("malformed {keyword}: expected {expected}")]
    MalformedKeyword {
        keyword: &'static str,
        expected: &'static str,
    },

    /// A `pattern` or `patternProperties` entry does not compile
    /// (strict mode only).
    #[error("invalid regular expression in {keyword}: {pattern}")]
    BadPattern {
        keyword: &'static str,
        pattern: String,
    },
}

/// A classified schema document.
#[derive(Debug)]
pub enum Schema<'s> {
    /// A boolean schema: `true` accepts everything, `false` nothing.
    Bool(bool),
    /// An object schema with its keywords resolved.
    Node(Box<SchemaNode<'s>>),
}

impl<'s> Schema<'s> {
    /// Classifies `doc` and resolves its keywords.
    pub fn resolve(doc: &'s Json, strict: bool, version: Draft) -> Result<Schema<'s>, InvalidSchema> {
        match doc {
            Json::Bool(b) => Ok(Schema::Bool(*b)),
            Json::Object(_) => Ok(Schema::Node(Box::new(SchemaNode::resolve(
                doc, strict, version,
            )?))),
            other => Err(InvalidSchema::NotASchema(other.kind())),
        }
    }
}

/// An object schema with every recognized keyword resolved into a typed
/// field, grouped by the instance kind it constrains.
#[derive(Debug)]
pub struct SchemaNode<'s> {
    /// The underlying document, retained for keyword introspection.
    pub doc: &'s Json,
    /// Allowed type names from `type` (a single name or a list).
    pub types: Option<Vec<&'s str>>,
    /// Literal values from `enum`.
    pub enum_values: Option<&'s [Json]>,
    /// The literal value from `const`.
    pub const_value: Option<&'s Json>,
    /// The target of `$ref`. When present, sibling keywords are ignored.
    pub ref_target: Option<&'s str>,
    /// The declared `$id`, if any.
    pub id: Option<&'s str>,
    pub numeric: NumericKeywords,
    pub string: StringKeywords<'s>,
    pub array: ArrayKeywords<'s>,
    pub object: ObjectKeywords<'s>,
    pub combinators: CombinatorKeywords<'s>,
}

impl<'s> SchemaNode<'s> {
    fn resolve(doc: &'s Json, strict: bool, version: Draft) -> Result<Self, InvalidSchema> {
        Ok(Self {
            doc,
            types: resolve_types(doc, strict)?,
            enum_values: resolve_enum(doc, strict)?,
            const_value: present(doc.get_key("const")),
            ref_target: doc.get_key("$ref").as_str(),
            id: doc.get_key("$id").as_str(),
            numeric: NumericKeywords::resolve(doc, strict)?,
            string: StringKeywords::resolve(doc, strict)?,
            array: ArrayKeywords::resolve(doc, strict)?,
            object: ObjectKeywords::resolve(doc, strict)?,
            combinators: CombinatorKeywords::resolve(doc, strict, version)?,
        })
    }
}

fn present(value: &Json) -> Option<&Json> {
    if value.is_undefined() {
        None
    } else {
        Some(value)
    }
}

fn resolve_types<'s>(doc: &'s Json, strict: bool) -> Result<Option<Vec<&'s str>>, InvalidSchema> {
    match doc.get_key("type") {
        Json::Undefined => Ok(None),
        Json::String(s) => Ok(Some(vec![s.as_str()])),
        Json::Array(items) => {
            let mut names = Vec::with_capacity(items.len());
            for item in items {
                match item.as_str() {
                    Some(name) => names.push(name),
                    None if strict => {
                        return Err(InvalidSchema::MalformedKeyword {
                            keyword: "type",
                            expected: "a type name or an array of type names",
                        })
                    }
                    None => {}
                }
            }
            Ok(Some(names))
        }
        _ if strict => Err(InvalidSchema::MalformedKeyword {
            keyword: "type",
            expected: "a type name or an array of type names",
        }),
        _ => Ok(None),
    }
}

fn resolve_enum<'s>(doc: &'s Json, strict: bool) -> Result<Option<&'s [Json]>, InvalidSchema> {
    match doc.get_key("enum") {
        Json::Undefined => Ok(None),
        Json::Array(items) => Ok(Some(items)),
        _ if strict => Err(InvalidSchema::MalformedKeyword {
            keyword: "enum",
            expected: "an array of literal values",
        }),
        _ => Ok(None),
    }
}

/// Resolves an optional numeric keyword.
pub(crate) fn expect_number(
    doc: &Json,
    keyword: &'static str,
    strict: bool,
) -> Result<Option<f64>, InvalidSchema> {
    match doc.get_key(keyword) {
        Json::Undefined => Ok(None),
        Json::Number(n) => Ok(Some(*n)),
        _ if strict => Err(InvalidSchema::MalformedKeyword {
            keyword,
            expected: "a number",
        }),
        _ => Ok(None),
    }
}

/// Resolves an optional non-negative whole-number keyword (counts/lengths).
pub(crate) fn expect_count(
    doc: &Json,
    keyword: &'static str,
    strict: bool,
) -> Result<Option<usize>, InvalidSchema> {
    match doc.get_key(keyword) {
        Json::Undefined => Ok(None),
        Json::Number(n) if n.fract() == 0.0 && *n >= 0.0 => Ok(Some(*n as usize)),
        _ if strict => Err(InvalidSchema::MalformedKeyword {
            keyword,
            expected: "a non-negative integer",
        }),
        _ => Ok(None),
    }
}
