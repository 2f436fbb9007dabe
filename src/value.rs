//! The JSON value model.
//!
//! This module provides [`Json`], an immutable tagged union over every JSON
//! value kind plus [`Json::Undefined`], the result of a missing lookup.
//! Indexing a value never panics: out-of-range array indexes, absent object
//! keys, and indexing into non-containers all yield `Undefined`.

use std::fmt::{self, Display, Write};

use indexmap::IndexMap;

/// Shared slot returned by reference for every failed lookup.
static UNDEFINED: Json = Json::Undefined;

/// An immutable JSON value.
///
/// `Json` is a closed union over the seven value kinds. `Undefined` is
/// distinct from `Null`: it represents the *absence* of a value and is never
/// produced by the parser, only by missing lookups.
///
/// Equality is structural. Arrays compare element-wise in order; objects
/// compare by content regardless of key insertion order; `Undefined` equals
/// only `Undefined`.
///
/// # Example
///
/// ```rust
/// use verdict::Json;
///
/// let doc = Json::parse(r#"{ "users": [ { "name": "Alice" } ] }"#).unwrap();
///
/// assert_eq!(doc["users"][0]["name"], Json::from("Alice"));
/// assert_eq!(doc["users"][7], Json::Undefined);
/// assert_eq!(doc["missing"], Json::Undefined);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Json {
    /// Absence of a value. Not a JSON literal; produced only by lookups.
    #[default]
    Undefined,
    /// The JSON `null` literal.
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// A double-precision number.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Json>),
    /// Key/value pairs with unique keys, insertion order preserved.
    Object(IndexMap<String, Json>),
}

impl Json {
    /// The `undefined` singleton.
    pub const UNDEFINED: Json = Json::Undefined;
    /// The `null` singleton.
    pub const NULL: Json = Json::Null;
    /// The `true` singleton.
    pub const TRUE: Json = Json::Bool(true);
    /// The `false` singleton.
    pub const FALSE: Json = Json::Bool(false);
    /// The number zero.
    pub const ZERO: Json = Json::Number(0.0);

    /// Returns the element at `index`, or `Undefined` when this is not an
    /// array or the index is out of range.
    pub fn get(&self, index: usize) -> &Json {
        match self {
            Json::Array(items) => items.get(index).unwrap_or(&UNDEFINED),
            _ => &UNDEFINED,
        }
    }

    /// Returns the property named `key`, or `Undefined` when this is not an
    /// object or the key is absent.
    pub fn get_key(&self, key: &str) -> &Json {
        match self {
            Json::Object(map) => map.get(key).unwrap_or(&UNDEFINED),
            _ => &UNDEFINED,
        }
    }

    /// Element count for arrays, property count for objects, `None` for
    /// everything else.
    pub fn len(&self) -> Option<usize> {
        match self {
            Json::Array(items) => Some(items.len()),
            Json::Object(map) => Some(map.len()),
            _ => None,
        }
    }

    /// True for an empty array or object. Non-containers are not "empty".
    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Iterates property names. Empty for non-objects.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        let keys = match self {
            Json::Object(map) => Some(map.keys()),
            _ => None,
        };
        keys.into_iter().flatten().map(String::as_str)
    }

    /// The runtime kind name: `undefined`, `null`, `boolean`, `number`,
    /// `string`, `array`, or `object`.
    pub fn kind(&self) -> &'static str {
        match self {
            Json::Undefined => "undefined",
            Json::Null => "null",
            Json::Bool(_) => "boolean",
            Json::Number(_) => "number",
            Json::String(_) => "string",
            Json::Array(_) => "array",
            Json::Object(_) => "object",
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Json::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Json::Null)
    }

    pub fn is_number(&self) -> bool {
        matches!(self, Json::Number(_))
    }

    /// True for a number with no fractional part.
    pub fn is_integer(&self) -> bool {
        matches!(self, Json::Number(n) if n.fract() == 0.0 && n.is_finite())
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Json::String(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Json::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Json::Object(_))
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Json::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Json::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Json::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Json]> {
        match self {
            Json::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Json>> {
        match self {
            Json::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Deep structural equality.
    ///
    /// Values of differing kind never match, containers must match length
    /// and corresponding elements, objects compare regardless of key order,
    /// and `null` matches only `null`. This is the comparison used by the
    /// validator for `const`, `enum`, and `uniqueItems`.
    pub fn matches(&self, other: &Json) -> bool {
        self == other
    }
}

impl std::ops::Index<usize> for Json {
    type Output = Json;

    fn index(&self, index: usize) -> &Json {
        self.get(index)
    }
}

impl std::ops::Index<&str> for Json {
    type Output = Json;

    fn index(&self, key: &str) -> &Json {
        self.get_key(key)
    }
}

impl From<()> for Json {
    fn from(_: ()) -> Json {
        Json::Null
    }
}

impl From<bool> for Json {
    fn from(b: bool) -> Json {
        Json::Bool(b)
    }
}

impl From<f64> for Json {
    fn from(n: f64) -> Json {
        Json::Number(n)
    }
}

impl From<f32> for Json {
    fn from(n: f32) -> Json {
        Json::Number(n as f64)
    }
}

impl From<i32> for Json {
    fn from(n: i32) -> Json {
        Json::Number(n as f64)
    }
}

impl From<i64> for Json {
    fn from(n: i64) -> Json {
        Json::Number(n as f64)
    }
}

impl From<u32> for Json {
    fn from(n: u32) -> Json {
        Json::Number(n as f64)
    }
}

impl From<usize> for Json {
    fn from(n: usize) -> Json {
        Json::Number(n as f64)
    }
}

impl From<&str> for Json {
    fn from(s: &str) -> Json {
        Json::String(s.to_owned())
    }
}

impl From<String> for Json {
    fn from(s: String) -> Json {
        Json::String(s)
    }
}

impl From<Vec<Json>> for Json {
    fn from(items: Vec<Json>) -> Json {
        Json::Array(items)
    }
}

impl From<IndexMap<String, Json>> for Json {
    fn from(map: IndexMap<String, Json>) -> Json {
        Json::Object(map)
    }
}

impl FromIterator<Json> for Json {
    fn from_iter<I: IntoIterator<Item = Json>>(iter: I) -> Json {
        Json::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Json)> for Json {
    fn from_iter<I: IntoIterator<Item = (K, Json)>>(iter: I) -> Json {
        Json::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Canonical text rendering.
///
/// `undefined`, `null`, `true`/`false`, shortest round-trip numbers,
/// quoted-escaped strings, `{ "k":v, "k2":v2 }` and `[ v, v2 ]` with a
/// single space inside brackets and after commas. Empty containers render
/// as `{}` and `[]`.
impl Display for Json {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Json::Undefined => f.write_str("undefined"),
            Json::Null => f.write_str("null"),
            Json::Bool(true) => f.write_str("true"),
            Json::Bool(false) => f.write_str("false"),
            Json::Number(n) => write!(f, "{}", n),
            Json::String(s) => write_escaped(f, s),
            Json::Array(items) => {
                if items.is_empty() {
                    return f.write_str("[]");
                }
                f.write_str("[ ")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str(" ]")
            }
            Json::Object(map) => {
                if map.is_empty() {
                    return f.write_str("{}");
                }
                f.write_str("{ ")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_escaped(f, key)?;
                    write!(f, ":{}", value)?;
                }
                f.write_str(" }")
            }
        }
    }
}

fn write_escaped(f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
    f.write_char('"')?;
    for c in s.chars() {
        match c {
            '"' => f.write_str("\\\"")?,
            '\\' => f.write_str("\\\\")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            '\u{0008}' => f.write_str("\\b")?,
            '\u{000C}' => f.write_str("\\f")?,
            c if (c as u32) < 0x20 => write!(f, "\\u{:04x}", c as u32)?,
            c => f.write_char(c)?,
        }
    }
    f.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_undefined() {
        assert_eq!(Json::default(), Json::Undefined);
    }

    #[test]
    fn test_undefined_is_not_null() {
        assert_ne!(Json::Undefined, Json::Null);
        assert_eq!(Json::Undefined, Json::Undefined);
    }

    #[test]
    fn test_missing_lookups_yield_undefined() {
        let doc: Json = [("a", Json::from(1))].into_iter().collect();
        assert_eq!(doc["b"], Json::Undefined);
        assert_eq!(doc[0], Json::Undefined);
        assert_eq!(Json::Null["a"], Json::Undefined);

        let arr = Json::from(vec![Json::from(1)]);
        assert_eq!(arr[1], Json::Undefined);
        assert_eq!(arr["a"], Json::Undefined);
    }

    #[test]
    fn test_object_equality_ignores_order() {
        let a: Json = [("a", Json::from(1)), ("b", Json::from(2))]
            .into_iter()
            .collect();
        let b: Json = [("b", Json::from(2)), ("a", Json::from(1))]
            .into_iter()
            .collect();
        assert!(a.matches(&b));
    }

    #[test]
    fn test_array_equality_is_ordered() {
        let a = Json::from(vec![Json::from(1), Json::from(2)]);
        let b = Json::from(vec![Json::from(2), Json::from(1)]);
        assert!(!a.matches(&b));
    }

    #[test]
    fn test_kind_mismatch_never_matches() {
        assert!(!Json::from("1").matches(&Json::from(1)));
        assert!(!Json::TRUE.matches(&Json::from(1)));
        assert!(!Json::Null.matches(&Json::FALSE));
    }

    #[test]
    fn test_len_and_keys() {
        let doc: Json = [("a", Json::from(1)), ("b", Json::from(2))]
            .into_iter()
            .collect();
        assert_eq!(doc.len(), Some(2));
        assert_eq!(doc.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(Json::from(1).len(), None);
        assert_eq!(Json::from(1).keys().count(), 0);
    }

    #[test]
    fn test_rendering() {
        assert_eq!(Json::Undefined.to_string(), "undefined");
        assert_eq!(Json::Null.to_string(), "null");
        assert_eq!(Json::TRUE.to_string(), "true");
        assert_eq!(Json::from(1).to_string(), "1");
        assert_eq!(Json::from(1.5).to_string(), "1.5");
        assert_eq!(Json::from("a\"b").to_string(), "\"a\\\"b\"");

        let doc: Json = [("k", Json::from(1)), ("k2", Json::from(vec![Json::Null]))]
            .into_iter()
            .collect();
        assert_eq!(doc.to_string(), r#"{ "k":1, "k2":[ null ] }"#);
        assert_eq!(Json::Array(vec![]).to_string(), "[]");
        assert_eq!(Json::Object(Default::default()).to_string(), "{}");
    }

    #[test]
    fn test_integer_detection() {
        assert!(Json::from(3).is_integer());
        assert!(Json::from(3.0).is_integer());
        assert!(!Json::from(3.5).is_integer());
        assert!(!Json::from("3").is_integer());
    }
}
