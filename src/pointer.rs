//! JSON Pointer representation for locating values in documents.
//!
//! This module provides [`Pointer`] and [`Segment`], an RFC-6901-flavored
//! path type rendered as `#/a/b/0` with `~`/`/` escaped as `~0`/`~1`. On top
//! of plain property and index segments it carries a fixed [`Keyword`]
//! vocabulary, because the same type doubles as the validator's
//! current-location tracker while it walks schema keywords.
//!
//! Unlike an address that is built once, a `Pointer` is a stack: the
//! validator pushes a segment entering each child location and pops it on
//! the way out, so its current text is always a usable error location.

use std::fmt::{self, Display};

use crate::value::Json;

/// A recognized JSON Schema keyword, usable as a pointer segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Keyword {
    Type,
    Enum,
    Const,
    Minimum,
    Maximum,
    ExclusiveMinimum,
    ExclusiveMaximum,
    MultipleOf,
    MinLength,
    MaxLength,
    Pattern,
    Format,
    Items,
    AdditionalItems,
    MinItems,
    MaxItems,
    UniqueItems,
    Contains,
    Properties,
    PatternProperties,
    AdditionalProperties,
    Required,
    PropertyNames,
    MinProperties,
    MaxProperties,
    Dependencies,
    AllOf,
    AnyOf,
    OneOf,
    Not,
    If,
    Then,
    Else,
    Ref,
    Id,
    Definitions,
}

impl Keyword {
    /// The keyword's spelling in a schema document.
    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Type => "type",
            Keyword::Enum => "enum",
            Keyword::Const => "const",
            Keyword::Minimum => "minimum",
            Keyword::Maximum => "maximum",
            Keyword::ExclusiveMinimum => "exclusiveMinimum",
            Keyword::ExclusiveMaximum => "exclusiveMaximum",
            Keyword::MultipleOf => "multipleOf",
            Keyword::MinLength => "minLength",
            Keyword::MaxLength => "maxLength",
            Keyword::Pattern => "pattern",
            Keyword::Format => "format",
            Keyword::Items => "items",
            Keyword::AdditionalItems => "additionalItems",
            Keyword::MinItems => "minItems",
            Keyword::MaxItems => "maxItems",
            Keyword::UniqueItems => "uniqueItems",
            Keyword::Contains => "contains",
            Keyword::Properties => "properties",
            Keyword::PatternProperties => "patternProperties",
            Keyword::AdditionalProperties => "additionalProperties",
            Keyword::Required => "required",
            Keyword::PropertyNames => "propertyNames",
            Keyword::MinProperties => "minProperties",
            Keyword::MaxProperties => "maxProperties",
            Keyword::Dependencies => "dependencies",
            Keyword::AllOf => "allOf",
            Keyword::AnyOf => "anyOf",
            Keyword::OneOf => "oneOf",
            Keyword::Not => "not",
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::Else => "else",
            Keyword::Ref => "$ref",
            Keyword::Id => "$id",
            Keyword::Definitions => "definitions",
        }
    }

    /// Looks a spelling up in the fixed vocabulary.
    pub fn from_name(name: &str) -> Option<Keyword> {
        use Keyword::*;
        let all = [
            Type,
            Enum,
            Const,
            Minimum,
            Maximum,
            ExclusiveMinimum,
            ExclusiveMaximum,
            MultipleOf,
            MinLength,
            MaxLength,
            Pattern,
            Format,
            Items,
            AdditionalItems,
            MinItems,
            MaxItems,
            UniqueItems,
            Contains,
            Properties,
            PatternProperties,
            AdditionalProperties,
            Required,
            PropertyNames,
            MinProperties,
            MaxProperties,
            Dependencies,
            AllOf,
            AnyOf,
            OneOf,
            Not,
            If,
            Then,
            Else,
            Ref,
            Id,
            Definitions,
        ];
        all.into_iter().find(|k| k.as_str() == name)
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A segment of a JSON Pointer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A property name (escaped in the text form).
    Property(String),
    /// An array index.
    Index(usize),
    /// A recognized schema keyword.
    Keyword(Keyword),
}

impl Segment {
    /// The segment's literal (unescaped) token.
    pub fn token(&self) -> std::borrow::Cow<'_, str> {
        match self {
            Segment::Property(name) => name.as_str().into(),
            Segment::Index(idx) => idx.to_string().into(),
            Segment::Keyword(kw) => kw.as_str().into(),
        }
    }
}

/// A mutable JSON Pointer.
///
/// # Example
///
/// ```rust
/// use verdict::{Keyword, Pointer};
///
/// let mut ptr = Pointer::root();
/// assert_eq!(ptr.text(), "#/");
///
/// ptr.push_keyword(Keyword::Properties);
/// ptr.push_property("a/b");
/// assert_eq!(ptr.text(), "#/properties/a~1b");
///
/// ptr.pop();
/// ptr.pop();
/// assert_eq!(ptr.text(), "#/");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Pointer {
    segments: Vec<Segment>,
}

impl Pointer {
    /// Creates an empty pointer addressing the document root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parses a `#/a/b/0` text form back into segments, unescaping `~1` to
    /// `/` and `~0` to `~`. Digit tokens without a leading zero become
    /// indexes and tokens in the keyword vocabulary become keywords; the
    /// leading `#` is optional.
    pub fn parse(text: &str) -> Self {
        let rest = text.strip_prefix('#').unwrap_or(text);
        let mut ptr = Pointer::root();
        if rest.is_empty() || rest == "/" {
            return ptr;
        }
        for token in rest.strip_prefix('/').unwrap_or(rest).split('/') {
            let token = Self::unescape(token);
            // RFC 6901 index grammar: "0", or digits without a leading zero.
            // "01" stays a property name.
            if token.bytes().all(|b| b.is_ascii_digit())
                && (token == "0" || !token.starts_with('0'))
            {
                if let Ok(idx) = token.parse::<usize>() {
                    ptr.segments.push(Segment::Index(idx));
                    continue;
                }
            }
            match Keyword::from_name(&token) {
                Some(kw) => ptr.segments.push(Segment::Keyword(kw)),
                None => ptr.segments.push(Segment::Property(token)),
            }
        }
        ptr
    }

    /// Appends a segment.
    pub fn push(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    /// Appends a property-name segment.
    pub fn push_property(&mut self, name: impl Into<String>) {
        self.segments.push(Segment::Property(name.into()));
    }

    /// Appends an array-index segment.
    pub fn push_index(&mut self, index: usize) {
        self.segments.push(Segment::Index(index));
    }

    /// Appends a keyword segment.
    pub fn push_keyword(&mut self, keyword: Keyword) {
        self.segments.push(Segment::Keyword(keyword));
    }

    /// Removes and returns the last segment.
    ///
    /// # Panics
    ///
    /// Panics on an empty pointer. An unbalanced pop is a traversal bug,
    /// not a recoverable input condition.
    pub fn pop(&mut self) -> Segment {
        self.segments.pop().expect("pop on empty pointer")
    }

    /// True when no segments are present.
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates the segments from the root outward.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    /// The last segment, if any.
    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }

    /// The keyword at the last segment, or `None` when the pointer is empty
    /// or ends in a property or index.
    pub fn keyword(&self) -> Option<Keyword> {
        match self.segments.last() {
            Some(Segment::Keyword(kw)) => Some(*kw),
            _ => None,
        }
    }

    /// The first property-name segment, if any.
    pub fn first_property(&self) -> Option<&str> {
        self.segments.iter().find_map(|s| match s {
            Segment::Property(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// The last property-name segment, if any.
    pub fn last_property(&self) -> Option<&str> {
        self.segments.iter().rev().find_map(|s| match s {
            Segment::Property(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// The rendered text form. Equivalent to `to_string`.
    pub fn text(&self) -> String {
        self.to_string()
    }

    /// Escapes a single token for the text form: `~` to `~0`, `/` to `~1`.
    pub fn escape(token: &str) -> String {
        token.replace('~', "~0").replace('/', "~1")
    }

    /// Unescapes a single token from the text form: `~1` to `/`, `~0` to `~`.
    pub fn unescape(token: &str) -> String {
        let mut out = String::with_capacity(token.len());
        let mut chars = token.chars();
        while let Some(c) = chars.next() {
            if c != '~' {
                out.push(c);
                continue;
            }
            match chars.next() {
                Some('0') => out.push('~'),
                Some('1') => out.push('/'),
                Some(other) => {
                    out.push('~');
                    out.push(other);
                }
                None => out.push('~'),
            }
        }
        out
    }

    /// Navigates `doc` along this pointer, yielding `Undefined` when any
    /// step is missing.
    pub fn resolve<'a>(&self, doc: &'a Json) -> &'a Json {
        let mut current = doc;
        for segment in &self.segments {
            current = match segment {
                Segment::Property(name) => current.get_key(name),
                // A digit token addresses the member of that name when the
                // current node is an object (RFC 6901).
                Segment::Index(idx) if current.is_object() => {
                    current.get_key(&idx.to_string())
                }
                Segment::Index(idx) => current.get(*idx),
                Segment::Keyword(kw) => current.get_key(kw.as_str()),
            };
        }
        current
    }
}

impl Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("#/");
        }
        f.write_str("#")?;
        for segment in &self.segments {
            write!(f, "/{}", Pointer::escape(&segment.token()))?;
        }
        Ok(())
    }
}
