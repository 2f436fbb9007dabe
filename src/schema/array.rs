//! Array keyword resolution.
//!
//! Covers `items` (one schema for every element, or a positional list),
//! `additionalItems` (governs elements past a positional list),
//! `minItems`/`maxItems`, `uniqueItems`, and `contains`.

use super::{expect_count, InvalidSchema};
use crate::value::Json;

/// The two shapes of `items`.
#[derive(Debug)]
pub enum Items<'s> {
    /// One schema applied to every element.
    Single(&'s Json),
    /// Element *i* is validated against schema *i*; overflow elements are
    /// governed by `additionalItems`.
    Positional(&'s [Json]),
}

/// A keyword that is either a boolean gate or a sub-schema
/// (`additionalItems`, `additionalProperties`).
#[derive(Debug)]
pub enum Additional<'s> {
    Bool(bool),
    Schema(&'s Json),
}

impl<'s> Additional<'s> {
    pub(crate) fn resolve(
        doc: &'s Json,
        keyword: &'static str,
        strict: bool,
    ) -> Result<Option<Self>, InvalidSchema> {
        match doc.get_key(keyword) {
            Json::Undefined => Ok(None),
            Json::Bool(b) => Ok(Some(Additional::Bool(*b))),
            schema @ Json::Object(_) => Ok(Some(Additional::Schema(schema))),
            _ if strict => Err(InvalidSchema::MalformedKeyword {
                keyword,
                expected: "a boolean or a schema",
            }),
            _ => Ok(None),
        }
    }
}

/// The resolved array keywords of one schema node.
#[derive(Debug, Default)]
pub struct ArrayKeywords<'s> {
    pub items: Option<Items<'s>>,
    pub additional_items: Option<Additional<'s>>,
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
    pub unique_items: bool,
    pub contains: Option<&'s Json>,
}

impl<'s> ArrayKeywords<'s> {
    pub(crate) fn resolve(doc: &'s Json, strict: bool) -> Result<Self, InvalidSchema> {
        let items = match doc.get_key("items") {
            Json::Undefined => None,
            Json::Array(schemas) => Some(Items::Positional(schemas)),
            schema @ (Json::Object(_) | Json::Bool(_)) => Some(Items::Single(schema)),
            _ if strict => {
                return Err(InvalidSchema::MalformedKeyword {
                    keyword: "items",
                    expected: "a schema or an array of schemas",
                })
            }
            _ => None,
        };
        let unique_items = match doc.get_key("uniqueItems") {
            Json::Undefined => false,
            Json::Bool(b) => *b,
            _ if strict => {
                return Err(InvalidSchema::MalformedKeyword {
                    keyword: "uniqueItems",
                    expected: "a boolean",
                })
            }
            _ => false,
        };
        let contains = match doc.get_key("contains") {
            Json::Undefined => None,
            schema @ (Json::Object(_) | Json::Bool(_)) => Some(schema),
            _ if strict => {
                return Err(InvalidSchema::MalformedKeyword {
                    keyword: "contains",
                    expected: "a schema",
                })
            }
            _ => None,
        };
        Ok(Self {
            items,
            additional_items: Additional::resolve(doc, "additionalItems", strict)?,
            min_items: expect_count(doc, "minItems", strict)?,
            max_items: expect_count(doc, "maxItems", strict)?,
            unique_items,
            contains,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_vs_positional_items() {
        let single = Json::parse(r#"{ "items": { "type": "number" } }"#).unwrap();
        let resolved = ArrayKeywords::resolve(&single, true).unwrap();
        assert!(matches!(resolved.items, Some(Items::Single(_))));

        let positional = Json::parse(r#"{ "items": [ {}, {} ] }"#).unwrap();
        let resolved = ArrayKeywords::resolve(&positional, true).unwrap();
        match resolved.items {
            Some(Items::Positional(schemas)) => assert_eq!(schemas.len(), 2),
            other => panic!("expected positional items, got {:?}", other),
        }
    }

    #[test]
    fn test_boolean_items_schema() {
        let doc = Json::parse(r#"{ "items": false }"#).unwrap();
        let resolved = ArrayKeywords::resolve(&doc, true).unwrap();
        assert!(matches!(resolved.items, Some(Items::Single(Json::Bool(false)))));
    }

    #[test]
    fn test_additional_items_forms() {
        let doc = Json::parse(r#"{ "additionalItems": false }"#).unwrap();
        let resolved = ArrayKeywords::resolve(&doc, true).unwrap();
        assert!(matches!(resolved.additional_items, Some(Additional::Bool(false))));

        let doc = Json::parse(r#"{ "additionalItems": { "type": "null" } }"#).unwrap();
        let resolved = ArrayKeywords::resolve(&doc, true).unwrap();
        assert!(matches!(resolved.additional_items, Some(Additional::Schema(_))));
    }

    #[test]
    fn test_malformed_items_policy() {
        let doc = Json::parse(r#"{ "items": 3 }"#).unwrap();
        assert!(ArrayKeywords::resolve(&doc, true).is_err());
        assert!(ArrayKeywords::resolve(&doc, false).unwrap().items.is_none());
    }
}
