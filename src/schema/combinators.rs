//! Combinator keyword resolution.
//!
//! Covers `allOf`/`anyOf`/`oneOf`/`not` and the draft 7 conditional trio
//! `if`/`then`/`else`. Under draft 6 the conditional keywords are
//! unrecognized and therefore ignored.

use super::InvalidSchema;
use crate::validator::Draft;
use crate::value::Json;

/// The resolved combinator keywords of one schema node.
#[derive(Debug, Default)]
pub struct CombinatorKeywords<'s> {
    pub all_of: Option<&'s [Json]>,
    pub any_of: Option<&'s [Json]>,
    pub one_of: Option<&'s [Json]>,
    pub not: Option<&'s Json>,
    pub if_schema: Option<&'s Json>,
    pub then_schema: Option<&'s Json>,
    pub else_schema: Option<&'s Json>,
}

impl<'s> CombinatorKeywords<'s> {
    pub(crate) fn resolve(
        doc: &'s Json,
        strict: bool,
        version: Draft,
    ) -> Result<Self, InvalidSchema> {
        let conditional = version >= Draft::Draft7;
        Ok(Self {
            all_of: schema_list(doc, "allOf", strict)?,
            any_of: schema_list(doc, "anyOf", strict)?,
            one_of: schema_list(doc, "oneOf", strict)?,
            not: subschema(doc, "not", strict)?,
            if_schema: if conditional { subschema(doc, "if", strict)? } else { None },
            then_schema: if conditional { subschema(doc, "then", strict)? } else { None },
            else_schema: if conditional { subschema(doc, "else", strict)? } else { None },
        })
    }
}

fn schema_list<'s>(
    doc: &'s Json,
    keyword: &'static str,
    strict: bool,
) -> Result<Option<&'s [Json]>, InvalidSchema> {
    match doc.get_key(keyword) {
        Json::Undefined => Ok(None),
        Json::Array(schemas) => Ok(Some(schemas)),
        _ if strict => Err(InvalidSchema::MalformedKeyword {
            keyword,
            expected: "an array of schemas",
        }),
        _ => Ok(None),
    }
}

fn subschema<'s>(
    doc: &'s Json,
    keyword: &'static str,
    strict: bool,
) -> Result<Option<&'s Json>, InvalidSchema> {
    match doc.get_key(keyword) {
        Json::Undefined => Ok(None),
        schema @ (Json::Object(_) | Json::Bool(_)) => Ok(Some(schema)),
        _ if strict => Err(InvalidSchema::MalformedKeyword {
            keyword,
            expected: "a schema",
        }),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conditionals_gated_by_draft() {
        let doc = Json::parse(r#"{ "if": {}, "then": {}, "else": {} }"#).unwrap();
        let draft7 = CombinatorKeywords::resolve(&doc, true, Draft::Draft7).unwrap();
        assert!(draft7.if_schema.is_some());
        assert!(draft7.then_schema.is_some());

        let draft6 = CombinatorKeywords::resolve(&doc, true, Draft::Draft6).unwrap();
        assert!(draft6.if_schema.is_none());
        assert!(draft6.else_schema.is_none());
    }

    #[test]
    fn test_schema_lists() {
        let doc = Json::parse(r#"{ "allOf": [ {}, {} ], "not": {} }"#).unwrap();
        let resolved = CombinatorKeywords::resolve(&doc, true, Draft::Draft7).unwrap();
        assert_eq!(resolved.all_of.unwrap().len(), 2);
        assert!(resolved.not.is_some());
        assert!(resolved.one_of.is_none());
    }

    #[test]
    fn test_malformed_combinator_policy() {
        let doc = Json::parse(r#"{ "anyOf": {} }"#).unwrap();
        assert!(CombinatorKeywords::resolve(&doc, true, Draft::Draft7).is_err());
        assert!(CombinatorKeywords::resolve(&doc, false, Draft::Draft7)
            .unwrap()
            .any_of
            .is_none());
    }
}
