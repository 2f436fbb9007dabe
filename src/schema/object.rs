//! Object keyword resolution.
//!
//! Covers `properties`, `patternProperties` (compiled regexes; a property
//! may be checked by several matching patterns), `additionalProperties`
//! (properties not covered by either of the first two), `required`,
//! `propertyNames`, `minProperties`/`maxProperties`, and `dependencies` in
//! both its draft 6/7 forms: an array of names requires co-presence, a
//! schema form validates the whole object when the trigger is present.

use indexmap::IndexMap;
use regex::Regex;

use super::{expect_count, Additional, InvalidSchema};
use crate::value::Json;

/// The two value shapes of a `dependencies` entry.
#[derive(Debug)]
pub enum Dependency<'s> {
    /// The named properties must be present alongside the trigger.
    Keys(Vec<&'s str>),
    /// The whole object must satisfy this schema when the trigger is
    /// present.
    Schema(&'s Json),
}

/// The resolved object keywords of one schema node.
#[derive(Debug, Default)]
pub struct ObjectKeywords<'s> {
    pub properties: Option<&'s IndexMap<String, Json>>,
    pub pattern_properties: Vec<(Regex, &'s Json)>,
    pub additional_properties: Option<Additional<'s>>,
    pub required: Option<Vec<&'s str>>,
    pub property_names: Option<&'s Json>,
    pub min_properties: Option<usize>,
    pub max_properties: Option<usize>,
    pub dependencies: Vec<(&'s str, Dependency<'s>)>,
}

impl<'s> ObjectKeywords<'s> {
    pub(crate) fn resolve(doc: &'s Json, strict: bool) -> Result<Self, InvalidSchema> {
        Ok(Self {
            properties: resolve_properties(doc, strict)?,
            pattern_properties: resolve_pattern_properties(doc, strict)?,
            additional_properties: Additional::resolve(doc, "additionalProperties", strict)?,
            required: resolve_required(doc, strict)?,
            property_names: resolve_subschema(doc, "propertyNames", strict)?,
            min_properties: expect_count(doc, "minProperties", strict)?,
            max_properties: expect_count(doc, "maxProperties", strict)?,
            dependencies: resolve_dependencies(doc, strict)?,
        })
    }
}

fn resolve_properties<'s>(
    doc: &'s Json,
    strict: bool,
) -> Result<Option<&'s IndexMap<String, Json>>, InvalidSchema> {
    match doc.get_key("properties") {
        Json::Undefined => Ok(None),
        Json::Object(map) => Ok(Some(map)),
        _ if strict => Err(InvalidSchema::MalformedKeyword {
            keyword: "properties",
            expected: "an object of schemas",
        }),
        _ => Ok(None),
    }
}

fn resolve_pattern_properties<'s>(
    doc: &'s Json,
    strict: bool,
) -> Result<Vec<(Regex, &'s Json)>, InvalidSchema> {
    let map = match doc.get_key("patternProperties") {
        Json::Undefined => return Ok(Vec::new()),
        Json::Object(map) => map,
        _ if strict => {
            return Err(InvalidSchema::MalformedKeyword {
                keyword: "patternProperties",
                expected: "an object of regex-keyed schemas",
            })
        }
        _ => return Ok(Vec::new()),
    };
    let mut compiled = Vec::with_capacity(map.len());
    for (pattern, schema) in map {
        match Regex::new(pattern) {
            Ok(regex) => compiled.push((regex, schema)),
            Err(_) if strict => {
                return Err(InvalidSchema::BadPattern {
                    keyword: "patternProperties",
                    pattern: pattern.clone(),
                })
            }
            Err(_) => {}
        }
    }
    Ok(compiled)
}

fn resolve_required<'s>(
    doc: &'s Json,
    strict: bool,
) -> Result<Option<Vec<&'s str>>, InvalidSchema> {
    match doc.get_key("required") {
        Json::Undefined => Ok(None),
        Json::Array(items) => {
            let mut names = Vec::with_capacity(items.len());
            for item in items {
                match item.as_str() {
                    Some(name) => names.push(name),
                    None if strict => {
                        return Err(InvalidSchema::MalformedKeyword {
                            keyword: "required",
                            expected: "an array of property names",
                        })
                    }
                    None => {}
                }
            }
            Ok(Some(names))
        }
        _ if strict => Err(InvalidSchema::MalformedKeyword {
            keyword: "required",
            expected: "an array of property names",
        }),
        _ => Ok(None),
    }
}

fn resolve_subschema<'s>(
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

fn resolve_dependencies<'s>(
    doc: &'s Json,
    strict: bool,
) -> Result<Vec<(&'s str, Dependency<'s>)>, InvalidSchema> {
    let map = match doc.get_key("dependencies") {
        Json::Undefined => return Ok(Vec::new()),
        Json::Object(map) => map,
        _ if strict => {
            return Err(InvalidSchema::MalformedKeyword {
                keyword: "dependencies",
                expected: "an object",
            })
        }
        _ => return Ok(Vec::new()),
    };
    let mut resolved = Vec::with_capacity(map.len());
    for (trigger, value) in map {
        match value {
            Json::Array(items) => {
                let mut names = Vec::with_capacity(items.len());
                for item in items {
                    match item.as_str() {
                        Some(name) => names.push(name),
                        None if strict => {
                            return Err(InvalidSchema::MalformedKeyword {
                                keyword: "dependencies",
                                expected: "arrays of property names or schemas",
                            })
                        }
                        None => {}
                    }
                }
                resolved.push((trigger.as_str(), Dependency::Keys(names)));
            }
            schema @ (Json::Object(_) | Json::Bool(_)) => {
                resolved.push((trigger.as_str(), Dependency::Schema(schema)));
            }
            _ if strict => {
                return Err(InvalidSchema::MalformedKeyword {
                    keyword: "dependencies",
                    expected: "arrays of property names or schemas",
                })
            }
            _ => {}
        }
    }
    Ok(resolved)
}
