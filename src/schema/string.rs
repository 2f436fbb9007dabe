//! String keyword resolution.
//!
//! Covers `minLength`/`maxLength` (Unicode code points, not bytes),
//! `pattern` (compiled once; search semantics, not full-match), and the
//! `format` name, which the engine dispatches through the format registry.

use regex::Regex;

use super::{expect_count, InvalidSchema};
use crate::value::Json;

/// The resolved string keywords of one schema node.
#[derive(Debug, Default)]
pub struct StringKeywords<'s> {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
    pub format: Option<&'s str>,
}

impl<'s> StringKeywords<'s> {
    pub(crate) fn resolve(doc: &'s Json, strict: bool) -> Result<Self, InvalidSchema> {
        Ok(Self {
            min_length: expect_count(doc, "minLength", strict)?,
            max_length: expect_count(doc, "maxLength", strict)?,
            pattern: resolve_pattern(doc, strict)?,
            format: doc.get_key("format").as_str(),
        })
    }
}

fn resolve_pattern(doc: &Json, strict: bool) -> Result<Option<Regex>, InvalidSchema> {
    let source = match doc.get_key("pattern") {
        Json::Undefined => return Ok(None),
        Json::String(s) => s,
        _ if strict => {
            return Err(InvalidSchema::MalformedKeyword {
                keyword: "pattern",
                expected: "a regular expression string",
            })
        }
        _ => return Ok(None),
    };
    match Regex::new(source) {
        Ok(regex) => Ok(Some(regex)),
        Err(_) if strict => Err(InvalidSchema::BadPattern {
            keyword: "pattern",
            pattern: source.clone(),
        }),
        Err(_) => Ok(None),
    }
}

/// Length in Unicode code points, the unit `minLength`/`maxLength` count.
pub(crate) fn code_points(s: &str) -> usize {
    s.chars().count()
}
