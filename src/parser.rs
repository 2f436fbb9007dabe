//! JSON text parsing.
//!
//! A single-pass recursive-descent parser producing a [`Json`] value. The
//! default grammar is JSON plus single-quoted strings; [`Parser::strict`]
//! restricts it to the canonical JSON grammar. Errors carry a message in the
//! `"Expected <token>"` convention plus the line and column where parsing
//! stopped.
//!
//! # Example
//!
//! ```rust
//! use verdict::{Json, Parser};
//!
//! // The lenient grammar accepts single-quoted strings.
//! let value = Json::parse("{ 'name': 'Alice' }").unwrap();
//! assert_eq!(value["name"].as_str(), Some("Alice"));
//!
//! // The strict grammar does not.
//! assert!(Parser::new().strict(true).parse("{ 'name': 'Alice' }").is_err());
//! ```

use std::iter::Peekable;
use std::str::{Chars, FromStr};

use indexmap::IndexMap;

use crate::value::Json;

/// Containers deeper than this fail closed rather than recursing further.
const DEFAULT_MAX_DEPTH: usize = 256;

/// A parse failure with its position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message} at line {line}, column {column}")]
pub struct ParseError {
    /// What the parser expected or found, e.g. `"Expected string"`.
    pub message: String,
    /// 1-based line of the offending character.
    pub line: usize,
    /// 1-based column of the offending character.
    pub column: usize,
}

/// Configurable parse entry point.
///
/// The zero-configuration paths are [`Json::parse`] (lenient),
/// [`Json::try_parse`] (lenient, `Undefined` on failure), and
/// `text.parse::<Json>()` (strict).
#[derive(Debug, Clone)]
pub struct Parser {
    strict: bool,
    max_depth: usize,
}

impl Parser {
    pub fn new() -> Self {
        Self {
            strict: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Disables the single-quoted-string extension, accepting only the
    /// canonical JSON grammar.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Caps container nesting. Input nested deeper fails with a parse error.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Parses `text` into a [`Json`] value.
    pub fn parse(&self, text: &str) -> Result<Json, ParseError> {
        let mut cursor = Cursor {
            input: text.chars().peekable(),
            line: 1,
            column: 1,
            strict: self.strict,
            depth_left: self.max_depth,
        };
        cursor.skip_whitespace();
        let value = cursor.parse_value()?;
        cursor.skip_whitespace();
        if cursor.peek().is_some() {
            return Err(cursor.error("Expected end of input"));
        }
        Ok(value)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Json {
    /// Parses JSON text, accepting single-quoted strings.
    pub fn parse(text: &str) -> Result<Json, ParseError> {
        Parser::new().parse(text)
    }

    /// Non-failing variant of [`Json::parse`]: returns `Undefined` when the
    /// text is malformed.
    pub fn try_parse(text: &str) -> Json {
        Json::parse(text).unwrap_or(Json::Undefined)
    }
}

/// Strict parsing: only the canonical JSON grammar.
impl FromStr for Json {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Json, ParseError> {
        Parser::new().strict(true).parse(text)
    }
}

struct Cursor<'a> {
    input: Peekable<Chars<'a>>,
    line: usize,
    column: usize,
    strict: bool,
    depth_left: usize,
}

impl<'a> Cursor<'a> {
    fn peek(&mut self) -> Option<char> {
        self.input.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.input.next();
        match c {
            Some('\n') => {
                self.line += 1;
                self.column = 1;
            }
            Some(_) => self.column += 1,
            None => {}
        }
        c
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            message: message.into(),
            line: self.line,
            column: self.column,
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\r' | '\n')) {
            self.bump();
        }
    }

    fn parse_value(&mut self) -> Result<Json, ParseError> {
        match self.peek() {
            Some('{') => self.parse_object(),
            Some('[') => self.parse_array(),
            Some('"') => self.parse_string('"').map(Json::String),
            Some('\'') if !self.strict => self.parse_string('\'').map(Json::String),
            Some(c) if c == '-' || c.is_ascii_digit() => self.parse_number(),
            Some('t') => self.parse_literal("true", Json::Bool(true)),
            Some('f') => self.parse_literal("false", Json::Bool(false)),
            Some('n') => self.parse_literal("null", Json::Null),
            _ => Err(self.error("Expected value")),
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth_left == 0 {
            return Err(self.error("Maximum nesting depth exceeded"));
        }
        self.depth_left -= 1;
        Ok(())
    }

    fn parse_object(&mut self) -> Result<Json, ParseError> {
        self.enter()?;
        self.bump(); // '{'
        let mut map = IndexMap::new();
        self.skip_whitespace();
        if self.peek() == Some('}') {
            self.bump();
            self.depth_left += 1;
            return Ok(Json::Object(map));
        }
        loop {
            self.skip_whitespace();
            let key = match self.peek() {
                Some('"') => self.parse_string('"')?,
                Some('\'') if !self.strict => self.parse_string('\'')?,
                _ => return Err(self.error("Expected string")),
            };
            self.skip_whitespace();
            if self.peek() != Some(':') {
                return Err(self.error("Expected ':'"));
            }
            self.bump();
            self.skip_whitespace();
            let value = self.parse_value()?;
            // Duplicate keys: the last value wins, first position kept.
            map.insert(key, value);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some('}') => {
                    self.bump();
                    self.depth_left += 1;
                    return Ok(Json::Object(map));
                }
                _ => return Err(self.error("Expected ',' or '}'")),
            }
        }
    }

    fn parse_array(&mut self) -> Result<Json, ParseError> {
        self.enter()?;
        self.bump(); // '['
        let mut items = Vec::new();
        self.skip_whitespace();
        if self.peek() == Some(']') {
            self.bump();
            self.depth_left += 1;
            return Ok(Json::Array(items));
        }
        loop {
            self.skip_whitespace();
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(']') => {
                    self.bump();
                    self.depth_left += 1;
                    return Ok(Json::Array(items));
                }
                _ => return Err(self.error("Expected ',' or ']'")),
            }
        }
    }

    fn parse_string(&mut self, quote: char) -> Result<String, ParseError> {
        self.bump(); // opening quote
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error("Unterminated string")),
                Some(c) if c == quote => return Ok(out),
                Some('\\') => match self.bump() {
                    Some('"') => out.push('"'),
                    Some('\'') if !self.strict => out.push('\''),
                    Some('\\') => out.push('\\'),
                    Some('/') => out.push('/'),
                    Some('b') => out.push('\u{0008}'),
                    Some('f') => out.push('\u{000C}'),
                    Some('n') => out.push('\n'),
                    Some('r') => out.push('\r'),
                    Some('t') => out.push('\t'),
                    Some('u') => out.push(self.parse_unicode_escape()?),
                    _ => return Err(self.error("Invalid escape sequence")),
                },
                Some(c) if (c as u32) < 0x20 => {
                    return Err(self.error("Unescaped control character in string"));
                }
                Some(c) => out.push(c),
            }
        }
    }

    fn parse_hex4(&mut self) -> Result<u32, ParseError> {
        let mut code = 0u32;
        for _ in 0..4 {
            match self.bump() {
                Some(c) if c.is_ascii_hexdigit() => {
                    code = code * 16 + c.to_digit(16).unwrap_or(0);
                }
                _ => return Err(self.error("Invalid unicode escape")),
            }
        }
        Ok(code)
    }

    fn parse_unicode_escape(&mut self) -> Result<char, ParseError> {
        let code = self.parse_hex4()?;
        // High surrogate: a paired \uXXXX low surrogate must follow.
        if (0xD800..=0xDBFF).contains(&code) {
            if self.bump() != Some('\\') || self.bump() != Some('u') {
                return Err(self.error("Invalid unicode escape"));
            }
            let low = self.parse_hex4()?;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(self.error("Invalid unicode escape"));
            }
            let combined = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
            return char::from_u32(combined).ok_or_else(|| self.error("Invalid unicode escape"));
        }
        char::from_u32(code).ok_or_else(|| self.error("Invalid unicode escape"))
    }

    fn parse_number(&mut self) -> Result<Json, ParseError> {
        let mut text = String::new();
        if self.peek() == Some('-') {
            text.push('-');
            self.bump();
        }
        match self.peek() {
            Some('0') => {
                text.push('0');
                self.bump();
                if matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                    return Err(self.error("Invalid number: leading zeros not allowed"));
                }
            }
            Some(c) if c.is_ascii_digit() => self.digits_into(&mut text),
            _ => return Err(self.error("Expected digit")),
        }
        if self.peek() == Some('.') {
            text.push('.');
            self.bump();
            if !matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                return Err(self.error("Expected digit after decimal point"));
            }
            self.digits_into(&mut text);
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            text.push('e');
            self.bump();
            if matches!(self.peek(), Some('+' | '-')) {
                text.push(self.bump().unwrap_or('+'));
            }
            if !matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                return Err(self.error("Expected digit in exponent"));
            }
            self.digits_into(&mut text);
        }
        text.parse::<f64>()
            .map(Json::Number)
            .map_err(|_| self.error(format!("Invalid number '{}'", text)))
    }

    fn digits_into(&mut self, text: &mut String) {
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            text.push(c);
            self.bump();
        }
    }

    fn parse_literal(&mut self, literal: &'static str, value: Json) -> Result<Json, ParseError> {
        for expected in literal.chars() {
            // Position of the character about to be consumed; bump() would
            // already have advanced past it (and past a newline's line count)
            // by the time the mismatch is known.
            let (line, column) = (self.line, self.column);
            if self.bump() != Some(expected) {
                return Err(ParseError {
                    message: format!("Expected '{}'", literal),
                    line,
                    column,
                });
            }
        }
        Ok(value)
    }
}
