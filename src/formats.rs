//! The format registry: pluggable `format` predicates.
//!
//! This module provides [`FormatRegistry`], a thread-safe mapping from a
//! format name to a pure `(&str) -> bool` predicate, pre-populated by
//! [`FormatRegistry::with_defaults`] with the draft 6/7 string formats.
//! Predicates never panic; a malformed input simply fails the check. An
//! instance that is not a string is vacuously valid under any format, and
//! the engine treats unrecognized format names as vacuously valid too.
//!
//! # Thread safety
//!
//! Storage is `Arc<RwLock<...>>`: clones share the same table, reads run
//! concurrently during validation, and registration is serialized.
//!
//! # Example
//!
//! ```rust
//! use verdict::FormatRegistry;
//!
//! let registry = FormatRegistry::with_defaults();
//! registry.register("even-length", |s: &str| s.len() % 2 == 0).unwrap();
//!
//! let check = registry.get("even-length").unwrap();
//! assert!(check("ab"));
//! assert!(!check("abc"));
//!
//! // Duplicate registration fails.
//! assert!(registry.register("even-length", |_: &str| true).is_err());
//! ```

use std::collections::HashMap;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::Arc;

use chrono::DateTime;
use parking_lot::RwLock;
use regex::Regex;

/// A format predicate.
pub type FormatCheck = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a format name that already exists.
    #[error("format '{0}' already registered")]
    DuplicateFormat(String),
}

/// A thread-safe registry of named format predicates.
pub struct FormatRegistry {
    checks: Arc<RwLock<HashMap<String, FormatCheck>>>,
}

impl FormatRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            checks: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Creates a registry with the draft 6/7 built-in formats installed:
    /// `date-time`, `time`, `email`, `hostname`, `ipv4`, `ipv6`, `uri`,
    /// `uri-reference`, `iri`, `iri-reference`, `uri-template`,
    /// `json-pointer`, `relative-json-pointer`, and `regex`.
    pub fn with_defaults() -> Self {
        let registry = Self::new();
        let builtins: [(&str, fn(&str) -> bool); 14] = [
            ("date-time", is_date_time),
            ("time", is_time),
            ("email", is_email),
            ("hostname", is_hostname),
            ("ipv4", is_ipv4),
            ("ipv6", is_ipv6),
            ("uri", is_uri),
            ("uri-reference", is_uri_reference),
            ("iri", is_iri),
            ("iri-reference", is_iri_reference),
            ("uri-template", is_uri_template),
            ("json-pointer", is_json_pointer),
            ("relative-json-pointer", is_relative_json_pointer),
            ("regex", is_regex),
        ];
        let mut checks = registry.checks.write();
        for (name, check) in builtins {
            checks.insert(name.to_string(), Arc::new(check));
        }
        drop(checks);
        registry
    }

    /// Registers a predicate under `name`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateFormat` if the name is taken.
    pub fn register<F>(&self, name: impl Into<String>, check: F) -> Result<(), RegistryError>
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        let name = name.into();
        let mut checks = self.checks.write();
        if checks.contains_key(&name) {
            return Err(RegistryError::DuplicateFormat(name));
        }
        checks.insert(name, Arc::new(check));
        Ok(())
    }

    /// Retrieves a predicate by name.
    pub fn get(&self, name: &str) -> Option<FormatCheck> {
        self.checks.read().get(name).cloned()
    }

    /// Whether a predicate is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.checks.read().contains_key(name)
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Clone for FormatRegistry {
    fn clone(&self) -> Self {
        Self {
            checks: Arc::clone(&self.checks),
        }
    }
}

/// RFC 3339 `date-time`, with case-insensitive `T`/`Z`. Valid ISO-8601
/// forms that are not valid RFC 3339 (ordinal dates, missing offsets) are
/// rejected by the underlying parse.
fn is_date_time(s: &str) -> bool {
    let normalized: String = s
        .chars()
        .map(|c| match c {
            't' => 'T',
            'z' => 'Z',
            c => c,
        })
        .collect();
    DateTime::parse_from_rfc3339(&normalized).is_ok()
}

/// RFC 3339 `full-time`: checked by anchoring to an arbitrary date.
fn is_time(s: &str) -> bool {
    is_date_time(&format!("1970-01-01T{}", s))
}

/// Practical RFC-5322-ish address: one `@`, a sane local part, and a
/// hostname (or bracketed IP literal) domain.
fn is_email(s: &str) -> bool {
    let Some((local, domain)) = s.rsplit_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > 64 {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    let local_ok = local
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "!#$%&'*+-/=?^_`{|}~.".contains(c));
    if !local_ok {
        return false;
    }
    if let Some(literal) = domain.strip_prefix('[').and_then(|d| d.strip_suffix(']')) {
        return match literal.strip_prefix("IPv6:") {
            Some(v6) => v6.parse::<Ipv6Addr>().is_ok(),
            None => literal.parse::<Ipv4Addr>().is_ok(),
        };
    }
    is_hostname(domain)
}

/// Hostname per RFC 1034 practically: dot-separated labels of at most 63
/// characters from `[A-Za-z0-9-]`, no leading or trailing hyphen.
/// Punycoded IDN labels (`xn--...`) pass as opaque ASCII.
fn is_hostname(s: &str) -> bool {
    if s.is_empty() || s.len() > 253 {
        return false;
    }
    s.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
    })
}

/// Exact dotted-quad only; integer or hex-encoded forms are rejected by
/// the std parser.
fn is_ipv4(s: &str) -> bool {
    s.parse::<Ipv4Addr>().is_ok()
}

fn is_ipv6(s: &str) -> bool {
    s.parse::<Ipv6Addr>().is_ok()
}

fn is_uri(s: &str) -> bool {
    is_uri_like(s, true, false)
}

fn is_uri_reference(s: &str) -> bool {
    is_uri_like(s, false, false)
}

fn is_iri(s: &str) -> bool {
    is_uri_like(s, true, true)
}

fn is_iri_reference(s: &str) -> bool {
    is_uri_like(s, false, true)
}

fn is_uri_like(s: &str, require_scheme: bool, allow_unicode: bool) -> bool {
    if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    if !allow_unicode && !s.is_ascii() {
        return false;
    }
    if s.chars().any(|c| "<>\"`\\^|{}".contains(c)) {
        return false;
    }
    if s.matches('#').count() > 1 {
        return false;
    }
    // Percent escapes must be complete.
    let bytes = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'%'
            && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
        {
            return false;
        }
    }
    !require_scheme || has_scheme(s)
}

fn has_scheme(s: &str) -> bool {
    let head = s.split(['/', '?', '#']).next().unwrap_or("");
    let Some((scheme, _)) = head.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// RFC 6570 level-of-syntax check: balanced, non-nested `{...}` holding a
/// well-formed variable list.
fn is_uri_template(s: &str) -> bool {
    let mut expression: Option<String> = None;
    for c in s.chars() {
        match (c, &mut expression) {
            ('{', Some(_)) => return false,
            ('{', None) => expression = Some(String::new()),
            ('}', Some(expr)) => {
                if !is_template_expression(expr) {
                    return false;
                }
                expression = None;
            }
            ('}', None) => return false,
            (c, Some(expr)) => expr.push(c),
            _ => {}
        }
    }
    expression.is_none()
}

fn is_template_expression(expr: &str) -> bool {
    let vars = expr
        .strip_prefix(['+', '#', '.', '/', ';', '?', '&'])
        .unwrap_or(expr);
    !vars.is_empty()
        && vars.split(',').all(|var| {
            let var = var.strip_suffix('*').unwrap_or(var);
            let var = match var.split_once(':') {
                Some((name, len)) => {
                    if len.is_empty() || !len.bytes().all(|b| b.is_ascii_digit()) {
                        return false;
                    }
                    name
                }
                None => var,
            };
            !var.is_empty()
                && var
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '%'))
        })
}

/// Empty, or `/`-prefixed segments where every `~` is escaped as `~0`/`~1`.
/// A leading `#` is invalid: the fragment form is not a JSON Pointer.
fn is_json_pointer(s: &str) -> bool {
    if s.is_empty() {
        return true;
    }
    if !s.starts_with('/') {
        return false;
    }
    let bytes = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'~' && !matches!(bytes.get(i + 1), Some(b'0' | b'1')) {
            return false;
        }
    }
    true
}

/// A non-negative integer prefix (no leading zeros), optionally followed by
/// `#` or a JSON Pointer suffix.
fn is_relative_json_pointer(s: &str) -> bool {
    let digits_end = s
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    let prefix = &s[..digits_end];
    if prefix.is_empty() || (prefix.len() > 1 && prefix.starts_with('0')) {
        return false;
    }
    let rest = &s[digits_end..];
    rest.is_empty() || rest == "#" || is_json_pointer(rest)
}

/// The pattern must itself compile.
fn is_regex(s: &str) -> bool {
    Regex::new(s).is_ok()
}
