//! The validation engine.
//!
//! [`Validator`] wraps a schema document, pre-scans it for `$id`
//! declarations, and evaluates instances against it per the configured
//! draft. Failures are accumulated — every applicable keyword reports,
//! rather than stopping at the first mismatch — except where a keyword's
//! own semantics demand otherwise (`not`, `if`/`then`/`else`, `oneOf`'s
//! exactly-one counting, `anyOf`'s first success).
//!
//! Reference handling: `$ref` resolves same-document fragments (`#`,
//! `#/...`) and `$id`-declared identifiers; sibling keywords next to
//! `$ref` are ignored per draft 6/7. Remote references (absolute URIs)
//! fail closed with `unresolved_reference` — the core performs no I/O.
//! Cyclic schema graphs terminate via an in-progress set of
//! (resolved target, instance location) pairs: re-entering a pair already
//! being evaluated is trivially valid.
//!
//! # Example
//!
//! ```rust
//! use verdict::{Json, ValidateOptions, Validator};
//!
//! let schema = Json::parse(r#"{
//!     "type": "object",
//!     "required": ["name"],
//!     "properties": { "name": { "type": "string", "minLength": 1 } }
//! }"#).unwrap();
//!
//! let validator = Validator::new(&schema, ValidateOptions::new()).unwrap();
//! assert!(validator.is_valid(&Json::parse(r#"{ "name": "Alice" }"#).unwrap()));
//! assert!(!validator.is_valid(&Json::parse(r#"{ "name": "" }"#).unwrap()));
//! ```

use std::collections::{HashMap, HashSet};

use stillwater::Validation;

use crate::error::{SchemaError, SchemaErrors};
use crate::formats::FormatRegistry;
use crate::pointer::{Keyword, Pointer, Segment};
use crate::schema::{
    code_points, is_multiple_of, Additional, Dependency, InvalidSchema, Items, Schema, SchemaNode,
};
use crate::value::Json;
use crate::ValidationResult;

/// The JSON Schema draft the engine honors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Draft {
    /// Draft 6: `const`, `contains`, numeric `exclusiveMinimum`/`Maximum`.
    Draft6,
    /// Draft 7: draft 6 plus `if`/`then`/`else` and additional formats.
    #[default]
    Draft7,
}

/// Immutable per-run configuration, threaded through every recursive call.
#[derive(Clone)]
pub struct ValidateOptions {
    pub(crate) strict: bool,
    pub(crate) version: Draft,
    pub(crate) max_depth: usize,
    pub(crate) assert_formats: bool,
    pub(crate) formats: FormatRegistry,
}

impl ValidateOptions {
    pub fn new() -> Self {
        Self {
            strict: false,
            version: Draft::Draft7,
            max_depth: 100,
            assert_formats: false,
            formats: FormatRegistry::with_defaults(),
        }
    }

    /// Makes malformed keyword shapes a hard `invalid_schema` failure
    /// instead of being ignored.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Selects the draft whose keyword set is honored.
    pub fn version(mut self, version: Draft) -> Self {
        self.version = version;
        self
    }

    /// Caps evaluation depth. Deeper schema/instance graphs fail closed
    /// with `max_depth_exceeded` rather than overflowing the stack.
    /// The default is 100.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Turns `format` from an annotation into an assertion. Off by
    /// default. Unrecognized format names are vacuously valid either way.
    pub fn assert_formats(mut self, assert: bool) -> Self {
        self.assert_formats = assert;
        self
    }

    /// Supplies a custom format registry.
    pub fn with_formats(mut self, formats: FormatRegistry) -> Self {
        self.formats = formats;
        self
    }
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A wrapped schema document ready to validate instances.
///
/// Construction classifies the root document (a non-boolean, non-object
/// root is an [`InvalidSchema`] error) and builds the `$id` map once; the
/// validator is then read-only and safely usable from multiple threads.
pub struct Validator<'s> {
    root: &'s Json,
    ids: HashMap<&'s str, &'s Json>,
    options: ValidateOptions,
}

impl<'s> Validator<'s> {
    /// Wraps `schema`, pre-scanning it for `$id` declarations.
    pub fn new(schema: &'s Json, options: ValidateOptions) -> Result<Self, InvalidSchema> {
        Schema::resolve(schema, options.strict, options.version)?;
        let mut ids = HashMap::new();
        collect_ids(schema, &mut ids);
        Ok(Self {
            root: schema,
            ids,
            options,
        })
    }

    /// Evaluates `instance` against the schema, accumulating every failure.
    pub fn validate(&self, instance: &Json) -> ValidationResult<()> {
        let mut vm = Vm {
            root: self.root,
            ids: &self.ids,
            options: &self.options,
            instance_ptr: Pointer::root(),
            schema_ptr: Pointer::root(),
            in_progress: HashSet::new(),
            depth: 0,
        };
        let errors = vm.eval(self.root, instance);
        if errors.is_empty() {
            Validation::Success(())
        } else {
            Validation::Failure(SchemaErrors::from_vec(errors))
        }
    }

    /// The boolean verdict.
    pub fn is_valid(&self, instance: &Json) -> bool {
        matches!(self.validate(instance), Validation::Success(_))
    }
}

/// One-shot evaluation with diagnostics.
pub fn validate(
    schema: &Json,
    instance: &Json,
    options: ValidateOptions,
) -> Result<ValidationResult<()>, InvalidSchema> {
    Ok(Validator::new(schema, options)?.validate(instance))
}

/// One-shot boolean verdict.
pub fn is_valid(
    schema: &Json,
    instance: &Json,
    options: ValidateOptions,
) -> Result<bool, InvalidSchema> {
    Ok(Validator::new(schema, options)?.is_valid(instance))
}

/// Registers `$id` declarations reachable through schema positions only.
/// Literal data under `enum`, `const`, or `default` is not a schema and
/// must not register reference targets.
fn collect_ids<'s>(schema: &'s Json, ids: &mut HashMap<&'s str, &'s Json>) {
    let Json::Object(map) = schema else { return };
    if let Some(id) = schema.get_key("$id").as_str() {
        ids.entry(id).or_insert(schema);
    }
    for (key, value) in map {
        match key.as_str() {
            // One sub-schema, or a positional list of them.
            "items" => match value {
                Json::Array(children) => {
                    for child in children {
                        collect_ids(child, ids);
                    }
                }
                _ => collect_ids(value, ids),
            },
            "additionalItems" | "contains" | "additionalProperties" | "propertyNames"
            | "not" | "if" | "then" | "else" => collect_ids(value, ids),
            // A map whose values are sub-schemas. Key-list dependencies
            // are arrays of strings and fall out as non-objects.
            "properties" | "patternProperties" | "definitions" | "dependencies" => {
                if let Json::Object(children) = value {
                    for child in children.values() {
                        collect_ids(child, ids);
                    }
                }
            }
            "allOf" | "anyOf" | "oneOf" => {
                if let Json::Array(children) = value {
                    for child in children {
                        collect_ids(child, ids);
                    }
                }
            }
            _ => {}
        }
    }
}

struct Vm<'s, 'a> {
    root: &'s Json,
    ids: &'a HashMap<&'s str, &'s Json>,
    options: &'a ValidateOptions,
    instance_ptr: Pointer,
    schema_ptr: Pointer,
    in_progress: HashSet<(String, String)>,
    depth: usize,
}

impl<'s, 'a> Vm<'s, 'a> {
    /// Evaluates one schema node, returning that node's failures.
    fn eval(&mut self, schema_doc: &'s Json, instance: &Json) -> Vec<SchemaError> {
        if self.depth >= self.options.max_depth {
            return vec![SchemaError::new(
                self.instance_ptr.clone(),
                self.schema_ptr.clone(),
                format!("maximum evaluation depth {} exceeded", self.options.max_depth),
            )
            .with_code("max_depth_exceeded")];
        }
        self.depth += 1;
        let errors = self.eval_inner(schema_doc, instance);
        self.depth -= 1;
        errors
    }

    fn eval_inner(&mut self, schema_doc: &'s Json, instance: &Json) -> Vec<SchemaError> {
        let node = match Schema::resolve(schema_doc, self.options.strict, self.options.version) {
            Ok(Schema::Bool(true)) => return Vec::new(),
            Ok(Schema::Bool(false)) => {
                return vec![SchemaError::new(
                    self.instance_ptr.clone(),
                    self.schema_ptr.clone(),
                    "schema allows nothing",
                )
                .with_code("false_schema")]
            }
            Ok(Schema::Node(node)) => node,
            Err(invalid) => {
                return vec![SchemaError::new(
                    self.instance_ptr.clone(),
                    self.schema_ptr.clone(),
                    invalid.to_string(),
                )
                .with_code("invalid_schema")]
            }
        };

        // A node carrying $ref is evaluated as the referenced schema;
        // sibling keywords are ignored per draft 6/7.
        if let Some(target) = node.ref_target {
            return self.eval_ref(target, instance);
        }

        let mut errors = Vec::new();
        self.check_type(&node, instance, &mut errors);
        self.check_literals(&node, instance, &mut errors);
        match instance {
            Json::Number(n) => self.check_numeric(&node, *n, &mut errors),
            Json::String(s) => self.check_string(&node, s, &mut errors),
            Json::Array(items) => self.check_array(&node, items, &mut errors),
            Json::Object(_) => self.check_object(&node, instance, &mut errors),
            _ => {}
        }
        self.check_combinators(&node, instance, &mut errors);
        errors
    }

    fn eval_ref(&mut self, reference: &'s str, instance: &Json) -> Vec<SchemaError> {
        let (target, identity) = match self.resolve_ref(reference) {
            Ok(resolved) => resolved,
            Err(error) => return vec![error],
        };
        let guard = (identity, self.instance_ptr.text());
        if !self.in_progress.insert(guard.clone()) {
            // Cycle: the re-entrant branch is trivially valid; the verdict
            // is grounded by the keywords already satisfied at closure.
            return Vec::new();
        }
        self.schema_ptr.push_keyword(Keyword::Ref);
        let errors = self.eval(target, instance);
        self.schema_ptr.pop();
        self.in_progress.remove(&guard);
        errors
    }

    fn resolve_ref(&mut self, reference: &'s str) -> Result<(&'s Json, String), SchemaError> {
        if reference.is_empty() || reference == "#" {
            return Ok((self.root, "#".to_string()));
        }
        if reference.starts_with("#/") {
            let target = Pointer::parse(reference).resolve(self.root);
            if target.is_undefined() {
                return Err(self.ref_error(reference, "reference target not found"));
            }
            return Ok((target, reference.to_string()));
        }
        if let Some(target) = self.ids.get(reference).copied() {
            return Ok((target, reference.to_string()));
        }
        if is_absolute_uri(reference) {
            return Err(self.ref_error(reference, "remote reference retrieval is not supported"));
        }
        Err(self.ref_error(reference, "reference target not found"))
    }

    fn ref_error(&mut self, reference: &str, reason: &str) -> SchemaError {
        self.error_at(Keyword::Ref, "unresolved_reference", format!("{}: {}", reason, reference))
    }

    /// Builds an error located at the current instance position and at the
    /// given keyword within the current schema position.
    fn error_at(&mut self, keyword: Keyword, code: &'static str, message: String) -> SchemaError {
        self.schema_ptr.push_keyword(keyword);
        let error = SchemaError::new(self.instance_ptr.clone(), self.schema_ptr.clone(), message)
            .with_code(code);
        self.schema_ptr.pop();
        error
    }

    /// Evaluates a sub-schema one keyword down.
    fn eval_child(
        &mut self,
        keyword: Keyword,
        schema: &'s Json,
        instance: &Json,
    ) -> Vec<SchemaError> {
        self.schema_ptr.push_keyword(keyword);
        let errors = self.eval(schema, instance);
        self.schema_ptr.pop();
        errors
    }

    /// Evaluates a sub-schema at `keyword/<segment>`.
    fn eval_child_at(
        &mut self,
        keyword: Keyword,
        segment: Segment,
        schema: &'s Json,
        instance: &Json,
    ) -> Vec<SchemaError> {
        self.schema_ptr.push_keyword(keyword);
        self.schema_ptr.push(segment);
        let errors = self.eval(schema, instance);
        self.schema_ptr.pop();
        self.schema_ptr.pop();
        errors
    }

    fn check_type(&mut self, node: &SchemaNode<'s>, instance: &Json, errors: &mut Vec<SchemaError>) {
        let Some(types) = &node.types else { return };
        let matched = types.iter().any(|name| type_matches(name, instance));
        if !matched {
            errors.push(
                self.error_at(
                    Keyword::Type,
                    "type",
                    format!("expected {}", types.join(" or ")),
                )
                .with_expected(types.join(" or "))
                .with_got(instance.kind()),
            );
        }
    }

    fn check_literals(
        &mut self,
        node: &SchemaNode<'s>,
        instance: &Json,
        errors: &mut Vec<SchemaError>,
    ) {
        if let Some(constant) = node.const_value {
            if !instance.matches(constant) {
                errors.push(
                    self.error_at(Keyword::Const, "const", "value differs from constant".into())
                        .with_expected(constant.to_string())
                        .with_got(instance.to_string()),
                );
            }
        }
        if let Some(values) = node.enum_values {
            if !values.iter().any(|v| instance.matches(v)) {
                errors.push(
                    self.error_at(Keyword::Enum, "enum", "value not in enumeration".into())
                        .with_got(instance.to_string()),
                );
            }
        }
    }

    fn check_numeric(&mut self, node: &SchemaNode<'s>, n: f64, errors: &mut Vec<SchemaError>) {
        let numeric = &node.numeric;
        if let Some(min) = numeric.minimum {
            if n < min {
                errors.push(self.error_at(
                    Keyword::Minimum,
                    "minimum",
                    format!("{} is less than minimum {}", n, min),
                ));
            }
        }
        if let Some(max) = numeric.maximum {
            if n > max {
                errors.push(self.error_at(
                    Keyword::Maximum,
                    "maximum",
                    format!("{} is greater than maximum {}", n, max),
                ));
            }
        }
        if let Some(min) = numeric.exclusive_minimum {
            if n <= min {
                errors.push(self.error_at(
                    Keyword::ExclusiveMinimum,
                    "exclusive_minimum",
                    format!("{} is not greater than {}", n, min),
                ));
            }
        }
        if let Some(max) = numeric.exclusive_maximum {
            if n >= max {
                errors.push(self.error_at(
                    Keyword::ExclusiveMaximum,
                    "exclusive_maximum",
                    format!("{} is not less than {}", n, max),
                ));
            }
        }
        if let Some(divisor) = numeric.multiple_of {
            if !is_multiple_of(n, divisor) {
                errors.push(self.error_at(
                    Keyword::MultipleOf,
                    "multiple_of",
                    format!("{} is not a multiple of {}", n, divisor),
                ));
            }
        }
    }

    fn check_string(&mut self, node: &SchemaNode<'s>, s: &str, errors: &mut Vec<SchemaError>) {
        let string = &node.string;
        let length = code_points(s);
        if let Some(min) = string.min_length {
            if length < min {
                errors.push(self.error_at(
                    Keyword::MinLength,
                    "min_length",
                    format!("length must be at least {}, got {}", min, length),
                ));
            }
        }
        if let Some(max) = string.max_length {
            if length > max {
                errors.push(self.error_at(
                    Keyword::MaxLength,
                    "max_length",
                    format!("length must be at most {}, got {}", max, length),
                ));
            }
        }
        if let Some(pattern) = &string.pattern {
            if !pattern.is_match(s) {
                errors.push(
                    self.error_at(
                        Keyword::Pattern,
                        "pattern",
                        format!("value does not match pattern {}", pattern.as_str()),
                    )
                    .with_got(s.to_string()),
                );
            }
        }
        if self.options.assert_formats {
            if let Some(name) = string.format {
                // Unrecognized format names are vacuously valid.
                if let Some(check) = self.options.formats.get(name) {
                    if !check(s) {
                        errors.push(
                            self.error_at(
                                Keyword::Format,
                                "format",
                                format!("value is not a valid {}", name),
                            )
                            .with_expected(format!("format \"{}\"", name))
                            .with_got(s.to_string()),
                        );
                    }
                }
            }
        }
    }

    fn check_array(
        &mut self,
        node: &SchemaNode<'s>,
        items: &[Json],
        errors: &mut Vec<SchemaError>,
    ) {
        let array = &node.array;
        if let Some(min) = array.min_items {
            if items.len() < min {
                errors.push(self.error_at(
                    Keyword::MinItems,
                    "min_items",
                    format!("must have at least {} items, got {}", min, items.len()),
                ));
            }
        }
        if let Some(max) = array.max_items {
            if items.len() > max {
                errors.push(self.error_at(
                    Keyword::MaxItems,
                    "max_items",
                    format!("must have at most {} items, got {}", max, items.len()),
                ));
            }
        }
        if array.unique_items {
            'search: for i in 0..items.len() {
                for j in i + 1..items.len() {
                    if items[i].matches(&items[j]) {
                        errors.push(self.error_at(
                            Keyword::UniqueItems,
                            "unique_items",
                            format!("items {} and {} are equal", i, j),
                        ));
                        break 'search;
                    }
                }
            }
        }
        match &array.items {
            Some(Items::Single(schema)) => {
                for (i, item) in items.iter().enumerate() {
                    self.instance_ptr.push_index(i);
                    errors.extend(self.eval_child(Keyword::Items, *schema, item));
                    self.instance_ptr.pop();
                }
            }
            Some(Items::Positional(schemas)) => {
                for (i, item) in items.iter().enumerate() {
                    self.instance_ptr.push_index(i);
                    if let Some(schema) = schemas.get(i) {
                        errors.extend(self.eval_child_at(
                            Keyword::Items,
                            Segment::Index(i),
                            schema,
                            item,
                        ));
                    } else {
                        match &array.additional_items {
                            Some(Additional::Bool(false)) => {
                                errors.push(self.error_at(
                                    Keyword::AdditionalItems,
                                    "additional_items",
                                    format!("item {} is not allowed", i),
                                ));
                            }
                            Some(Additional::Schema(schema)) => {
                                errors.extend(self.eval_child(
                                    Keyword::AdditionalItems,
                                    *schema,
                                    item,
                                ));
                            }
                            Some(Additional::Bool(true)) | None => {}
                        }
                    }
                    self.instance_ptr.pop();
                }
            }
            None => {}
        }
        if let Some(schema) = array.contains {
            let satisfied = items.iter().enumerate().any(|(i, item)| {
                self.instance_ptr.push_index(i);
                let child_errors = self.eval_child(Keyword::Contains, schema, item);
                self.instance_ptr.pop();
                child_errors.is_empty()
            });
            if !satisfied {
                errors.push(self.error_at(
                    Keyword::Contains,
                    "contains",
                    "no item matches the contained schema".into(),
                ));
            }
        }
    }

    fn check_object(
        &mut self,
        node: &SchemaNode<'s>,
        instance: &Json,
        errors: &mut Vec<SchemaError>,
    ) {
        let Some(map) = instance.as_object() else { return };
        let object = &node.object;

        if let Some(min) = object.min_properties {
            if map.len() < min {
                errors.push(self.error_at(
                    Keyword::MinProperties,
                    "min_properties",
                    format!("must have at least {} properties, got {}", min, map.len()),
                ));
            }
        }
        if let Some(max) = object.max_properties {
            if map.len() > max {
                errors.push(self.error_at(
                    Keyword::MaxProperties,
                    "max_properties",
                    format!("must have at most {} properties, got {}", max, map.len()),
                ));
            }
        }
        if let Some(required) = &object.required {
            for name in required {
                if !map.contains_key(*name) {
                    errors.push(
                        self.error_at(
                            Keyword::Required,
                            "required",
                            format!("property \"{}\" is required", name),
                        )
                        .with_expected((*name).to_string()),
                    );
                }
            }
        }
        for (trigger, dependency) in &object.dependencies {
            if !map.contains_key(*trigger) {
                continue;
            }
            match dependency {
                Dependency::Keys(names) => {
                    for name in names {
                        if !map.contains_key(*name) {
                            errors.push(self.error_at(
                                Keyword::Dependencies,
                                "dependencies",
                                format!(
                                    "property \"{}\" requires property \"{}\"",
                                    trigger, name
                                ),
                            ));
                        }
                    }
                }
                Dependency::Schema(schema) => {
                    errors.extend(self.eval_child_at(
                        Keyword::Dependencies,
                        Segment::Property((*trigger).to_string()),
                        *schema,
                        instance,
                    ));
                }
            }
        }

        for (name, value) in map {
            let mut evaluated = false;
            if let Some(schema) = object.properties.and_then(|props| props.get(name)) {
                evaluated = true;
                self.instance_ptr.push_property(name.as_str());
                errors.extend(self.eval_child_at(
                    Keyword::Properties,
                    Segment::Property(name.clone()),
                    schema,
                    value,
                ));
                self.instance_ptr.pop();
            }
            for (pattern, schema) in &object.pattern_properties {
                if pattern.is_match(name) {
                    evaluated = true;
                    self.instance_ptr.push_property(name.as_str());
                    errors.extend(self.eval_child_at(
                        Keyword::PatternProperties,
                        Segment::Property(pattern.as_str().to_string()),
                        *schema,
                        value,
                    ));
                    self.instance_ptr.pop();
                }
            }
            if !evaluated {
                match &object.additional_properties {
                    Some(Additional::Bool(false)) => {
                        self.instance_ptr.push_property(name.as_str());
                        errors.push(self.error_at(
                            Keyword::AdditionalProperties,
                            "additional_properties",
                            format!("property \"{}\" is not allowed", name),
                        ));
                        self.instance_ptr.pop();
                    }
                    Some(Additional::Schema(schema)) => {
                        self.instance_ptr.push_property(name.as_str());
                        errors.extend(self.eval_child(
                            Keyword::AdditionalProperties,
                            *schema,
                            value,
                        ));
                        self.instance_ptr.pop();
                    }
                    Some(Additional::Bool(true)) | None => {}
                }
            }
        }

        if let Some(schema) = object.property_names {
            for name in map.keys() {
                let as_string = Json::String(name.clone());
                self.instance_ptr.push_property(name.as_str());
                errors.extend(self.eval_child(Keyword::PropertyNames, schema, &as_string));
                self.instance_ptr.pop();
            }
        }
    }

    fn check_combinators(
        &mut self,
        node: &SchemaNode<'s>,
        instance: &Json,
        errors: &mut Vec<SchemaError>,
    ) {
        let combinators = &node.combinators;

        if let Some(schemas) = combinators.all_of {
            for (i, schema) in schemas.iter().enumerate() {
                errors.extend(self.eval_child_at(
                    Keyword::AllOf,
                    Segment::Index(i),
                    schema,
                    instance,
                ));
            }
        }

        if let Some(schemas) = combinators.any_of {
            let matched = schemas.iter().enumerate().any(|(i, schema)| {
                self.eval_child_at(Keyword::AnyOf, Segment::Index(i), schema, instance)
                    .is_empty()
            });
            if !matched {
                errors.push(self.error_at(
                    Keyword::AnyOf,
                    "any_of_none_matched",
                    format!("value did not match any of {} schemas", schemas.len()),
                ));
            }
        }

        if let Some(schemas) = combinators.one_of {
            let matched = schemas
                .iter()
                .enumerate()
                .filter(|&(i, schema)| {
                    self.eval_child_at(Keyword::OneOf, Segment::Index(i), schema, instance)
                        .is_empty()
                })
                .count();
            if matched == 0 {
                errors.push(self.error_at(
                    Keyword::OneOf,
                    "one_of_none_matched",
                    format!("value did not match any of {} schemas", schemas.len()),
                ));
            } else if matched > 1 {
                errors.push(self.error_at(
                    Keyword::OneOf,
                    "one_of_multiple_matched",
                    format!("value matched {} schemas, expected exactly one", matched),
                ));
            }
        }

        if let Some(schema) = combinators.not {
            if self.eval_child(Keyword::Not, schema, instance).is_empty() {
                errors.push(self.error_at(
                    Keyword::Not,
                    "not",
                    "value matches the forbidden schema".into(),
                ));
            }
        }

        if let Some(condition) = combinators.if_schema {
            let holds = self.eval_child(Keyword::If, condition, instance).is_empty();
            if holds {
                if let Some(then_schema) = combinators.then_schema {
                    errors.extend(self.eval_child(Keyword::Then, then_schema, instance));
                }
            } else if let Some(else_schema) = combinators.else_schema {
                errors.extend(self.eval_child(Keyword::Else, else_schema, instance));
            }
        }
    }
}

fn type_matches(name: &str, instance: &Json) -> bool {
    match name {
        "null" => instance.is_null(),
        "boolean" => matches!(instance, Json::Bool(_)),
        "number" => instance.is_number(),
        "integer" => instance.is_integer(),
        "string" => instance.is_string(),
        "array" => instance.is_array(),
        "object" => instance.is_object(),
        _ => false,
    }
}

fn is_absolute_uri(reference: &str) -> bool {
    let head = reference.split(['/', '#']).next().unwrap_or("");
    let Some((scheme, _)) = head.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
