//! Integration tests for object keyword validation.

use verdict::{is_valid, validate, Json, ValidateOptions};

fn check(schema: &str, instance: &str) -> bool {
    let schema = Json::parse(schema).unwrap();
    let instance = Json::parse(instance).unwrap();
    is_valid(&schema, &instance, ValidateOptions::new()).unwrap()
}

fn codes(schema: &str, instance: &str) -> Vec<String> {
    let schema = Json::parse(schema).unwrap();
    let instance = Json::parse(instance).unwrap();
    match validate(&schema, &instance, ValidateOptions::new())
        .unwrap()
        .into_result()
    {
        Ok(()) => Vec::new(),
        Err(errors) => errors.iter().map(|e| e.code.clone()).collect(),
    }
}

#[test]
fn test_required() {
    let schema = r#"{ "required": ["name", "email"] }"#;
    assert!(check(schema, r#"{ "name": "a", "email": "b" }"#));
    assert!(!check(schema, r#"{ "name": "a" }"#));
    assert_eq!(codes(schema, r#"{}"#), vec!["required", "required"]);
}

#[test]
fn test_properties() {
    let schema = r#"{
        "properties": {
            "age": { "type": "integer", "minimum": 0 }
        }
    }"#;
    assert!(check(schema, r#"{ "age": 30 }"#));
    assert!(check(schema, r#"{}"#));
    assert!(check(schema, r#"{ "other": "ignored" }"#));
    assert!(!check(schema, r#"{ "age": -1 }"#));
    assert!(!check(schema, r#"{ "age": "thirty" }"#));
}

#[test]
fn test_pattern_properties() {
    let schema = r#"{
        "patternProperties": { "^x-": { "type": "string" } }
    }"#;
    assert!(check(schema, r#"{ "x-trace": "abc", "other": 1 }"#));
    assert!(!check(schema, r#"{ "x-trace": 1 }"#));
}

#[test]
fn test_additional_properties() {
    let closed = r#"{
        "properties": { "a": true },
        "additionalProperties": false
    }"#;
    assert!(check(closed, r#"{ "a": 1 }"#));
    assert!(!check(closed, r#"{ "a": 1, "b": 2 }"#));
    assert_eq!(codes(closed, r#"{ "b": 2 }"#), vec!["additional_properties"]);

    // A property matched by patternProperties is not additional.
    let mixed = r#"{
        "properties": { "a": true },
        "patternProperties": { "^x-": true },
        "additionalProperties": { "type": "number" }
    }"#;
    assert!(check(mixed, r#"{ "a": "any", "x-b": "any", "c": 3 }"#));
    assert!(!check(mixed, r#"{ "c": "not a number" }"#));
}

#[test]
fn test_property_count_bounds() {
    let schema = r#"{ "minProperties": 1, "maxProperties": 2 }"#;
    assert!(check(schema, r#"{ "a": 1 }"#));
    assert!(check(schema, r#"{ "a": 1, "b": 2 }"#));
    assert!(!check(schema, r#"{}"#));
    assert!(!check(schema, r#"{ "a": 1, "b": 2, "c": 3 }"#));
}

#[test]
fn test_property_names() {
    let schema = r#"{ "propertyNames": { "pattern": "^[a-z]+$" } }"#;
    assert!(check(schema, r#"{ "abc": 1, "def": 2 }"#));
    assert!(!check(schema, r#"{ "Bad-Name": 1 }"#));
}

#[test]
fn test_dependencies_with_key_list() {
    let schema = r#"{ "dependencies": { "bar": ["foo"] } }"#;
    assert!(check(schema, r#"{ "foo": 1, "bar": 2 }"#));
    assert!(check(schema, r#"{ "foo": 1 }"#));
    assert!(check(schema, r#"{}"#));
    assert!(!check(schema, r#"{ "bar": 2 }"#));
    // Dependencies only constrain objects.
    assert!(check(schema, r#""bar""#));
    assert!(check(schema, "3"));
}

#[test]
fn test_dependencies_with_schema() {
    let schema = r#"{
        "dependencies": {
            "credit_card": { "required": ["billing_address"] }
        }
    }"#;
    assert!(check(
        schema,
        r#"{ "credit_card": "4111", "billing_address": "1 Main St" }"#
    ));
    assert!(!check(schema, r#"{ "credit_card": "4111" }"#));
    assert!(check(schema, r#"{ "billing_address": "1 Main St" }"#));
}

#[test]
fn test_object_keywords_ignore_non_objects() {
    let schema = r#"{ "required": ["a"], "minProperties": 1 }"#;
    assert!(check(schema, "[1, 2]"));
    assert!(check(schema, r#""text""#));
}

#[test]
fn test_nested_failure_location() {
    let schema = Json::parse(
        r#"{
            "properties": {
                "user": {
                    "properties": { "age": { "minimum": 0 } }
                }
            }
        }"#,
    )
    .unwrap();
    let instance = Json::parse(r#"{ "user": { "age": -1 } }"#).unwrap();
    let errors = validate(&schema, &instance, ValidateOptions::new())
        .unwrap()
        .into_result()
        .unwrap_err();
    assert_eq!(errors.first().instance_path.text(), "#/user/age");
    assert_eq!(
        errors.first().schema_path.text(),
        "#/properties/user/properties/age/minimum"
    );
}
