//! Integration tests for array keyword validation.

use verdict::{is_valid, validate, Json, ValidateOptions};

fn check(schema: &str, instance: &str) -> bool {
    let schema = Json::parse(schema).unwrap();
    let instance = Json::parse(instance).unwrap();
    is_valid(&schema, &instance, ValidateOptions::new()).unwrap()
}

#[test]
fn test_item_count_bounds() {
    let schema = r#"{ "minItems": 1, "maxItems": 3 }"#;
    assert!(check(schema, "[1]"));
    assert!(check(schema, "[1, 2, 3]"));
    assert!(!check(schema, "[]"));
    assert!(!check(schema, "[1, 2, 3, 4]"));
}

#[test]
fn test_single_items_schema_applies_to_all() {
    let schema = r#"{ "items": { "type": "number" } }"#;
    assert!(check(schema, "[1, 2.5, -3]"));
    assert!(check(schema, "[]"));
    assert!(!check(schema, r#"[1, "two"]"#));
}

#[test]
fn test_positional_items_and_additional() {
    let schema = r#"{
        "items": [{ "type": "string" }, { "type": "number" }],
        "additionalItems": false
    }"#;
    assert!(check(schema, r#"["a", 1]"#));
    assert!(check(schema, r#"["a"]"#));
    assert!(!check(schema, r#"[1, "a"]"#));
    assert!(!check(schema, r#"["a", 1, true]"#));

    let with_schema = r#"{
        "items": [{ "type": "string" }],
        "additionalItems": { "type": "boolean" }
    }"#;
    assert!(check(with_schema, r#"["a", true, false]"#));
    assert!(!check(with_schema, r#"["a", 1]"#));
}

#[test]
fn test_unique_items() {
    let schema = r#"{ "uniqueItems": true }"#;
    assert!(check(schema, "[1, 2, 3]"));
    assert!(check(schema, "[]"));
    assert!(!check(schema, "[1, 2, 1]"));

    // Equality is structural and ignores object key order.
    assert!(!check(schema, r#"[{ "a": 1, "b": 2 }, { "b": 2, "a": 1 }]"#));
}

#[test]
fn test_contains() {
    let schema = r#"{ "contains": { "type": "string" } }"#;
    assert!(check(schema, r#"[1, "found", 2]"#));
    assert!(!check(schema, "[1, 2]"));
    assert!(!check(schema, "[]"));
}

#[test]
fn test_array_keywords_ignore_non_arrays() {
    let schema = r#"{ "minItems": 2, "contains": { "type": "string" } }"#;
    assert!(check(schema, "7"));
    assert!(check(schema, r#"{ "a": 1 }"#));
}

#[test]
fn test_nested_failure_location() {
    let schema = Json::parse(r#"{ "items": { "type": "number" } }"#).unwrap();
    let instance = Json::parse(r#"[1, "two", 3]"#).unwrap();
    let errors = validate(&schema, &instance, ValidateOptions::new())
        .unwrap()
        .into_result()
        .unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().instance_path.text(), "#/1");
    assert_eq!(errors.first().schema_path.text(), "#/items/type");
}

#[test]
fn test_boolean_item_schemas() {
    assert!(check(r#"{ "items": true }"#, "[1, 2]"));
    assert!(!check(r#"{ "items": false }"#, "[1]"));
    assert!(check(r#"{ "items": false }"#, "[]"));
}
