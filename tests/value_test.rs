//! Integration tests for the JSON value model.

use indexmap::IndexMap;
use verdict::Json;

#[test]
fn test_undefined_lookups_never_panic() {
    let doc = Json::parse(r#"{ "user": { "name": "Ada" } }"#).unwrap();

    assert_eq!(doc["user"]["name"], Json::from("Ada"));
    assert!(doc["user"]["missing"].is_undefined());
    assert!(doc["missing"]["deeper"]["still"].is_undefined());
    assert!(doc["user"][3].is_undefined());

    // Indexing a scalar is Undefined too, not a panic.
    let scalar = Json::from(42);
    assert!(scalar["anything"].is_undefined());
    assert!(scalar[0].is_undefined());
}

#[test]
fn test_object_equality_ignores_key_order() {
    let a = Json::parse(r#"{ "x": 1, "y": 2 }"#).unwrap();
    let b = Json::parse(r#"{ "y": 2, "x": 1 }"#).unwrap();
    assert_eq!(a, b);
    assert!(a.matches(&b));

    // Arrays stay order-sensitive.
    let p = Json::parse("[1, 2]").unwrap();
    let q = Json::parse("[2, 1]").unwrap();
    assert_ne!(p, q);
}

#[test]
fn test_display_round_trips() {
    let texts = [
        "null",
        "true",
        "-3.5",
        r#""hello \"world\"""#,
        r#"[ 1, [ 2, 3 ], { "k": null } ]"#,
        r#"{ "a": [ true, false ], "b": { } }"#,
        "[]",
        "{}",
    ];
    for text in texts {
        let value = Json::parse(text).unwrap();
        let round = Json::parse(&value.to_string()).unwrap();
        assert_eq!(round, value, "round-trip failed for {}", text);
    }
}

#[test]
fn test_undefined_renders_but_null_parses() {
    assert_eq!(Json::Undefined.to_string(), "undefined");
    assert_eq!(Json::Null.to_string(), "null");
}

#[test]
fn test_kind_names() {
    assert_eq!(Json::Undefined.kind(), "undefined");
    assert_eq!(Json::Null.kind(), "null");
    assert_eq!(Json::Bool(true).kind(), "boolean");
    assert_eq!(Json::from(1.0).kind(), "number");
    assert_eq!(Json::from("s").kind(), "string");
    assert_eq!(Json::from(Vec::new()).kind(), "array");
    assert_eq!(Json::from(IndexMap::new()).kind(), "object");
}

#[test]
fn test_integer_detection() {
    assert!(Json::from(3).is_integer());
    assert!(Json::from(-2.0).is_integer());
    assert!(Json::from(0).is_integer());
    assert!(!Json::from(2.5).is_integer());
    assert!(!Json::from("3").is_integer());
}

#[test]
fn test_len_and_keys() {
    let doc = Json::parse(r#"{ "a": 1, "b": [10, 20, 30] }"#).unwrap();
    assert_eq!(doc.len(), Some(2));
    assert_eq!(doc["b"].len(), Some(3));
    assert_eq!(doc["a"].len(), None);
    let keys: Vec<&str> = doc.keys().collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn test_collecting_builders() {
    let arr: Json = (1..=3).map(Json::from).collect();
    assert_eq!(arr, Json::parse("[1, 2, 3]").unwrap());

    let obj: Json = [("a", Json::from(1)), ("b", Json::from(2))]
        .into_iter()
        .collect();
    assert_eq!(obj, Json::parse(r#"{ "a": 1, "b": 2 }"#).unwrap());
}

#[test]
fn test_string_escaping_in_display() {
    let value = Json::from("line\nbreak\tand \"quote\"");
    let rendered = value.to_string();
    assert!(rendered.contains("\\n"));
    assert!(rendered.contains("\\t"));
    assert!(rendered.contains("\\\""));
    assert_eq!(Json::parse(&rendered).unwrap(), value);
}
