//! Integration tests for pointers, escaping, and document navigation.

use verdict::{Json, Keyword, Pointer, Segment};

#[test]
fn test_root_renders_as_fragment() {
    assert_eq!(Pointer::root().text(), "#/");
    assert!(Pointer::root().is_root());
}

#[test]
fn test_push_pop_inverse() {
    let mut pointer = Pointer::root();
    pointer.push_property("users");
    pointer.push_index(3);
    pointer.push_keyword(Keyword::MinLength);
    assert_eq!(pointer.text(), "#/users/3/minLength");

    assert_eq!(pointer.pop(), Segment::Keyword(Keyword::MinLength));
    assert_eq!(pointer.pop(), Segment::Index(3));
    assert_eq!(pointer.pop(), Segment::Property("users".to_string()));
    assert!(pointer.is_root());
}

#[test]
#[should_panic(expected = "pop on empty pointer")]
fn test_pop_on_root_panics() {
    Pointer::root().pop();
}

#[test]
fn test_parse_classifies_segments() {
    let pointer = Pointer::parse("#/properties/age/minimum");
    let segments: Vec<&Segment> = pointer.segments().collect();
    assert_eq!(segments[0], &Segment::Keyword(Keyword::Properties));
    assert_eq!(segments[1], &Segment::Property("age".to_string()));
    assert_eq!(segments[2], &Segment::Keyword(Keyword::Minimum));

    let indexed = Pointer::parse("#/items/0");
    assert_eq!(indexed.segments().last(), Some(&Segment::Index(0)));
}

#[test]
fn test_parse_render_round_trip() {
    for text in ["#/", "#/a/b/c", "#/a~0b/c~1d", "#/0/10/x"] {
        assert_eq!(Pointer::parse(text).text(), text);
    }
}

#[test]
fn test_escape_bijectivity() {
    for token in ["plain", "a/b", "a~b", "~/", "~0", "~1", ""] {
        assert_eq!(Pointer::unescape(&Pointer::escape(token)), token);
    }
    assert_eq!(Pointer::escape("a/b~c"), "a~1b~0c");
    assert_eq!(Pointer::unescape("a~1b~0c"), "a/b~c");
}

#[test]
fn test_resolve_navigates_documents() {
    let doc = Json::parse(
        r#"{
            "users": [
                { "name": "Ada", "a/b": 1 },
                { "name": "Grace" }
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(
        Pointer::parse("#/users/1/name").resolve(&doc),
        &Json::from("Grace")
    );
    assert_eq!(Pointer::parse("#/users/0/a~1b").resolve(&doc), &Json::from(1));
    assert!(Pointer::parse("#/users/5").resolve(&doc).is_undefined());
    assert!(Pointer::parse("#/missing/deep").resolve(&doc).is_undefined());
    assert_eq!(Pointer::root().resolve(&doc), &doc);
}

#[test]
fn test_keyword_accessors() {
    let mut pointer = Pointer::parse("#/properties/name/minLength");
    assert_eq!(pointer.keyword(), Some(Keyword::MinLength));
    pointer.pop();
    assert_eq!(pointer.keyword(), None);

    assert_eq!(pointer.first_property(), Some("name"));
    assert_eq!(pointer.last_property(), Some("name"));
}

#[test]
fn test_keyword_vocabulary_round_trip() {
    for keyword in [
        Keyword::Type,
        Keyword::ExclusiveMaximum,
        Keyword::PatternProperties,
        Keyword::Ref,
        Keyword::Definitions,
    ] {
        assert_eq!(Keyword::from_name(keyword.as_str()), Some(keyword));
    }
    assert_eq!(Keyword::from_name("notAKeyword"), None);
    assert_eq!(Keyword::Ref.as_str(), "$ref");
}

#[test]
fn test_digit_tokens_follow_the_node_kind() {
    // RFC 6901: a digit token is an array position on arrays and a member
    // name on objects.
    let doc = Json::parse(r#"{ "0": "zero", "items": ["a"] }"#).unwrap();
    assert_eq!(Pointer::parse("#/items/0").resolve(&doc), &Json::from("a"));
    assert_eq!(Pointer::parse("#/0").resolve(&doc), &Json::from("zero"));
    assert!(Pointer::parse("#/1").resolve(&doc).is_undefined());
}

#[test]
fn test_leading_zero_token_is_a_property() {
    // "01" is not a valid array index; it only ever names a member.
    let doc = Json::parse(r#"{ "01": "one", "arr": [10, 20] }"#).unwrap();
    let pointer = Pointer::parse("#/01");
    assert_eq!(pointer.segments().last(), Some(&Segment::Property("01".to_string())));
    assert_eq!(pointer.resolve(&doc), &Json::from("one"));
    assert!(Pointer::parse("#/arr/01").resolve(&doc).is_undefined());
}
