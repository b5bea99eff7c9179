/// Encoder contract tests: compact output, number formatting, the empty-array
/// rule and the (non-)escaping behavior of strings.
use easy_json::{
    array, object, parse, to_json_string, to_json_string_with, Document, EncodeOptions, Map,
    Value,
};

// ============================================================================
// Primitives
// ============================================================================

#[test]
fn encode_null_and_bools() {
    assert_eq!(to_json_string(&Value::Null), "null");
    assert_eq!(to_json_string(&Value::Bool(true)), "true");
    assert_eq!(to_json_string(&Value::Bool(false)), "false");
}

#[test]
fn encode_integral_number_without_fraction() {
    assert_eq!(to_json_string(&Value::Number(1.0)), "1");
    assert_eq!(to_json_string(&Value::Number(-42.0)), "-42");
    assert_eq!(to_json_string(&Value::Number(0.0)), "0");
}

#[test]
fn encode_negative_zero() {
    assert_eq!(to_json_string(&Value::Number(-0.0)), "0");
}

#[test]
fn encode_fractional_number() {
    assert_eq!(to_json_string(&Value::Number(2.75)), "2.75");
    assert_eq!(to_json_string(&Value::Number(-0.5)), "-0.5");
}

#[test]
fn encode_non_finite_as_null() {
    assert_eq!(to_json_string(&Value::Number(f64::NAN)), "null");
    assert_eq!(to_json_string(&Value::Number(f64::INFINITY)), "null");
}

#[test]
fn encode_string_quoted() {
    assert_eq!(to_json_string(&Value::from("hello")), r#""hello""#);
    assert_eq!(to_json_string(&Value::from("")), r#""""#);
}

#[test]
fn encode_string_is_not_escaped_by_default() {
    let value = Value::from("say \"hi\"\\n");
    assert_eq!(to_json_string(&value), "\"say \"hi\"\\n\"");
}

#[test]
fn encode_string_escaped_when_enabled() {
    let options = EncodeOptions {
        escape_strings: true,
        ..EncodeOptions::default()
    };
    let value = Value::from("a\"b\\c\nd\u{1}");
    assert_eq!(
        to_json_string_with(&value, &options),
        r#""a\"b\\c\nd\u0001""#
    );
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn encode_empty_array_builder() {
    assert_eq!(array![].to_string(), "[]");
}

#[test]
fn encode_empty_nested_array_never_null() {
    let doc = object!("items", Vec::<i32>::new(), "inner", array![]).unwrap();
    assert_eq!(doc.to_string(), r#"{"items":[],"inner":[]}"#);
}

#[test]
fn encode_empty_object() {
    assert_eq!(Document::new_object().to_string(), "{}");
    assert_eq!(to_json_string(&Value::Object(Map::new())), "{}");
}

#[test]
fn encode_nested_compact() {
    let doc = parse(r#"{ "a" : [ 1 , { "b" : null } , [ ] ] }"#).unwrap();
    assert_eq!(doc.to_string(), r#"{"a":[1,{"b":null},[]]}"#);
}

#[test]
fn encode_single_key_object() {
    let doc = object!("k", "v").unwrap();
    assert_eq!(doc.to_string(), r#"{"k":"v"}"#);
}

#[test]
fn encode_sorted_keys() {
    let doc = parse(r#"{"b":1,"c":{"z":1,"y":2},"a":2}"#).unwrap();
    let options = EncodeOptions {
        sort_keys: true,
        ..EncodeOptions::default()
    };
    assert_eq!(
        doc.to_json_string_with(&options),
        r#"{"a":2,"b":1,"c":{"y":2,"z":1}}"#
    );
}

#[test]
fn encode_is_idempotent() {
    let doc = parse(r#"{"x":[1,2.5,"s",true,null,{"y":[]}]}"#).unwrap();
    assert_eq!(doc.to_string(), doc.to_string());
}

#[test]
fn encode_output_reparses_to_equal_tree() {
    let doc = parse(r#"{"a":{"b":[{"c":1},{"c":2}]},"d":[],"e":-1.25,"f":"text"}"#).unwrap();
    let reparsed = parse(&doc.to_string()).unwrap();
    assert_eq!(reparsed, doc);
}
