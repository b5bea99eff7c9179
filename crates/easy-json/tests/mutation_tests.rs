/// Write-side tests: set, append, remove and get_mut, including atomicity of
/// failing calls.
use easy_json::{array, object, parse, Document, JsonError, Kind, Value};

// ============================================================================
// set
// ============================================================================

#[test]
fn set_overwrites_existing_field() {
    let mut doc = parse(r#"{"a":1}"#).unwrap();
    doc.set("a", "x").unwrap();
    assert_eq!(doc.to_string(), r#"{"a":"x"}"#);
}

#[test]
fn set_creates_terminal_field() {
    let mut doc = parse(r#"{"a":{}}"#).unwrap();
    doc.set("a.new", true).unwrap();
    assert!(doc.get_bool("a.new").unwrap());
}

#[test]
fn set_missing_intermediate_fails() {
    let mut doc = parse(r#"{"a":{}}"#).unwrap();
    let err = doc.set("x.y", 1).unwrap_err();
    assert!(matches!(err, JsonError::FieldNotExists(ref name) if name == "x"));
    assert_eq!(doc.to_string(), r#"{"a":{}}"#);
}

#[test]
fn set_array_element_in_place() {
    let mut doc = parse(r#"{"a":[1,2,3]}"#).unwrap();
    doc.set("a[1]", 20).unwrap();
    assert_eq!(doc.to_string(), r#"{"a":[1,20,3]}"#);
}

#[test]
fn set_array_element_out_of_bounds() {
    let mut doc = parse(r#"{"a":[1]}"#).unwrap();
    let err = doc.set("a[1]", 2).unwrap_err();
    assert!(matches!(
        err,
        JsonError::IndexOutOfBounds { index: 1, len: 1 }
    ));
    assert_eq!(doc.to_string(), r#"{"a":[1]}"#);
}

#[test]
fn set_on_array_root() {
    let mut doc = parse(r#"[{"id":1}]"#).unwrap();
    doc.set("[0].id", 2).unwrap();
    doc.set("[0]", "replaced").unwrap();
    assert_eq!(doc.to_string(), r#"["replaced"]"#);
}

#[test]
fn set_deep_path() {
    let mut doc = parse(r#"{"a":{"b":[{"c":1},{"c":2}]}}"#).unwrap();
    doc.set("a.b[1].c", vec![7, 8]).unwrap();
    assert_eq!(doc.to_string(), r#"{"a":{"b":[{"c":1},{"c":[7,8]}]}}"#);
}

#[test]
fn set_field_on_array_is_type_mismatch() {
    let mut doc = parse("[1,2]").unwrap();
    let err = doc.set("name", 1).unwrap_err();
    assert!(matches!(
        err,
        JsonError::TypeMismatch {
            expected: Kind::Object,
            found: Kind::Array
        }
    ));
}

#[test]
fn set_empty_path_is_invalid() {
    let mut doc = parse(r#"{"a":1}"#).unwrap();
    assert!(matches!(
        doc.set("", 5).unwrap_err(),
        JsonError::InvalidPath(_)
    ));
}

#[test]
fn set_nested_document_is_not_wrapped() {
    let mut doc = Document::new_object();
    let child = object!("k", 1).unwrap();
    doc.set("child", &child).unwrap();
    assert_eq!(doc.to_string(), r#"{"child":{"k":1}}"#);
}

// ============================================================================
// append
// ============================================================================

#[test]
fn append_to_field_array() {
    let mut doc = parse(r#"{"a":[1]}"#).unwrap();
    doc.append("a", 2).unwrap();
    assert_eq!(doc.to_string(), r#"{"a":[1,2]}"#);
}

#[test]
fn append_to_root_array() {
    let mut doc = parse("[1,2]").unwrap();
    doc.append("", "x").unwrap();
    assert_eq!(doc.to_string(), r#"[1,2,"x"]"#);
}

#[test]
fn append_to_root_object_fails() {
    let mut doc = parse(r#"{"a":1}"#).unwrap();
    let err = doc.append("", 1).unwrap_err();
    assert!(matches!(err, JsonError::NotAnArray(Kind::Object)));
}

#[test]
fn append_to_empty_builder_array() {
    let mut doc = array![];
    doc.append("", 1).unwrap();
    doc.append("", array![]).unwrap();
    assert_eq!(doc.to_string(), "[1,[]]");
}

#[test]
fn append_to_nested_index() {
    let mut doc = parse("[[1],[2]]").unwrap();
    doc.append("[1]", 3).unwrap();
    assert_eq!(doc.to_string(), "[[1],[2,3]]");
}

#[test]
fn append_to_non_array_fails() {
    let mut doc = parse(r#"{"a":{"b":1}}"#).unwrap();
    let err = doc.append("a.b", 2).unwrap_err();
    assert!(matches!(err, JsonError::NotAnArray(Kind::Number)));
    assert_eq!(doc.to_string(), r#"{"a":{"b":1}}"#);
}

#[test]
fn append_to_missing_field_fails() {
    let mut doc = parse(r#"{"a":{}}"#).unwrap();
    assert!(matches!(
        doc.append("a.list", 1).unwrap_err(),
        JsonError::FieldNotExists(_)
    ));
}

#[test]
fn append_index_out_of_bounds() {
    let mut doc = parse("[[1]]").unwrap();
    assert!(matches!(
        doc.append("[4]", 1).unwrap_err(),
        JsonError::IndexOutOfBounds { index: 4, len: 1 }
    ));
}

// ============================================================================
// remove / get_mut
// ============================================================================

#[test]
fn remove_field() {
    let mut doc = parse(r#"{"a":1,"b":2}"#).unwrap();
    assert_eq!(doc.remove("a").unwrap(), Value::Number(1.0));
    assert_eq!(doc.to_string(), r#"{"b":2}"#);
    assert!(matches!(
        doc.remove("a").unwrap_err(),
        JsonError::FieldNotExists(_)
    ));
}

#[test]
fn remove_array_element() {
    let mut doc = parse("[1,2,3]").unwrap();
    assert_eq!(doc.remove("[0]").unwrap(), Value::Number(1.0));
    assert_eq!(doc.to_string(), "[2,3]");
    assert!(doc.remove("[5]").is_err());
}

#[test]
fn get_mut_edits_in_place() {
    let mut doc = parse(r#"{"a":{"b":[1]}}"#).unwrap();
    if let Some(items) = doc.get_mut("a.b").unwrap().as_array_mut() {
        items.clear();
    }
    assert_eq!(doc.to_string(), r#"{"a":{"b":[]}}"#);
}

#[test]
fn get_mut_refuses_root() {
    let mut doc = parse("[1]").unwrap();
    assert!(matches!(
        doc.get_mut("").unwrap_err(),
        JsonError::InvalidPath(_)
    ));
}
