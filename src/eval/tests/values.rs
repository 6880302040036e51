//! Value inspection, type names, and equality tests.

use super::*;

#[test]
fn test_inspect_primitives() {
    assert_eq!(Value::Integer(42).inspect(), "42");
    assert_eq!(Value::Integer(-7).inspect(), "-7");
    assert_eq!(Value::Boolean(true).inspect(), "true");
    assert_eq!(Value::Boolean(false).inspect(), "false");
    assert_eq!(Value::Null.inspect(), "null");
}

#[test]
fn test_inspect_string_is_raw() {
    // No quoting: the driver prints string results as their bytes.
    assert_eq!(Value::String("hello".to_string()).inspect(), "hello");
    assert_eq!(Value::String("".to_string()).inspect(), "");
}

#[test]
fn test_inspect_array() {
    let value = Value::Array(vec![
        Value::Integer(1),
        Value::String("two".to_string()),
        Value::Boolean(true),
    ]);
    assert_eq!(value.inspect(), "[1, two, true]");
}

#[test]
fn test_inspect_nested_array() {
    let value = Value::Array(vec![Value::Array(vec![Value::Integer(1)])]);
    assert_eq!(value.inspect(), "[[1]]");
}

#[test]
fn test_inspect_function() {
    let value = run("fn(x, y) { x + y; }");
    assert_eq!(value.inspect(), "fn(x, y) { (x + y); }");
}

#[test]
fn test_inspect_error() {
    assert_eq!(
        Value::error("identifier not found: foobar").inspect(),
        "ERROR: identifier not found: foobar"
    );
}

#[test]
fn test_inspect_return_value_is_transparent() {
    let value = Value::ReturnValue(Box::new(Value::Integer(5)));
    assert_eq!(value.inspect(), "5");
}

#[test]
fn test_type_names() {
    assert_eq!(Value::Integer(1).type_name(), "INTEGER");
    assert_eq!(Value::Boolean(true).type_name(), "BOOLEAN");
    assert_eq!(Value::Null.type_name(), "NULL");
    assert_eq!(Value::String(String::new()).type_name(), "STRING");
    assert_eq!(Value::Array(vec![]).type_name(), "ARRAY");
    assert_eq!(run("fn() {}").type_name(), "FUNCTION");
    assert_eq!(run("len").type_name(), "BUILTIN");
    assert_eq!(
        Value::ReturnValue(Box::new(Value::Null)).type_name(),
        "RETURN_VALUE"
    );
    assert_eq!(Value::error("boom").type_name(), "ERROR");
}

#[test]
fn test_truthiness() {
    assert!(Value::Integer(0).is_truthy());
    assert!(Value::Integer(1).is_truthy());
    assert!(Value::String(String::new()).is_truthy());
    assert!(Value::Array(vec![]).is_truthy());
    assert!(TRUE.is_truthy());
    assert!(!FALSE.is_truthy());
    assert!(!NULL.is_truthy());
}

#[test]
fn test_equality_by_variant_and_payload() {
    assert_eq!(Value::Integer(1), Value::Integer(1));
    assert_ne!(Value::Integer(1), Value::Integer(2));
    assert_ne!(Value::Integer(1), Value::Boolean(true));
    assert_eq!(Value::Null, Value::Null);
    assert_eq!(
        Value::Array(vec![Value::Integer(1)]),
        Value::Array(vec![Value::Integer(1)])
    );
}

#[test]
fn test_function_equality_is_identity() {
    let f = run("fn(x) { x }");
    assert_eq!(f.clone(), f);

    let g = run("fn(x) { x }");
    // Structurally identical but distinct closures.
    assert_ne!(f, g);
}

#[test]
fn test_canonical_singletons_match_built_values() {
    // Identity of TRUE/FALSE/NULL is an optimization, not a contract:
    // equality is by variant and payload.
    assert_eq!(TRUE, Value::Boolean(true));
    assert_eq!(FALSE, Value::Boolean(false));
    assert_eq!(NULL, Value::Null);
}
