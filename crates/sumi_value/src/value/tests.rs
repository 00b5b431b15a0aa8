use super::*;
use pretty_assertions::assert_eq;

#[test]
fn scalar_tags() {
    assert_eq!(Value::Int(1).type_tag(), TypeTag::Int);
    assert_eq!(Value::Byte(1).type_tag(), TypeTag::Byte);
    assert_eq!(Value::Float(1.5).type_tag(), TypeTag::Float);
    assert_eq!(Value::Bool(true).type_tag(), TypeTag::Bool);
    assert_eq!(Value::text("hi").type_tag(), TypeTag::Text);
    assert_eq!(Value::Unit.type_tag(), TypeTag::Unit);
}

#[test]
fn conformance_is_exact() {
    // No implicit widening between numeric kinds.
    assert!(Value::Byte(7).conforms_to(TypeTag::Byte));
    assert!(!Value::Byte(7).conforms_to(TypeTag::Int));
    assert!(!Value::Int(7).conforms_to(TypeTag::Float));
    assert!(!Value::text("7").conforms_to(TypeTag::Int));
}

#[test]
fn accessors_only_match_their_kind() {
    assert_eq!(Value::Int(3).as_int(), Some(3));
    assert_eq!(Value::Int(3).as_byte(), None);
    assert_eq!(Value::Byte(3).as_byte(), Some(3));
    assert_eq!(Value::Bool(false).as_bool(), Some(false));
    assert_eq!(Value::text("x").as_text(), Some("x"));
    assert_eq!(Value::Float(0.5).as_float(), Some(0.5));
    assert!(Value::Unit.as_variant().is_none());
}

#[test]
fn display_and_conversions() {
    assert_eq!(Value::from(42_i64).to_string(), "42");
    assert_eq!(Value::from(255_u8).to_string(), "255");
    assert_eq!(Value::from(2.0).to_string(), "2.0");
    assert_eq!(Value::from(true).to_string(), "true");
    assert_eq!(Value::from("a\"b").to_string(), "\"a\\\"b\"");
    assert_eq!(Value::from(()).to_string(), "()");
    assert_eq!(Value::from(String::from("s")), Value::text("s"));
    assert_eq!(Value::Int(1).type_name(), "int");
}
