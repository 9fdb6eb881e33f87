//! Integration tests for Value types
//!
//! Tests Value variants, equality, truthiness, display, and instances.

use std::rc::Rc;

use tern_foundation::{ClassId, Instance, Value, ValueKind, format_general};

// =============================================================================
// Value Construction
// =============================================================================

#[test]
fn value_kinds() {
    let class = ClassId::from_index(1);
    assert_eq!(Value::Num(1.0).kind(), ValueKind::Num);
    assert_eq!(Value::from("s").kind(), ValueKind::String);
    assert_eq!(Value::Class(class).kind(), ValueKind::Class);
    assert_eq!(Value::instance(class, 0).kind(), ValueKind::Instance);
    assert_eq!(Value::Unsupported.kind(), ValueKind::Unsupported);
}

#[test]
fn string_from_bytes() {
    let v = Value::string(&b"\x00\xffraw"[..]);
    assert_eq!(v.as_bytes(), Some(&b"\x00\xffraw"[..]));
}

#[test]
fn empty_string_is_truthy() {
    assert!(Value::from("").is_truthy());
}

#[test]
fn zero_is_falsy() {
    assert!(!Value::Num(0.0).is_truthy());
    assert!(Value::Num(0.5).is_truthy());
}

// =============================================================================
// Equality
// =============================================================================

#[test]
fn strings_compare_by_content() {
    assert_eq!(Value::from("abc"), Value::from(String::from("abc")));
    assert_ne!(Value::from("abc"), Value::from("abd"));
}

#[test]
fn nan_equals_itself() {
    assert_eq!(Value::Num(f64::NAN), Value::Num(f64::NAN));
}

#[test]
fn instances_compare_by_identity() {
    let class = ClassId::from_index(7);
    let obj = Rc::new(Instance::new(class, 1));
    let a = Value::from(obj.clone());
    let b = Value::from(obj);
    assert_eq!(a, b);
    assert_ne!(a, Value::instance(class, 1));
}

#[test]
fn number_is_not_string() {
    assert_ne!(Value::Num(1.0), Value::from("1"));
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn numbers_display_in_general_format() {
    assert_eq!(Value::Num(100.0).to_string(), "100");
    assert_eq!(Value::Num(1e-7).to_string(), "1e-07");
    assert_eq!(format_general(123_456_789.0, 6), "1.23457e+08");
}

#[test]
fn invalid_utf8_displays_lossily() {
    let v = Value::from(vec![b'o', b'k', 0xff]);
    assert_eq!(v.to_string(), "ok\u{fffd}");
}
