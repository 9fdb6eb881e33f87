//! String primitives. Strings are byte strings; no UTF-8 decoding happens here.

use std::rc::Rc;

use tern_foundation::Value;

use crate::vm::Vm;

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|window| window == needle)
}

/// String: `contains ` - 1 if the argument occurs in the receiver, else 0.
///
/// The empty string is contained in every string, including itself.
pub(crate) fn string_contains(_vm: &mut Vm, args: &[Value]) -> Value {
    match (args.first(), args.get(1)) {
        (Some(Value::String(s)), Some(Value::String(search))) => Value::from(contains(s, search)),
        _ => Value::Unsupported,
    }
}

/// String: count - length in bytes
#[allow(clippy::cast_precision_loss)]
pub(crate) fn string_count(_vm: &mut Vm, args: &[Value]) -> Value {
    match args.first() {
        Some(Value::String(s)) => Value::Num(s.len() as f64),
        _ => Value::Unsupported,
    }
}

/// String: toString
pub(crate) fn string_to_string(_vm: &mut Vm, args: &[Value]) -> Value {
    match args.first() {
        Some(value @ Value::String(_)) => value.clone(),
        _ => Value::Unsupported,
    }
}

/// String: `+ ` (concatenate)
pub(crate) fn string_plus(_vm: &mut Vm, args: &[Value]) -> Value {
    match (args.first(), args.get(1)) {
        (Some(Value::String(left)), Some(Value::String(right))) => {
            let joined: Rc<[u8]> = left.iter().chain(right.iter()).copied().collect();
            Value::String(joined)
        }
        _ => Value::Unsupported,
    }
}
