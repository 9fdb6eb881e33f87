//! Number primitives.

use tern_foundation::{Value, format_general};

use crate::vm::Vm;

/// Applies `op` when both the receiver and the argument are numbers.
fn binary(args: &[Value], op: impl FnOnce(f64, f64) -> f64) -> Value {
    match (args.first(), args.get(1)) {
        (Some(Value::Num(a)), Some(Value::Num(b))) => Value::Num(op(*a, *b)),
        _ => Value::Unsupported,
    }
}

/// Num: abs
pub(crate) fn num_abs(_vm: &mut Vm, args: &[Value]) -> Value {
    match args.first() {
        Some(Value::Num(n)) => Value::Num(n.abs()),
        _ => Value::Unsupported,
    }
}

/// Num: toString
pub(crate) fn num_to_string(vm: &mut Vm, args: &[Value]) -> Value {
    match args.first() {
        Some(Value::Num(n)) => Value::from(format_general(*n, vm.config().number_precision)),
        _ => Value::Unsupported,
    }
}

/// Num: `- ` (subtract)
pub(crate) fn num_minus(_vm: &mut Vm, args: &[Value]) -> Value {
    binary(args, |a, b| a - b)
}

/// Num: `+ ` (add)
pub(crate) fn num_plus(_vm: &mut Vm, args: &[Value]) -> Value {
    binary(args, |a, b| a + b)
}

/// Num: `* ` (multiply)
pub(crate) fn num_multiply(_vm: &mut Vm, args: &[Value]) -> Value {
    binary(args, |a, b| a * b)
}

/// Num: `/ ` (divide). Division by zero follows IEEE 754.
pub(crate) fn num_divide(_vm: &mut Vm, args: &[Value]) -> Value {
    binary(args, |a, b| a / b)
}
