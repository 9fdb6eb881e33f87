//! Integration tests for dispatch
//!
//! Tests the call protocol exposed to the interpreter loop.

use proptest::prelude::*;
use tern_core::{BlockId, Dispatch, Vm, VmConfig, builtin};
use tern_foundation::{ErrorKind, Value};

fn vm() -> Vm {
    Vm::new(VmConfig::capturing())
}

fn returned(vm: &mut Vm, name: &str, args: &[Value]) -> Value {
    let symbol = vm.intern(name);
    vm.dispatch(symbol, args)
        .unwrap()
        .into_value()
        .expect("primitive should run")
}

// =============================================================================
// Numbers
// =============================================================================

#[test]
fn num_plus_num() {
    let mut vm = vm();
    let (a, b) = (Value::Num(2.0), Value::Num(40.0));
    assert_eq!(returned(&mut vm, "+ ", &[a, b]), Value::Num(42.0));
}

#[test]
fn num_plus_string_is_unsupported() {
    let mut vm = vm();
    let result = returned(&mut vm, "+ ", &[Value::Num(2.0), Value::from("40")]);
    assert_eq!(result, Value::Unsupported);
}

#[test]
fn num_operators_reject_every_non_number_operand() {
    let mut vm = vm();
    let point = vm.define_class("Point");
    let io = vm.global_by_name("io").unwrap().clone();
    let operands = [
        Value::from("1"),
        Value::Unsupported,
        Value::Class(point),
        Value::Class(builtin::NUM),
        Value::instance(point, 0),
        io,
    ];

    for op in ["- ", "+ ", "* ", "/ "] {
        for b in &operands {
            let result = returned(&mut vm, op, &[Value::Num(1.0), b.clone()]);
            assert_eq!(result, Value::Unsupported, "Num {op:?} {b:?}");
        }
    }
}

#[test]
fn string_plus_rejects_every_non_string_operand() {
    let mut vm = vm();
    let point = vm.define_class("Point");
    let operands = [
        Value::Num(1.0),
        Value::Unsupported,
        Value::Class(point),
        Value::Class(builtin::STRING),
        Value::instance(point, 0),
    ];

    for b in operands {
        let result = returned(&mut vm, "+ ", &[Value::from("foo"), b.clone()]);
        assert_eq!(result, Value::Unsupported, "String + {b:?}");
    }
}

proptest! {
    #[test]
    fn num_plus_is_addition(a in any::<f64>(), b in any::<f64>()) {
        let mut vm = vm();
        let result = returned(&mut vm, "+ ", &[Value::Num(a), Value::Num(b)]);
        prop_assert_eq!(result, Value::Num(a + b));
    }

    #[test]
    fn count_is_byte_length(s in ".{0,24}") {
        let mut vm = vm();
        let value = Value::from(s.as_str());
        #[allow(clippy::cast_precision_loss)]
        let expected = Value::Num(s.len() as f64);
        prop_assert_eq!(returned(&mut vm, "count", &[value]), expected);
    }
}

// =============================================================================
// Strings
// =============================================================================

#[test]
fn string_contains_cases() {
    let mut vm = vm();
    let s = Value::from;
    assert!(returned(&mut vm, "contains ", &[s(""), s("")]).is_truthy());
    assert!(returned(&mut vm, "contains ", &[s("hello"), s("ell")]).is_truthy());
    assert!(!returned(&mut vm, "contains ", &[s("hello"), s("xyz")]).is_truthy());
}

#[test]
fn string_plus() {
    let mut vm = vm();
    assert_eq!(
        returned(&mut vm, "+ ", &[Value::from("foo"), Value::from("bar")]),
        Value::from("foobar")
    );
    assert_eq!(
        returned(&mut vm, "+ ", &[Value::from("foo"), Value::Num(1.0)]),
        Value::Unsupported
    );
}

// =============================================================================
// IO
// =============================================================================

#[test]
fn io_write_returns_argument() {
    let mut vm = vm();
    let io = vm.global_by_name("io").unwrap().clone();
    let point = vm.define_class("Point");

    let inputs = [
        Value::Num(1.5),
        Value::from("text"),
        Value::Class(point),
        Value::instance(point, 1),
    ];
    for x in inputs {
        assert_eq!(returned(&mut vm, "write ", &[io.clone(), x.clone()]), x);
    }
    assert_eq!(
        vm.take_output(),
        ["1.5", "text", "Point", "instance of Point"]
    );
}

#[test]
fn io_write_chains() {
    let mut vm = vm();
    let io = vm.global_by_name("io").unwrap().clone();
    let written = vm.call("write", &[io, Value::from("x")]).unwrap();
    let doubled = vm.call("+", &[written.clone(), written]).unwrap();
    assert_eq!(doubled, Value::from("xx"));
    assert_eq!(vm.output(), ["x"]);
}

// =============================================================================
// Non-primitive outcomes
// =============================================================================

#[test]
fn unbound_and_block_outcomes() {
    let mut vm = vm();
    let point = vm.define_class("Point");
    let area = vm.intern("area");

    let unbound = vm.dispatch(area, &[Value::instance(point, 0)]).unwrap();
    assert_eq!(unbound, Dispatch::Unbound { class: point });

    vm.bind_block(point, area, BlockId(1));
    let enter = vm.dispatch(area, &[Value::instance(point, 0)]).unwrap();
    assert_eq!(enter, Dispatch::Enter { block: BlockId(1), class: point });
}

#[test]
fn classes_dispatch_through_class_class() {
    let mut vm = vm();
    let point = vm.define_class("Point");
    let err = vm.call("abs", &[Value::Class(point)]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnboundMethod { ref class, .. } if class == "Class"));
    assert_eq!(vm.class_of(&Value::Class(point)), builtin::CLASS);
}
