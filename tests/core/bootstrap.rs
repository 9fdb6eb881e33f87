//! Integration tests for the primitive registry
//!
//! Tests that bootstrap is complete and deterministic.

use tern_core::{SlotKind, Vm, VmConfig, builtin};
use tern_foundation::{ClassId, Value};

/// Every bound method of a class as (name, slot kind), in symbol order.
fn method_kinds(vm: &Vm, class: ClassId) -> Vec<(Vec<u8>, SlotKind)> {
    vm.class(class)
        .unwrap()
        .methods()
        .bound()
        .map(|(symbol, slot)| (vm.symbols().name(symbol).unwrap().to_vec(), slot.kind()))
        .collect()
}

#[test]
fn bootstrap_is_deterministic() {
    let a = Vm::new(VmConfig::capturing());
    let b = Vm::new(VmConfig::capturing());

    assert_eq!(a.class_count(), b.class_count());
    assert_eq!(a.symbols().len(), b.symbols().len());
    for index in 0..u32::try_from(a.class_count()).unwrap() {
        let class = ClassId::from_index(index);
        assert_eq!(a.class_name(class), b.class_name(class));
        assert_eq!(method_kinds(&a, class), method_kinds(&b, class));
    }
}

#[test]
fn num_methods() {
    let vm = Vm::new(VmConfig::capturing());
    let names: Vec<_> = method_kinds(&vm, builtin::NUM)
        .into_iter()
        .map(|(name, _)| String::from_utf8(name).unwrap())
        .collect();
    assert_eq!(names, ["abs", "toString", "- ", "+ ", "* ", "/ "]);
}

#[test]
fn string_methods() {
    let vm = Vm::new(VmConfig::capturing());
    let names: Vec<_> = method_kinds(&vm, builtin::STRING)
        .into_iter()
        .map(|(name, _)| String::from_utf8(name).unwrap())
        .collect();
    // toString and "+ " were interned for Num first, so they sort earlier.
    assert_eq!(names, ["toString", "+ ", "contains ", "count"]);
}

#[test]
fn io_global_is_an_io_instance() {
    let vm = Vm::new(VmConfig::capturing());
    let io = vm.global_by_name("io").unwrap();
    assert!(matches!(io, Value::Instance(obj) if obj.class() == builtin::IO));
    assert_eq!(vm.globals().len(), 1);
}

#[test]
fn user_classes_follow_builtins() {
    let mut vm = Vm::new(VmConfig::capturing());
    let first = vm.define_class("First");
    assert_eq!(first.index(), 5);
    assert!(vm.class(first).unwrap().methods().is_empty());
}

#[test]
fn rebinding_a_builtin_replaces_it() {
    fn always_zero(_vm: &mut Vm, _args: &[Value]) -> Value {
        Value::Num(0.0)
    }

    let mut vm = Vm::new(VmConfig::capturing());
    vm.bind_primitive(
        builtin::NUM,
        "+ ",
        tern_core::Primitive::new("always_zero", always_zero),
    );
    assert_eq!(
        vm.call("+", &[Value::Num(2.0), Value::Num(2.0)]).unwrap(),
        Value::Num(0.0)
    );

    // A fresh VM is unaffected.
    let mut other = Vm::new(VmConfig::capturing());
    assert_eq!(
        other.call("+", &[Value::Num(2.0), Value::Num(2.0)]).unwrap(),
        Value::Num(4.0)
    );
}
