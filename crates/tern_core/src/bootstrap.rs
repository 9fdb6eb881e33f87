//! Primitive registry: the built-in classes and their native methods.
//!
//! Bootstrap is data driven. [`PRIMITIVES`] lists every native method as a
//! `(class, signature, primitive)` entry and [`SINGLETONS`] lists the library
//! objects published as globals. [`register_primitives`] consumes both tables
//! with one loop each, so the resulting method tables are identical for
//! every VM.

use log::debug;
use tern_foundation::{ClassId, Value};

use crate::class::Primitive;
use crate::native::{
    io_write, num_abs, num_divide, num_minus, num_multiply, num_plus, num_to_string,
    string_contains, string_count, string_plus, string_to_string,
};
use crate::vm::Vm;

/// Ids of the built-in classes.
///
/// Bootstrap defines these first and in this order, so their ids are fixed.
pub mod builtin {
    use tern_foundation::ClassId;

    /// Class of class values.
    pub const CLASS: ClassId = ClassId::from_index(0);
    /// Class of numbers.
    pub const NUM: ClassId = ClassId::from_index(1);
    /// Class of strings.
    pub const STRING: ClassId = ClassId::from_index(2);
    /// Class of the `io` library object.
    pub const IO: ClassId = ClassId::from_index(3);
    /// Class of the unsupported-operation sentinel.
    pub const UNSUPPORTED: ClassId = ClassId::from_index(4);
}

/// Built-in classes, in id order.
const BUILTIN_CLASSES: &[(ClassId, &str)] = &[
    (builtin::CLASS, "Class"),
    (builtin::NUM, "Num"),
    (builtin::STRING, "String"),
    (builtin::IO, "IO"),
    (builtin::UNSUPPORTED, "Unsupported"),
];

/// One native method binding.
#[derive(Debug)]
pub struct PrimitiveEntry {
    /// Class receiving the method.
    pub class: ClassId,
    /// Method signature (name plus one separator per argument).
    pub signature: &'static str,
    /// Native implementation.
    pub primitive: Primitive,
}

const fn entry(
    class: ClassId,
    signature: &'static str,
    primitive: Primitive,
) -> PrimitiveEntry {
    PrimitiveEntry {
        class,
        signature,
        primitive,
    }
}

/// Every native method, in registration order.
pub const PRIMITIVES: &[PrimitiveEntry] = &[
    entry(builtin::NUM, "abs", Primitive::new("num_abs", num_abs)),
    entry(builtin::NUM, "toString", Primitive::new("num_toString", num_to_string)),
    entry(builtin::NUM, "- ", Primitive::new("num_minus", num_minus)),
    entry(builtin::NUM, "+ ", Primitive::new("num_plus", num_plus)),
    entry(builtin::NUM, "* ", Primitive::new("num_multiply", num_multiply)),
    entry(builtin::NUM, "/ ", Primitive::new("num_divide", num_divide)),
    entry(builtin::STRING, "contains ", Primitive::new("string_contains", string_contains)),
    entry(builtin::STRING, "count", Primitive::new("string_count", string_count)),
    entry(builtin::STRING, "toString", Primitive::new("string_toString", string_to_string)),
    entry(builtin::STRING, "+ ", Primitive::new("string_plus", string_plus)),
    entry(builtin::IO, "write ", Primitive::new("io_write", io_write)),
];

/// Library objects: each class is instantiated once and bound to the name.
pub const SINGLETONS: &[(ClassId, &str)] = &[(builtin::IO, "io")];

/// Defines the built-in classes, binds every primitive, and publishes the
/// global singletons.
///
/// Called once from [`Vm::new`] on an empty VM.
pub(crate) fn register_primitives(vm: &mut Vm) {
    debug_assert_eq!(vm.class_count(), 0, "bootstrap must run on a fresh VM");

    for &(expected, name) in BUILTIN_CLASSES {
        let id = vm.define_class(name);
        debug_assert_eq!(id, expected, "builtin class {name} defined out of order");
    }

    for entry in PRIMITIVES {
        vm.bind_primitive(entry.class, entry.signature, entry.primitive);
    }

    for &(class, name) in SINGLETONS {
        vm.define_global(name, Value::instance(class, 0));
    }

    debug!(
        "bootstrapped {} classes, {} primitives, {} globals",
        BUILTIN_CLASSES.len(),
        PRIMITIVES.len(),
        SINGLETONS.len()
    );
}
