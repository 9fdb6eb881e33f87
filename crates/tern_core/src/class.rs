//! Classes and their symbol-indexed method tables.
//!
//! A method table is a flat array with one slot per symbol id. Lookup is a
//! bounds-checked index: any symbol past the end of the array is simply
//! absent. Tables grow when a method is bound and are never shrunk.

use std::fmt;

use tern_foundation::{ClassId, SymbolId, Value};

use crate::vm::Vm;

/// Native method implementation.
///
/// `args[0]` is the receiver and `args.len()` is the argument count. A
/// primitive returns [`Value::Unsupported`] when it cannot handle the kinds
/// of its operands.
pub type NativeFn = fn(&mut Vm, &[Value]) -> Value;

/// A named native method.
#[derive(Clone, Copy)]
pub struct Primitive {
    /// Function name for diagnostics.
    pub name: &'static str,
    /// Function pointer.
    pub func: NativeFn,
}

impl Primitive {
    /// Creates a primitive.
    #[must_use]
    pub const fn new(name: &'static str, func: NativeFn) -> Self {
        Self { name, func }
    }
}

impl fmt::Debug for Primitive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Primitive({})", self.name)
    }
}

/// Reference to a compiled method body.
///
/// The index is into the compiler's function table; the core never looks
/// inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BlockId(pub u32);

/// A class's binding for one symbol.
#[derive(Clone, Copy, Debug, Default)]
pub enum MethodSlot {
    /// No method bound.
    #[default]
    Absent,
    /// Native method.
    Primitive(Primitive),
    /// Compiled method body, run by the interpreter loop.
    Block(BlockId),
}

/// The kind of a [`MethodSlot`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// [`MethodSlot::Absent`]
    Absent,
    /// [`MethodSlot::Primitive`]
    Primitive,
    /// [`MethodSlot::Block`]
    Block,
}

impl MethodSlot {
    /// Returns the kind of this slot.
    #[must_use]
    pub const fn kind(&self) -> SlotKind {
        match self {
            Self::Absent => SlotKind::Absent,
            Self::Primitive(_) => SlotKind::Primitive,
            Self::Block(_) => SlotKind::Block,
        }
    }

    /// Returns true if no method is bound.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

/// Symbol-indexed method slots for one class.
#[derive(Clone, Debug, Default)]
pub struct MethodTable {
    slots: Vec<MethodSlot>,
}

impl MethodTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the slot for `symbol`, [`MethodSlot::Absent`] if past the end.
    #[must_use]
    #[inline]
    pub fn get(&self, symbol: SymbolId) -> MethodSlot {
        self.slots
            .get(symbol.as_usize())
            .copied()
            .unwrap_or(MethodSlot::Absent)
    }

    /// Binds `symbol`, growing the table if needed. Returns the previous slot.
    pub fn bind(&mut self, symbol: SymbolId, slot: MethodSlot) -> MethodSlot {
        let index = symbol.as_usize();
        if index >= self.slots.len() {
            self.slots.resize(index + 1, MethodSlot::Absent);
        }
        std::mem::replace(&mut self.slots[index], slot)
    }

    /// Returns the current table length (one past the highest bound symbol).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the table has no slots at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterates over the bound (non-absent) slots in symbol order.
    pub fn bound(&self) -> impl Iterator<Item = (SymbolId, MethodSlot)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            #[allow(clippy::cast_possible_truncation)]
            let symbol = SymbolId::from_index(i as u32);
            (!slot.is_absent()).then_some((symbol, *slot))
        })
    }
}

/// A class: a name, an optional superclass, and a method table.
#[derive(Clone, Debug)]
pub struct Class {
    id: ClassId,
    name: String,
    superclass: Option<ClassId>,
    methods: MethodTable,
}

impl Class {
    pub(crate) fn new(id: ClassId, name: impl Into<String>, superclass: Option<ClassId>) -> Self {
        Self {
            id,
            name: name.into(),
            superclass,
            methods: MethodTable::new(),
        }
    }

    /// Returns this class's id.
    #[must_use]
    pub const fn id(&self) -> ClassId {
        self.id
    }

    /// Returns the class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared superclass, if any.
    ///
    /// Recorded for the interpreter's method resolution; lookups on this
    /// class never consult it.
    #[must_use]
    pub const fn superclass(&self) -> Option<ClassId> {
        self.superclass
    }

    /// Returns the method table.
    #[must_use]
    pub const fn methods(&self) -> &MethodTable {
        &self.methods
    }

    pub(crate) fn methods_mut(&mut self) -> &mut MethodTable {
        &mut self.methods
    }
}
