//! Core value type for all Tern data.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::{Error, ErrorKind};
use crate::format::{DEFAULT_PRECISION, format_general};

/// Identifies a class in a VM's class table.
///
/// Classes are never copied; values refer to them through this id.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ClassId(u32);

impl ClassId {
    /// Creates a class id from a raw class table index.
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this class.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

/// Core value type for all Tern data.
///
/// Cloning is O(1): numbers are copied, strings and instances are reference
/// counted. Values are confined to the thread that created them.
#[derive(Clone)]
pub enum Value {
    /// 64-bit floating point number.
    Num(f64),
    /// Immutable byte string.
    String(Rc<[u8]>),
    /// Reference to a class.
    Class(ClassId),
    /// Reference to an object.
    Instance(Rc<Instance>),
    /// Returned by a primitive that cannot handle its operand types.
    ///
    /// Never stored as user-visible data.
    Unsupported,
}

/// The kind of a [`Value`], without its payload.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    /// [`Value::Num`]
    Num,
    /// [`Value::String`]
    String,
    /// [`Value::Class`]
    Class,
    /// [`Value::Instance`]
    Instance,
    /// [`Value::Unsupported`]
    Unsupported,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Num => "Num",
            Self::String => "String",
            Self::Class => "Class",
            Self::Instance => "Instance",
            Self::Unsupported => "Unsupported",
        };
        f.write_str(name)
    }
}

/// An object: a class reference plus a fixed number of fields.
///
/// The field count is chosen at allocation and never changes. Fields start
/// out unset.
pub struct Instance {
    class: ClassId,
    fields: RefCell<Box<[Option<Value>]>>,
}

impl Instance {
    /// Allocates an instance of `class` with `field_count` unset fields.
    #[must_use]
    pub fn new(class: ClassId, field_count: usize) -> Self {
        Self {
            class,
            fields: RefCell::new(vec![None; field_count].into_boxed_slice()),
        }
    }

    /// Returns the class this instance was created from.
    #[must_use]
    pub const fn class(&self) -> ClassId {
        self.class
    }

    /// Returns the number of fields allocated for this instance.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.borrow().len()
    }

    /// Reads a field. Returns `None` if the field is unset or out of range.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<Value> {
        self.fields.borrow().get(index).cloned().flatten()
    }

    /// Writes a field.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is not below [`Instance::field_count`].
    pub fn set_field(&self, index: usize, value: Value) -> crate::Result<()> {
        let mut fields = self.fields.borrow_mut();
        let length = fields.len();
        let slot = fields
            .get_mut(index)
            .ok_or_else(|| Error::new(ErrorKind::FieldOutOfBounds { index, length }))?;
        *slot = Some(value);
        Ok(())
    }
}

// Fields may refer back to the instance, so Debug stays shallow.
impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("class", &self.class)
            .field("fields", &self.field_count())
            .finish()
    }
}

impl Value {
    /// Creates a string value from raw bytes.
    #[must_use]
    pub fn string(bytes: impl Into<Rc<[u8]>>) -> Self {
        Self::String(bytes.into())
    }

    /// Allocates a new instance value with `field_count` unset fields.
    #[must_use]
    pub fn instance(class: ClassId, field_count: usize) -> Self {
        Self::Instance(Rc::new(Instance::new(class, field_count)))
    }

    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Num(_) => ValueKind::Num,
            Self::String(_) => ValueKind::String,
            Self::Class(_) => ValueKind::Class,
            Self::Instance(_) => ValueKind::Instance,
            Self::Unsupported => ValueKind::Unsupported,
        }
    }

    /// Returns true if this is the unsupported-operation sentinel.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(self, Self::Unsupported)
    }

    /// Returns true if this value is truthy.
    ///
    /// Zero, NaN, and the unsupported sentinel are falsy; everything else
    /// (including the empty string) is truthy.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Num(n) => *n != 0.0 && !n.is_nan(),
            Self::String(_) | Self::Class(_) | Self::Instance(_) => true,
            Self::Unsupported => false,
        }
    }

    /// Attempts to extract a number.
    #[must_use]
    pub const fn as_num(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to extract the bytes of a string.
    #[must_use]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::String(s) => Some(s.as_ref()),
            _ => None,
        }
    }

    /// Attempts to extract a class id.
    #[must_use]
    pub const fn as_class(&self) -> Option<ClassId> {
        match self {
            Self::Class(id) => Some(*id),
            _ => None,
        }
    }

    /// Attempts to extract an instance reference.
    #[must_use]
    pub fn as_instance(&self) -> Option<&Rc<Instance>> {
        match self {
            Self::Instance(obj) => Some(obj),
            _ => None,
        }
    }
}

// Numbers compare by bit pattern, instances by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Num(a), Self::Num(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Class(a), Self::Class(b)) => a == b,
            (Self::Instance(a), Self::Instance(b)) => Rc::ptr_eq(a, b),
            (Self::Unsupported, Self::Unsupported) => true,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{:?}", String::from_utf8_lossy(s)),
            Self::Class(id) => write!(f, "{id:?}"),
            Self::Instance(obj) => write!(f, "{obj:?}"),
            Self::Unsupported => write!(f, "Unsupported"),
        }
    }
}

/// Fallback rendering for logs, errors and tests, without access to class
/// names or the VM's number precision.
///
/// Program output goes through `Vm::render` in `tern_core`, which agrees with
/// this form except that classes and instances are shown by class name.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => f.write_str(&format_general(*n, DEFAULT_PRECISION)),
            Self::String(s) => f.write_str(&String::from_utf8_lossy(s)),
            Self::Class(id) => write!(f, "class #{}", id.0),
            Self::Instance(obj) => write!(f, "instance of class #{}", obj.class.0),
            Self::Unsupported => f.write_str("unsupported"),
        }
    }
}

// Convenience From implementations

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Num(f64::from(n))
    }
}

/// Booleans become `1` and `0`; the language has no separate boolean kind.
impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Num(if b { 1.0 } else { 0.0 })
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.as_bytes().into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into_bytes().into())
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self::String(bytes.into())
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::String(bytes.into())
    }
}

impl From<ClassId> for Value {
    fn from(id: ClassId) -> Self {
        Self::Class(id)
    }
}

impl From<Instance> for Value {
    fn from(obj: Instance) -> Self {
        Self::Instance(Rc::new(obj))
    }
}

impl From<Rc<Instance>> for Value {
    fn from(obj: Rc<Instance>) -> Self {
        Self::Instance(obj)
    }
}
