//! The VM context: every table the object model needs, in one place.
//!
//! A [`Vm`] owns its symbol table, class table, and global bindings. Nothing
//! is shared between instances and nothing lives in statics. Because values
//! are reference counted with `Rc`, a `Vm` cannot leave the thread that
//! created it.
//!
//! Construction runs the primitive bootstrap exactly once, so every `Vm`
//! handed to a host already has its built-in classes, primitives, and global
//! singletons in place.

use std::io::Write;

use log::{trace, warn};
use tern_foundation::{ClassId, Error, Result, SymbolId, SymbolTable, Value, format_general};

use crate::bootstrap::{self, builtin};
use crate::class::{BlockId, Class, MethodSlot, Primitive};
use crate::config::{OutputChannel, VmConfig};
use crate::globals::GlobalTable;

/// Runtime context for one VM instance.
pub struct Vm {
    config: VmConfig,
    /// Method and global names.
    symbols: SymbolTable,
    /// All classes, indexed by `ClassId`.
    classes: Vec<Class>,
    /// Top-level bindings.
    globals: GlobalTable,
    /// Lines written while output is captured.
    output: Vec<String>,
}

impl Default for Vm {
    fn default() -> Self {
        Self::new(VmConfig::default())
    }
}

impl Vm {
    /// Creates a VM with its built-in classes and primitives registered.
    #[must_use]
    pub fn new(config: VmConfig) -> Self {
        let mut vm = Self {
            symbols: SymbolTable::with_capacity(config.symbol_capacity),
            config,
            classes: Vec::new(),
            globals: GlobalTable::new(),
            output: Vec::new(),
        };
        bootstrap::register_primitives(&mut vm);
        vm
    }

    /// Returns the configuration this VM was created with.
    #[must_use]
    pub fn config(&self) -> &VmConfig {
        &self.config
    }

    // =========================================================================
    // Symbols
    // =========================================================================

    /// Interns a method or global name.
    pub fn intern(&mut self, name: impl AsRef<[u8]>) -> SymbolId {
        self.symbols.intern(name)
    }

    /// Returns the symbol table.
    #[must_use]
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    // =========================================================================
    // Classes
    // =========================================================================

    /// Defines a new class with an empty method table.
    pub fn define_class(&mut self, name: &str) -> ClassId {
        self.push_class(name, None)
    }

    /// Defines a new class that declares `superclass` as its parent.
    ///
    /// The relation is recorded only; lookups on the new class do not fall
    /// back to the superclass.
    pub fn define_subclass(&mut self, name: &str, superclass: ClassId) -> ClassId {
        self.push_class(name, Some(superclass))
    }

    fn push_class(&mut self, name: &str, superclass: Option<ClassId>) -> ClassId {
        let index = u32::try_from(self.classes.len()).expect("too many classes");
        let id = ClassId::from_index(index);
        trace!("define class {name} as {id:?} (superclass {superclass:?})");
        self.classes.push(Class::new(id, name, superclass));
        id
    }

    /// Gets a class by id.
    #[must_use]
    pub fn class(&self, id: ClassId) -> Option<&Class> {
        self.classes.get(id.index() as usize)
    }

    /// Returns the name of a class, or `?` for an id this VM never issued.
    #[must_use]
    pub fn class_name(&self, id: ClassId) -> &str {
        self.class(id).map_or("?", Class::name)
    }

    /// Returns the declared superclass of a class.
    #[must_use]
    pub fn superclass(&self, id: ClassId) -> Option<ClassId> {
        self.class(id).and_then(Class::superclass)
    }

    /// Returns the number of classes defined so far.
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Returns the class whose method table handles calls on `value`.
    #[must_use]
    pub fn class_of(&self, value: &Value) -> ClassId {
        match value {
            Value::Num(_) => builtin::NUM,
            Value::String(_) => builtin::STRING,
            Value::Class(_) => builtin::CLASS,
            Value::Instance(obj) => obj.class(),
            Value::Unsupported => builtin::UNSUPPORTED,
        }
    }

    fn class_mut(&mut self, id: ClassId) -> &mut Class {
        &mut self.classes[id.index() as usize]
    }

    // =========================================================================
    // Method binding
    // =========================================================================

    /// Interns `name` and binds it to a primitive on `class`.
    ///
    /// Any previous binding for that name on `class` is replaced.
    ///
    /// # Panics
    ///
    /// Panics if `class` was not issued by this VM.
    pub fn bind_primitive(
        &mut self,
        class: ClassId,
        name: impl AsRef<[u8]>,
        primitive: Primitive,
    ) -> SymbolId {
        let symbol = self.intern(name);
        self.bind_primitive_symbol(class, symbol, primitive);
        symbol
    }

    /// Binds an already interned symbol to a primitive on `class`.
    ///
    /// # Panics
    ///
    /// Panics if `class` was not issued by this VM.
    pub fn bind_primitive_symbol(&mut self, class: ClassId, symbol: SymbolId, primitive: Primitive) {
        trace!(
            "bind {}.{} to {}",
            self.class_name(class),
            self.symbols.display_name(symbol),
            primitive.name
        );
        self.class_mut(class)
            .methods_mut()
            .bind(symbol, MethodSlot::Primitive(primitive));
    }

    /// Binds a compiled method body to `symbol` on `class`.
    ///
    /// # Panics
    ///
    /// Panics if `class` was not issued by this VM.
    pub fn bind_block(&mut self, class: ClassId, symbol: SymbolId, block: BlockId) {
        trace!(
            "bind {}.{} to block {}",
            self.class_name(class),
            self.symbols.display_name(symbol),
            block.0
        );
        self.class_mut(class)
            .methods_mut()
            .bind(symbol, MethodSlot::Block(block));
    }

    /// Looks up the method bound to `symbol` on `class`.
    ///
    /// Returns [`MethodSlot::Absent`] for unbound symbols and for classes this
    /// VM never issued. Superclasses are not consulted.
    #[must_use]
    #[inline]
    pub fn lookup(&self, class: ClassId, symbol: SymbolId) -> MethodSlot {
        self.class(class)
            .map_or(MethodSlot::Absent, |c| c.methods().get(symbol))
    }

    // =========================================================================
    // Globals
    // =========================================================================

    /// Interns `name` and binds it as a global. Returns the global's symbol.
    pub fn define_global(&mut self, name: impl AsRef<[u8]>, value: Value) -> SymbolId {
        let symbol = self.intern(name);
        trace!("define global {}", self.symbols.display_name(symbol));
        self.globals.define(symbol, value);
        symbol
    }

    /// Gets the value of a global.
    #[must_use]
    pub fn global(&self, symbol: SymbolId) -> Option<&Value> {
        self.globals.get(symbol)
    }

    /// Gets the value of a global by name.
    ///
    /// # Errors
    ///
    /// Returns an error if no global with that name is defined.
    pub fn global_by_name(&self, name: impl AsRef<[u8]>) -> Result<&Value> {
        let name = name.as_ref();
        self.symbols
            .get(name)
            .and_then(|symbol| self.globals.get(symbol))
            .ok_or_else(|| Error::undefined_global(String::from_utf8_lossy(name)))
    }

    /// Returns the global binding table.
    #[must_use]
    pub fn globals(&self) -> &GlobalTable {
        &self.globals
    }

    // =========================================================================
    // Text output
    // =========================================================================

    /// Renders a value as human-readable text.
    #[must_use]
    pub fn render(&self, value: &Value) -> String {
        match value {
            Value::Num(n) => format_general(*n, self.config.number_precision),
            Value::String(s) => String::from_utf8_lossy(s).into_owned(),
            Value::Class(id) => self.class_name(*id).to_string(),
            Value::Instance(obj) => format!("instance of {}", self.class_name(obj.class())),
            Value::Unsupported => "unsupported".to_string(),
        }
    }

    /// Writes one line of text to the output channel.
    ///
    /// Write failures are logged and otherwise ignored.
    pub fn write_line(&mut self, text: &str) {
        match self.config.output {
            OutputChannel::Stdout => {
                let mut stdout = std::io::stdout().lock();
                if let Err(err) = writeln!(stdout, "{text}").and_then(|()| stdout.flush()) {
                    warn!("failed to write to stdout: {err}");
                }
            }
            OutputChannel::Capture => self.output.push(text.to_string()),
        }
    }

    /// Returns the lines captured so far (always empty when printing to stdout).
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Takes and clears the captured lines.
    pub fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }
}
