//! Method dispatch: the call protocol between the interpreter loop and the
//! object model.
//!
//! [`Vm::dispatch`] resolves the receiver's class, looks the symbol up, and
//! runs a primitive directly. It reports compiled bodies and unbound slots
//! back to the caller instead of failing, and passes the unsupported
//! sentinel through untouched, so the interpreter loop decides how to
//! escalate. [`Vm::send`] is the escalating variant for hosts that only call
//! primitives.

use tern_foundation::{
    ClassId, Error, ErrorContext, ErrorKind, Result, SymbolId, Value, signature,
};

use crate::class::{BlockId, MethodSlot};
use crate::vm::Vm;

/// Outcome of dispatching one call.
#[derive(Clone, Debug, PartialEq)]
pub enum Dispatch {
    /// A primitive ran and produced this value (possibly
    /// [`Value::Unsupported`]).
    Returned(Value),
    /// The method is a compiled body for the interpreter loop to run.
    Enter {
        /// The body to run.
        block: BlockId,
        /// The class the method was found on.
        class: ClassId,
    },
    /// The receiver's class has no binding for the symbol.
    Unbound {
        /// The receiver's class.
        class: ClassId,
    },
}

impl Dispatch {
    /// Returns the primitive's result, if a primitive ran.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Returned(value) => Some(value),
            Self::Enter { .. } | Self::Unbound { .. } => None,
        }
    }
}

impl Vm {
    /// Dispatches `symbol` on `args[0]` with the whole argument list.
    ///
    /// # Errors
    ///
    /// Returns an error only if `args` is empty.
    pub fn dispatch(&mut self, symbol: SymbolId, args: &[Value]) -> Result<Dispatch> {
        let receiver = args
            .first()
            .ok_or_else(|| Error::new(ErrorKind::MissingReceiver))?;
        let class = self.class_of(receiver);

        Ok(match self.lookup(class, symbol) {
            MethodSlot::Primitive(primitive) => Dispatch::Returned((primitive.func)(self, args)),
            MethodSlot::Block(block) => Dispatch::Enter { block, class },
            MethodSlot::Absent => Dispatch::Unbound { class },
        })
    }

    /// Dispatches `symbol` and turns every non-value outcome into an error.
    ///
    /// Every escalated error carries the frame `Class.signature` of the call.
    ///
    /// # Errors
    ///
    /// Returns an error if `args` is empty, the method is unbound, the method
    /// is a compiled body, or the primitive returned the unsupported sentinel.
    pub fn send(&mut self, symbol: SymbolId, args: &[Value]) -> Result<Value> {
        let outcome = self.dispatch(symbol, args)?;
        let class = match outcome {
            // A primitive ran, so the receiver exists.
            Dispatch::Returned(Value::Unsupported) => self.class_of(&args[0]),
            Dispatch::Returned(value) => return Ok(value),
            Dispatch::Enter { class, .. } | Dispatch::Unbound { class } => class,
        };

        let method = self.symbols().display_name(symbol);
        let class_name = self.class_name(class);
        let err = match outcome {
            Dispatch::Enter { .. } => Error::new(ErrorKind::RequiresInterpreter {
                method: method.clone(),
                class: class_name.to_string(),
            }),
            Dispatch::Unbound { .. } => Error::unbound_method(&method, class_name),
            Dispatch::Returned(_) => Error::unsupported_operands(
                &method,
                class_name,
                args.iter().skip(1).map(Value::kind).collect(),
            ),
        };
        Err(err.with_context(self.call_frame(class, &method)))
    }

    /// Calls the method `name` on `args[0]`, encoding the arity from the
    /// number of arguments after the receiver.
    ///
    /// Only names already interned can be bound, so an unknown name is
    /// reported as unbound without growing the symbol table.
    ///
    /// # Errors
    ///
    /// Same as [`Vm::send`].
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value> {
        let receiver = args
            .first()
            .ok_or_else(|| Error::new(ErrorKind::MissingReceiver))?;
        let sig = signature(name, args.len() - 1);
        if let Some(symbol) = self.symbols().get(&sig) {
            return self.send(symbol, args);
        }

        let class = self.class_of(receiver);
        let method = String::from_utf8_lossy(&sig).into_owned();
        Err(Error::unbound_method(&method, self.class_name(class))
            .with_context(self.call_frame(class, &method)))
    }

    fn call_frame(&self, class: ClassId, method: &str) -> ErrorContext {
        ErrorContext::new().with_frame(format!("{}.{method}", self.class_name(class)))
    }
}
