//! Error types for the Tern runtime.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//!
//! Primitives never produce these errors: they signal operand mismatches by
//! returning [`Value::Unsupported`](crate::Value::Unsupported). Errors are
//! built by host-facing entry points that escalate those signals.

use std::fmt;

use thiserror::Error;

use crate::value::ValueKind;

/// The main error type for Tern operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an unsupported operands error.
    #[must_use]
    pub fn unsupported_operands(
        method: impl Into<String>,
        class: impl Into<String>,
        operands: Vec<ValueKind>,
    ) -> Self {
        Self::new(ErrorKind::UnsupportedOperands {
            method: method.into(),
            class: class.into(),
            operands,
        })
    }

    /// Creates an unbound method error.
    #[must_use]
    pub fn unbound_method(method: impl Into<String>, class: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnboundMethod {
            method: method.into(),
            class: class.into(),
        })
    }

    /// Creates an undefined global error.
    #[must_use]
    pub fn undefined_global(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UndefinedGlobal(name.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A primitive returned the unsupported sentinel for these operands.
    #[error("{class} does not implement '{method}' for operands ({})", join_kinds(.operands))]
    UnsupportedOperands {
        /// The method signature that was called.
        method: String,
        /// Name of the receiver's class.
        class: String,
        /// Kinds of the arguments after the receiver.
        operands: Vec<ValueKind>,
    },

    /// The receiver's class has no binding for the method.
    #[error("{class} does not implement '{method}'")]
    UnboundMethod {
        /// The method signature that was called.
        method: String,
        /// Name of the receiver's class.
        class: String,
    },

    /// The method is a compiled body; only the interpreter loop can run it.
    #[error("'{method}' on {class} is a compiled method and needs the interpreter")]
    RequiresInterpreter {
        /// The method signature that was called.
        method: String,
        /// Name of the receiver's class.
        class: String,
    },

    /// A call was made with an empty argument list (no receiver).
    #[error("method call without a receiver")]
    MissingReceiver,

    /// A global name was referenced before it was defined.
    #[error("undefined global: {0}")]
    UndefinedGlobal(String),

    /// Field index past the end of an instance's field store.
    #[error("field index out of bounds: {index} (length {length})")]
    FieldOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// The number of fields allocated.
        length: usize,
    },

    /// A symbol snapshot listed the same name twice.
    #[error("duplicate symbol in snapshot: '{0}'")]
    DuplicateSymbol(String),
}

fn join_kinds(kinds: &[ValueKind]) -> String {
    kinds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// The call stack at the point an error was raised.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Method frames as `Class.signature`, innermost last.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }

    /// Returns the innermost frame, if any.
    #[must_use]
    pub fn innermost(&self) -> Option<&str> {
        self.stack.last().map(String::as_str)
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for frame in self.stack.iter().rev() {
            writeln!(f, "  in {frame}")?;
        }
        Ok(())
    }
}
