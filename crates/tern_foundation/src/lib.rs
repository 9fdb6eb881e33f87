//! Symbols, values, and error types for Tern.
//!
//! This crate provides:
//! - [`SymbolTable`] - Interning of method and global names into [`SymbolId`]s
//! - [`Value`] - The closed set of runtime value kinds
//! - [`Instance`] - Heap objects created from user and library classes
//! - [`Error`] - Host-facing errors with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod format;
pub mod intern;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind};
pub use format::{DEFAULT_PRECISION, format_general};
pub use intern::{SIGNATURE_SEPARATOR, SymbolId, SymbolTable, arity_of, signature};
pub use value::{ClassId, Instance, Value, ValueKind};

/// Result type alias using the Tern error type.
pub type Result<T> = std::result::Result<T, Error>;
