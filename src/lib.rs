//! Tern - runtime core of a small class-based scripting language
//!
//! This crate re-exports all layers of the Tern runtime core for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: tern_core       Classes, method tables, primitives, dispatch
//! Layer 0: tern_foundation Core types (SymbolTable, Value, Error)
//! ```

pub use tern_core as vm;
pub use tern_foundation as foundation;
