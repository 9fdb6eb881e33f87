//! Class and method tables, primitive registry, and dispatch for Tern.
//!
//! This crate provides:
//! - [`Vm`] - The context object owning symbols, classes, and globals
//! - [`MethodTable`] / [`MethodSlot`] - Symbol-indexed method storage
//! - [`Vm::dispatch`] - The call protocol used by the interpreter loop
//! - [`bootstrap`] - The built-in classes and their primitives
//! - [`VmConfig`] - Per-instance configuration

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod bootstrap;
pub mod class;
pub mod config;
mod dispatch;
pub mod globals;
mod native;
mod vm;

pub use bootstrap::builtin;
pub use class::{BlockId, Class, MethodSlot, MethodTable, NativeFn, Primitive, SlotKind};
pub use config::{OutputChannel, VmConfig};
pub use dispatch::Dispatch;
pub use globals::GlobalTable;
pub use vm::Vm;
