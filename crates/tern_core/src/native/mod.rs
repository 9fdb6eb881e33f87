//! Native method implementations for the built-in classes.
//!
//! This module contains all primitives organized by receiver class:
//! - `num`: Number arithmetic and formatting
//! - `string`: String search, length, and concatenation
//! - `io`: Text output
//!
//! Every primitive checks the kind of each operand it reads. A mismatch
//! yields [`Value::Unsupported`](tern_foundation::Value::Unsupported); raising
//! the error is left to the caller.

mod io;
mod num;
mod string;

pub(crate) use io::io_write;
pub(crate) use num::{
    num_abs, num_divide, num_minus, num_multiply, num_plus, num_to_string,
};
pub(crate) use string::{string_contains, string_count, string_plus, string_to_string};
